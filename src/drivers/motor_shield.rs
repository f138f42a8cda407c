// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! PCA9685-based I2C DC motor shield.
//!
//! This module handles register access for the PCA9685 16-channel PWM
//! controller and the shield's fixed channel wiring: each DC motor uses one
//! PWM channel for speed and two channels as H-bridge direction inputs.

use embedded_hal::blocking::i2c::Write;

use crate::motors::{Direction, DriveTrain, MotorCommand};

// Register addresses
pub mod reg {
    pub const MODE1: u8 = 0x00;
    pub const MODE2: u8 = 0x01;
    pub const PRESCALE: u8 = 0xFE;
    pub const LED0_ON_L: u8 = 0x06;
}

// MODE1 bits
const MODE1_RESTART: u8 = 0x80;
const MODE1_AI: u8 = 0x20;
const MODE1_SLEEP: u8 = 0x10;
const MODE1_ALLCALL: u8 = 0x01;

/// Prescale for ~1.6 kHz PWM from the 25 MHz internal oscillator.
const PRESCALE_1600HZ: u8 = 3;

/// Default I2C address of the shield.
pub const DEFAULT_ADDRESS: u8 = 0x60;

/// Channel triple of one DC motor terminal: speed PWM plus the two
/// direction inputs of its half of the driver chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorChannels {
    pwm: u8,
    in1: u8,
    in2: u8,
}

/// DC motor terminals of the shield, with their fixed channel wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShieldMotor {
    M1,
    M2,
    M3,
    M4,
}

impl ShieldMotor {
    const fn channels(self) -> MotorChannels {
        match self {
            ShieldMotor::M1 => MotorChannels {
                pwm: 8,
                in2: 9,
                in1: 10,
            },
            ShieldMotor::M2 => MotorChannels {
                pwm: 13,
                in2: 12,
                in1: 11,
            },
            ShieldMotor::M3 => MotorChannels {
                pwm: 2,
                in2: 3,
                in1: 4,
            },
            ShieldMotor::M4 => MotorChannels {
                pwm: 7,
                in2: 6,
                in1: 5,
            },
        }
    }
}

/// Motor shield bound to one I2C bus address.
pub struct MotorShield<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C, E> MotorShield<I2C>
where
    I2C: Write<Error = E>,
{
    /// Construct a shield driver; call [`init`](Self::init) before use.
    pub fn new(i2c: I2C, addr: u8) -> Self {
        Self { i2c, addr }
    }

    /// Release the bus.
    pub fn free(self) -> I2C {
        self.i2c
    }

    /// Bring the PCA9685 out of sleep with auto-increment enabled and the
    /// PWM frequency programmed.
    ///
    /// The prescale register is writable only while the oscillator sleeps,
    /// so the sequence is sleep → prescale → wake → restart.
    pub fn init(&mut self) -> Result<(), E> {
        self.write_reg(reg::MODE1, MODE1_SLEEP | MODE1_AI)?;
        self.write_reg(reg::PRESCALE, PRESCALE_1600HZ)?;
        self.write_reg(reg::MODE1, MODE1_AI | MODE1_ALLCALL)?;

        // Oscillator needs 500 us after wake before RESTART is honored
        cortex_m::asm::delay(100_000);
        self.write_reg(reg::MODE1, MODE1_RESTART | MODE1_AI | MODE1_ALLCALL)?;

        // All outputs off
        for channel in 0..16 {
            self.set_pwm(channel, 0, 0)?;
        }
        Ok(())
    }

    /// Write a single register.
    fn write_reg(&mut self, register: u8, value: u8) -> Result<(), E> {
        self.i2c.write(self.addr, &[register, value])
    }

    /// Program one channel's ON/OFF tick pair (12-bit each), using the
    /// auto-increment write starting at its `LED_ON_L` register.
    pub fn set_pwm(&mut self, channel: u8, on: u16, off: u16) -> Result<(), E> {
        let base = reg::LED0_ON_L + 4 * channel;
        self.i2c.write(
            self.addr,
            &[
                base,
                on as u8,
                (on >> 8) as u8,
                off as u8,
                (off >> 8) as u8,
            ],
        )
    }

    /// Drive a channel as a logic output: full-on or full-off via the
    /// special fourth-bit encodings.
    pub fn set_pin(&mut self, channel: u8, high: bool) -> Result<(), E> {
        if high {
            self.set_pwm(channel, 0x1000, 0)
        } else {
            self.set_pwm(channel, 0, 0x1000)
        }
    }

    /// Apply a wheel command to one motor terminal.
    ///
    /// The 8-bit magnitude spreads over the 12-bit PWM range (x16, so 255
    /// maps to 4080 of 4095 ticks).
    pub fn apply(&mut self, motor: ShieldMotor, command: MotorCommand) -> Result<(), E> {
        let ch = motor.channels();
        match command.direction {
            Direction::Forward => {
                self.set_pin(ch.in2, false)?;
                self.set_pin(ch.in1, true)?;
            }
            Direction::Backward => {
                self.set_pin(ch.in1, false)?;
                self.set_pin(ch.in2, true)?;
            }
            Direction::Release => {
                self.set_pin(ch.in1, false)?;
                self.set_pin(ch.in2, false)?;
            }
        }
        self.set_pwm(ch.pwm, 0, command.magnitude as u16 * 16)
    }
}

/// The robot's two wheel motors on one shield; implements the control
/// core's drive boundary.
pub struct WheelDrive<I2C> {
    shield: MotorShield<I2C>,
    left: ShieldMotor,
    right: ShieldMotor,
}

impl<I2C, E> WheelDrive<I2C>
where
    I2C: Write<Error = E>,
{
    pub fn new(shield: MotorShield<I2C>, left: ShieldMotor, right: ShieldMotor) -> Self {
        Self {
            shield,
            left,
            right,
        }
    }
}

impl<I2C, E> DriveTrain for WheelDrive<I2C>
where
    I2C: Write<Error = E>,
{
    type Error = E;

    fn drive(&mut self, left: MotorCommand, right: MotorCommand) -> Result<(), E> {
        self.shield.apply(self.left, left)?;
        self.shield.apply(self.right, right)
    }
}
