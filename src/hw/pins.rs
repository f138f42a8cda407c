// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F767 line-follower carrier board.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpioc, Alternate, Analog, OpenDrain, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```rust
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC);
/// ```
pub struct BoardPins {
    pub leds: LedPins,
    pub usart1: Usart1Pins,
    pub i2c1: I2c1Pins,
    pub qtr: QtrPins,
}

pub struct LedPins {
    /// Heartbeat, toggled once per tick.
    pub heartbeat: gpiob::PB7<Output<PushPull>>,
    /// Latched on when the sensor row goes persistently dead.
    pub fault: gpiob::PB14<Output<PushPull>>,
}

pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// I2C1 SCL/SDA to the motor shield.
pub struct I2c1Pins {
    pub scl: gpiob::PB8<Alternate<4, OpenDrain>>,
    pub sda: gpiob::PB9<Alternate<4, OpenDrain>>,
}

/// Reflectance array: five analog inputs (left to right) plus the IR
/// emitter switch.
pub struct QtrPins {
    pub s1: gpioa::PA0<Analog>, // ADC1_IN0
    pub s2: gpioa::PA1<Analog>, // ADC1_IN1
    pub s3: gpioa::PA4<Analog>, // ADC1_IN4
    pub s4: gpiob::PB0<Analog>, // ADC1_IN8
    pub s5: gpioc::PC1<Analog>, // ADC1_IN11
    pub emitter: gpioc::PC0<Output<PushPull>>,
}

/// ADC1 channels of the five reflectance sensors, left to right.
pub const QTR_CHANNELS: [u8; 5] = [0, 1, 4, 8, 11];

impl BoardPins {
    pub fn new(gpioa: pac::GPIOA, gpiob: pac::GPIOB, gpioc: pac::GPIOC) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpioc = gpioc.split();

        Self {
            leds: LedPins {
                heartbeat: gpiob.pb7.into_push_pull_output(),
                fault: gpiob.pb14.into_push_pull_output(),
            },
            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },
            i2c1: I2c1Pins {
                scl: gpiob.pb8.into_alternate_open_drain::<4>(),
                sda: gpiob.pb9.into_alternate_open_drain::<4>(),
            },
            qtr: QtrPins {
                s1: gpioa.pa0.into_analog(),
                s2: gpioa.pa1.into_analog(),
                s3: gpioa.pa4.into_analog(),
                s4: gpiob.pb0.into_analog(),
                s5: gpioc.pc1.into_analog(),
                emitter: gpioc.pc0.into_push_pull_output(),
            },
        }
    }
}
