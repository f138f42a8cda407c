// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw `hw/`
//! layer and below the control core's sensor/drive traits.
//!
//! ## Existing drivers
//!
//! - [`qtr5`] – Pololu QTR 5-channel reflectance array read through ADC1
//! - [`motor_shield`] – PCA9685-based I2C DC motor shield (wheel drive)

pub mod motor_shield;
pub mod qtr5;

pub use motor_shield::{MotorShield, ShieldMotor, WheelDrive};
pub use qtr5::Qtr5;
