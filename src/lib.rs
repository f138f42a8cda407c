// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Linebot Firmware
//!
//! This crate contains the firmware for a five-sensor reflectance
//! line-following robot, written in Rust, targeting an STM32F767 MCU.
//!
//! The control core (everything outside `hw` and `drivers`) is pure
//! computation behind narrow traits and runs on the host for testing; the
//! board layer is gated behind the `stm32f767` cargo feature.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`sensors`] | Sensor frames, track-state classification, array boundary |
//! | [`control`] | Control algorithms (PI steering, position estimation, tick pipeline) |
//! | [`motors`] | Wheel command types, differential speed mapping, drive boundary |
//! | [`config`] | Build-time tuning constants |
//! | `hw` | MCU-level wrappers around ADC, USART, GPIO (feature `stm32f767`) |
//! | `drivers` | Device-level drivers (QTR array, PCA9685 motor shield) |
//!
//! ## Getting Started
//!
//! Run the host test suite:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features stm32f767 --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod motors;
pub mod sensors;

#[cfg(feature = "stm32f767")]
pub mod drivers;
#[cfg(feature = "stm32f767")]
pub mod hw;
