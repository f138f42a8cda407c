// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Reflectance Sensing
//!
//! Sensor-row data types and the boundary trait to the physical array.
//!
//! ## Modules
//!
//! - [`frame`] - Per-tick sensor frame (raw readings + line detection).
//! - [`line`] - Discrete track-state classification of a frame.

pub mod frame;
pub mod line;

pub use frame::{SensorFrame, SENSOR_COUNT};
pub use line::{LineClassifier, LineState};

/// The reflectance array could not deliver a fresh frame this tick.
///
/// The previous frame must not be reused in its place; the caller holds its
/// last known state and commands neutral output instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorReadFailure;

/// Boundary to the physical sensor row.
///
/// Implementations own the transport (ADC scan, I2C expander, test script)
/// and return one ordered set of raw readings per call, manufacturer
/// normalized to 0–1000 per sensor.
pub trait LineSensorArray {
    /// Sample all sensors once, left to right.
    fn read_raw(&mut self) -> Result<[u16; SENSOR_COUNT], SensorReadFailure>;
}
