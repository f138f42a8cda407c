// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Build-time tuning constants for the line follower.
//!
//! Single source of truth for gains, speeds, and thresholds. The board
//! bring-up wires these into the controller; they are not reconfigurable at
//! runtime.

/// Proportional gain for the steering PI controller.
pub const KP: f32 = 0.015;

/// Integral gain for the steering PI controller.
pub const KI: f32 = 0.03;

/// Cruise speed commanded on a centered line.
pub const DEFAULT_SPEED: u8 = 60;

/// Cap on reverse drive magnitude (default speed / 1.5).
pub const BACKWARDS_LIMIT: u8 = 40;

/// Anti-windup ceiling for the accumulated integral term (3 x cruise speed).
pub const HIGHEST_INTEGRAL: f32 = 180.0;

/// Reflectance reading at or above which a sensor counts as seeing the line.
pub const DETECT_THRESHOLD: u16 = 500;

/// Control period of the tick loop, in milliseconds.
pub const TICK_PERIOD_MS: u32 = 10;

/// Consecutive failed sensor reads before the firmware loop gives up and
/// parks the robot.
pub const SENSOR_FAULT_LIMIT: u8 = 10;
