// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Algorithms
//!
//! This module provides the building blocks of the line-following loop.
//!
//! ## Modules
//!
//! - [`pi`] - Proportional-integral steering controller.
//! - [`position`] - Weighted-centroid line position estimator.
//! - [`follower`] - The per-tick pipeline tying sensing to the motors.

pub mod follower;
pub mod pi;
pub mod position;

pub use follower::{LineFollower, TickReport};
pub use pi::Pi;
pub use position::PositionEstimator;
