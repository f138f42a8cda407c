// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Proportional-integral controller for the steering loop.
//!
//! Works in `no_std` and does not allocate memory. Integration is per control
//! tick: the integral accumulates the raw error once per update, so the gains
//! absorb the fixed tick period.

/// PI controller with tunable gains and integral anti-windup clamping.
///
/// The output is deliberately unclamped; the motor command mapper owns the
/// drivable limits.
pub struct Pi {
    /// Proportional gain
    kp: f32,
    /// Integral gain
    ki: f32,

    /// Setpoint the measurement is regulated toward
    target: f32,

    /// Integrator state
    integral: f32,

    /// Integral anti-windup clamp
    integral_limit: f32,
}

impl Pi {
    /// Create a new PI controller regulating toward zero.
    ///
    /// `kp`, `ki` are the gain constants.
    pub fn new(kp: f32, ki: f32) -> Self {
        Self {
            kp,
            ki,
            target: 0.0,
            integral: 0.0,
            integral_limit: f32::MAX,
        }
    }

    /// Set the anti-windup ceiling; the integral stays in `[-limit, +limit]`.
    pub fn with_integral_limit(mut self, limit: f32) -> Self {
        self.integral_limit = limit;
        self
    }

    /// Regulate toward a non-zero setpoint.
    pub fn with_target(mut self, target: f32) -> Self {
        self.target = target;
        self
    }

    /// Reset the integrator.
    pub fn reset(&mut self) {
        self.integral = 0.0;
    }

    /// Current integrator state.
    #[inline]
    pub fn integral(&self) -> f32 {
        self.integral
    }

    /// Update the controller with a new measurement.
    ///
    /// Returns the steering correction `kp * error + ki * integral`.
    pub fn update(&mut self, measurement: f32) -> f32 {
        let error = self.target - measurement;

        // Anti-windup: clamp after accumulation, before use
        self.integral =
            (self.integral + error).clamp(-self.integral_limit, self.integral_limit);

        self.kp * error + self.ki * self.integral
    }
}
