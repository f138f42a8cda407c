// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Differential mapping of a steering correction onto the two wheels.

// f32 math under no_std; the std inherent methods take over in test builds.
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::motors::MotorCommand;
use crate::sensors::LineState;

/// Full-scale drive magnitude the platform accepts.
pub const MAX_DRIVE: u8 = 255;

/// Maps a steering correction and the cruise speed onto per-wheel commands.
///
/// A positive correction speeds up the left wheel and slows the right one. A
/// wheel speed driven negative flips to backward drive, capped at
/// `backwards_limit`; forward drive is capped at [`MAX_DRIVE`]. Fractional
/// speeds truncate toward zero.
pub struct SpeedMapper {
    default_speed: u8,
    backwards_limit: u8,
}

impl SpeedMapper {
    /// `default_speed` — cruise speed on a centered line.
    /// `backwards_limit` — cap on reverse drive magnitude.
    pub fn new(default_speed: u8, backwards_limit: u8) -> Self {
        Self {
            default_speed,
            backwards_limit,
        }
    }

    /// Map a correction onto `(left, right)` commands for the given state.
    ///
    /// `Stop` and `Goal` override the mapping and halt both wheels regardless
    /// of the correction: `Stop` as a safety interlock, `Goal` as the
    /// terminal action.
    pub fn map(&self, state: LineState, correction: f32) -> (MotorCommand, MotorCommand) {
        match state {
            LineState::Stop | LineState::Goal => (MotorCommand::halt(), MotorCommand::halt()),
            LineState::OnTrack | LineState::Station => {
                let cruise = self.default_speed as f32;
                (
                    self.wheel(cruise + correction),
                    self.wheel(cruise - correction),
                )
            }
        }
    }

    /// Clamp one signed wheel speed into a direction + magnitude command.
    fn wheel(&self, speed: f32) -> MotorCommand {
        if speed >= 0.0 {
            MotorCommand::forward(speed.clamp(0.0, MAX_DRIVE as f32) as u8)
        } else {
            MotorCommand::backward(speed.abs().clamp(0.0, self.backwards_limit as f32) as u8)
        }
    }
}
