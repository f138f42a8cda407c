// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The per-tick line-following pipeline.
//!
//! One [`LineFollower::tick`] call runs the whole chain synchronously:
//! sensor acquisition, track-state classification, position estimation, the
//! PI correction, and the differential motor command. There are no suspension
//! points; on a preemptive host the tick must run as a critical section so
//! the integrator and state pair are never torn.

use crate::control::position::{centered_error, PositionEstimator};
use crate::control::Pi;
use crate::motors::{DriveTrain, MotorCommand, SpeedMapper};
use crate::sensors::{LineClassifier, LineSensorArray, LineState, SensorFrame};

/// Outcome of one control tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Track state after this tick.
    pub state: LineState,
    /// Whether the state differs from the previous tick's.
    pub changed: bool,
    /// The sensor row failed to deliver a frame; `state` is held from the
    /// last good tick and the wheels were commanded neutral.
    pub sensor_fault: bool,
}

/// Owns the controller state across ticks: PI integrator, estimator memory,
/// previous track state, and the station counter.
///
/// Created once at startup; lives for the whole control loop. Multiple
/// independent instances do not share any state.
pub struct LineFollower {
    pi: Pi,
    estimator: PositionEstimator,
    classifier: LineClassifier,
    mapper: SpeedMapper,
    threshold: u16,

    state: LineState,
    stations: u16,
}

impl LineFollower {
    pub fn new(pi: Pi, classifier: LineClassifier, mapper: SpeedMapper, threshold: u16) -> Self {
        Self {
            pi,
            estimator: PositionEstimator::new(),
            classifier,
            mapper,
            threshold,
            state: LineState::OnTrack,
            stations: 0,
        }
    }

    /// Track state as of the last completed tick.
    #[inline]
    pub fn state(&self) -> LineState {
        self.state
    }

    /// Station markers crossed since startup (or the last [`reset`](Self::reset)).
    #[inline]
    pub fn stations_passed(&self) -> u16 {
        self.stations
    }

    /// Re-initialize to the startup state: integrator cleared, estimator
    /// re-seeded, state back to `OnTrack`, station count zeroed.
    pub fn reset(&mut self) {
        self.pi.reset();
        self.estimator.reset();
        self.state = LineState::OnTrack;
        self.stations = 0;
    }

    /// Run one control tick: read the sensor row, classify, estimate, and
    /// command both wheels.
    ///
    /// A failed sensor read holds the previous state and commands neutral
    /// output rather than computing on stale data; the condition is surfaced
    /// in the report, not swallowed. Transport errors from the drive
    /// propagate to the caller.
    pub fn tick<S, D>(&mut self, sensors: &mut S, drive: &mut D) -> Result<TickReport, D::Error>
    where
        S: LineSensorArray,
        D: DriveTrain,
    {
        let raw = match sensors.read_raw() {
            Ok(raw) => raw,
            Err(_) => {
                drive.drive(MotorCommand::halt(), MotorCommand::halt())?;
                return Ok(TickReport {
                    state: self.state,
                    changed: false,
                    sensor_fault: true,
                });
            }
        };

        let frame = SensorFrame::from_raw(raw, self.threshold);
        let state = self.classifier.classify(frame.detected());
        let changed = state != self.state;

        let position = self.estimator.update(frame.raw());
        let correction = self.pi.update(centered_error(position) as f32);

        let (left, right) = self.mapper.map(state, correction);
        drive.drive(left, right)?;

        if changed && state == LineState::Station {
            self.stations += 1;
        }
        // Previous state is overwritten only after every consumer has run
        self.state = state;

        Ok(TickReport {
            state,
            changed,
            sensor_fault: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motors::Direction;
    use crate::sensors::{SensorReadFailure, SENSOR_COUNT};
    use core::convert::Infallible;

    struct FixedArray {
        frame: Result<[u16; SENSOR_COUNT], SensorReadFailure>,
    }

    impl LineSensorArray for FixedArray {
        fn read_raw(&mut self) -> Result<[u16; SENSOR_COUNT], SensorReadFailure> {
            self.frame
        }
    }

    struct RecordingDrive {
        last: Option<(MotorCommand, MotorCommand)>,
    }

    impl DriveTrain for RecordingDrive {
        type Error = Infallible;

        fn drive(&mut self, left: MotorCommand, right: MotorCommand) -> Result<(), Infallible> {
            self.last = Some((left, right));
            Ok(())
        }
    }

    fn follower() -> LineFollower {
        LineFollower::new(
            Pi::new(0.015, 0.0),
            LineClassifier::new(),
            SpeedMapper::new(60, 40),
            500,
        )
    }

    #[test]
    fn centered_line_holds_cruise_speed() {
        let mut array = FixedArray {
            frame: Ok([0, 0, 1000, 0, 0]),
        };
        let mut drive = RecordingDrive { last: None };
        let report = follower().tick(&mut array, &mut drive).unwrap();

        assert_eq!(report.state, LineState::OnTrack);
        assert!(!report.sensor_fault);
        let (left, right) = drive.last.unwrap();
        assert_eq!(left, MotorCommand::forward(60));
        assert_eq!(right, MotorCommand::forward(60));
    }

    #[test]
    fn same_frame_twice_reports_changed_only_semantically() {
        let mut array = FixedArray {
            frame: Ok([1000; SENSOR_COUNT]),
        };
        let mut drive = RecordingDrive { last: None };
        let mut f = follower();

        let first = f.tick(&mut array, &mut drive).unwrap();
        assert_eq!(first.state, LineState::Goal);
        assert!(first.changed);

        let second = f.tick(&mut array, &mut drive).unwrap();
        assert_eq!(second.state, LineState::Goal);
        assert!(!second.changed);
    }

    #[test]
    fn sensor_fault_holds_state_and_halts() {
        let mut drive = RecordingDrive { last: None };
        let mut f = follower();

        let mut array = FixedArray {
            frame: Ok([1000; SENSOR_COUNT]),
        };
        f.tick(&mut array, &mut drive).unwrap();
        assert_eq!(f.state(), LineState::Goal);

        let mut broken = FixedArray {
            frame: Err(SensorReadFailure),
        };
        let report = f.tick(&mut broken, &mut drive).unwrap();

        assert!(report.sensor_fault);
        assert!(!report.changed);
        assert_eq!(report.state, LineState::Goal);
        let (left, right) = drive.last.unwrap();
        assert_eq!(left.direction, Direction::Release);
        assert_eq!(left.magnitude, 0);
        assert_eq!(right.magnitude, 0);
    }

    #[test]
    fn reset_restores_the_startup_state() {
        let mut array = FixedArray {
            frame: Ok([1000; SENSOR_COUNT]),
        };
        let mut drive = RecordingDrive { last: None };
        let mut f = follower();
        f.tick(&mut array, &mut drive).unwrap();
        assert_eq!(f.state(), LineState::Goal);

        f.reset();
        assert_eq!(f.state(), LineState::OnTrack);
        assert_eq!(f.stations_passed(), 0);
    }
}
