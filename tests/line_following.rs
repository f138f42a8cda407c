// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Host-side integration tests for the full sensor-to-motor pipeline, using
//! a scripted sensor array and a recording drive in place of the hardware.

use linebot::control::{LineFollower, Pi};
use linebot::motors::{Direction, DriveTrain, MotorCommand, SpeedMapper};
use linebot::sensors::{
    LineClassifier, LineSensorArray, LineState, SensorReadFailure, SENSOR_COUNT,
};

use core::convert::Infallible;

/// Replays a fixed sequence of frames, then repeats the last one.
struct ScriptedArray {
    frames: Vec<Result<[u16; SENSOR_COUNT], SensorReadFailure>>,
    next: usize,
}

impl ScriptedArray {
    fn new(frames: Vec<Result<[u16; SENSOR_COUNT], SensorReadFailure>>) -> Self {
        Self { frames, next: 0 }
    }
}

impl LineSensorArray for ScriptedArray {
    fn read_raw(&mut self) -> Result<[u16; SENSOR_COUNT], SensorReadFailure> {
        let frame = self.frames[self.next.min(self.frames.len() - 1)];
        self.next += 1;
        frame
    }
}

/// Records every commanded wheel pair.
#[derive(Default)]
struct RecordingDrive {
    history: Vec<(MotorCommand, MotorCommand)>,
}

impl RecordingDrive {
    fn last(&self) -> (MotorCommand, MotorCommand) {
        *self.history.last().expect("no drive command recorded")
    }
}

impl DriveTrain for RecordingDrive {
    type Error = Infallible;

    fn drive(&mut self, left: MotorCommand, right: MotorCommand) -> Result<(), Infallible> {
        self.history.push((left, right));
        Ok(())
    }
}

fn follower(kp: f32, ki: f32) -> LineFollower {
    LineFollower::new(
        Pi::new(kp, ki).with_integral_limit(180.0),
        LineClassifier::new(),
        SpeedMapper::new(60, 40),
        500,
    )
}

#[test]
fn worked_proportional_scenario() {
    // Line under the left edge: centroid (1000*0 + 1000*1000) / 2000 = 500,
    // centered error -1500, proportional correction 0.015 * 1500 = 22.5.
    let mut array = ScriptedArray::new(vec![Ok([1000, 1000, 0, 0, 0])]);
    let mut drive = RecordingDrive::default();

    let report = follower(0.015, 0.0).tick(&mut array, &mut drive).unwrap();
    assert_eq!(report.state, LineState::OnTrack);

    let (left, right) = drive.last();
    assert_eq!(left, MotorCommand::forward(82));
    assert_eq!(right, MotorCommand::forward(37));
}

#[test]
fn integral_contribution_saturates_at_the_ceiling() {
    // Pure integral gain: the first update accumulates 1500 and clamps to
    // 180, so the correction is 0.03 * 180 = 5.4 from tick one onward.
    let mut array = ScriptedArray::new(vec![Ok([1000, 1000, 0, 0, 0])]);
    let mut drive = RecordingDrive::default();
    let mut f = follower(0.0, 0.03);

    for _ in 0..5 {
        f.tick(&mut array, &mut drive).unwrap();
    }

    for (left, right) in &drive.history {
        assert_eq!(*left, MotorCommand::forward(65));
        assert_eq!(*right, MotorCommand::forward(54));
    }
}

#[test]
fn all_clear_frame_stops_both_wheels() {
    // Build up a large correction first, then lose the line entirely: the
    // stop interlock wins over whatever the controller says.
    let mut array = ScriptedArray::new(vec![
        Ok([1000, 1000, 0, 0, 0]),
        Ok([0, 0, 0, 0, 0]),
    ]);
    let mut drive = RecordingDrive::default();
    let mut f = follower(0.015, 0.03);

    f.tick(&mut array, &mut drive).unwrap();
    let report = f.tick(&mut array, &mut drive).unwrap();

    assert_eq!(report.state, LineState::Stop);
    assert!(report.changed);
    let (left, right) = drive.last();
    assert_eq!(left, MotorCommand::halt());
    assert_eq!(right, MotorCommand::halt());
}

#[test]
fn goal_frame_parks_the_robot() {
    let mut array = ScriptedArray::new(vec![Ok([1000; SENSOR_COUNT])]);
    let mut drive = RecordingDrive::default();

    let report = follower(0.015, 0.03)
        .tick(&mut array, &mut drive)
        .unwrap();

    assert_eq!(report.state, LineState::Goal);
    assert_eq!(drive.last(), (MotorCommand::halt(), MotorCommand::halt()));
}

#[test]
fn station_is_counted_once_per_crossing() {
    let centered = Ok([0, 0, 1000, 0, 0]);
    let marker = Ok([1000, 0, 0, 0, 1000]);
    let mut array = ScriptedArray::new(vec![
        centered, marker, marker, centered, marker, centered,
    ]);
    let mut drive = RecordingDrive::default();
    let mut f = follower(0.015, 0.03);

    let mut transitions = 0;
    for _ in 0..6 {
        let report = f.tick(&mut array, &mut drive).unwrap();
        if report.changed && report.state == LineState::Station {
            transitions += 1;
        }
    }

    assert_eq!(transitions, 2);
    assert_eq!(f.stations_passed(), 2);
}

#[test]
fn sensor_fault_is_flagged_and_wheels_go_neutral() {
    let mut array = ScriptedArray::new(vec![
        Ok([0, 0, 1000, 0, 0]),
        Err(SensorReadFailure),
        Ok([0, 0, 1000, 0, 0]),
    ]);
    let mut drive = RecordingDrive::default();
    let mut f = follower(0.015, 0.03);

    f.tick(&mut array, &mut drive).unwrap();

    let report = f.tick(&mut array, &mut drive).unwrap();
    assert!(report.sensor_fault);
    assert_eq!(report.state, LineState::OnTrack);
    let (left, right) = drive.last();
    assert_eq!(left.direction, Direction::Release);
    assert_eq!(right.direction, Direction::Release);

    // Recovery on the next good frame.
    let report = f.tick(&mut array, &mut drive).unwrap();
    assert!(!report.sensor_fault);
    assert_eq!(drive.last().0, MotorCommand::forward(60));
}

#[test]
fn hard_left_correction_reverses_the_inner_wheel() {
    // Line far off to one side for several ticks: the integral winds up (to
    // its ceiling) and the inner wheel crosses zero into reverse, capped at
    // the backwards limit.
    let mut array = ScriptedArray::new(vec![Ok([1000, 0, 0, 0, 0])]);
    let mut drive = RecordingDrive::default();
    let mut f = follower(0.1, 0.03);

    f.tick(&mut array, &mut drive).unwrap();
    let (left, right) = drive.last();

    // error = 2000: correction = 0.1*2000 + 0.03*180 = 205.4
    assert_eq!(left, MotorCommand::forward(255));
    assert_eq!(right, MotorCommand::backward(40));
}
