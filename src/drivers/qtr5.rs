// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pololu QTR reflectance array, five analog channels through ADC1.
//!
//! The IR emitter is switched on only around the scan to save power and
//! reject ambient light. Raw 12-bit conversions are rescaled to the
//! manufacturer's 0–1000 range; a dark line reads high.

use embedded_hal::digital::v2::OutputPin;

use crate::hw::Adc;
use crate::sensors::{LineSensorArray, SensorReadFailure, SENSOR_COUNT};

/// Full-scale 12-bit conversion.
const ADC_FULL_SCALE: u32 = 4095;

/// Manufacturer full-scale reading.
const READING_FULL_SCALE: u32 = 1000;

/// Five-sensor QTR array bound to ADC1 channels plus the emitter pin.
pub struct Qtr5<EMIT: OutputPin> {
    adc: Adc,
    channels: [u8; SENSOR_COUNT],
    emitter: EMIT,
}

impl<EMIT: OutputPin> Qtr5<EMIT> {
    /// `channels` — one ADC1 channel per sensor, left to right.
    pub fn new(adc: Adc, channels: [u8; SENSOR_COUNT], emitter: EMIT) -> Self {
        Self {
            adc,
            channels,
            emitter,
        }
    }

    /// Scan all five sensors once, emitter gated around the conversion burst.
    fn scan(&mut self) -> Result<[u16; SENSOR_COUNT], SensorReadFailure> {
        self.emitter.set_high().map_err(|_| SensorReadFailure)?;

        let mut raw = [0u16; SENSOR_COUNT];
        let mut failed = false;
        for (slot, &channel) in raw.iter_mut().zip(self.channels.iter()) {
            match self.adc.read(channel) {
                Some(sample) => {
                    *slot = (sample as u32 * READING_FULL_SCALE / ADC_FULL_SCALE) as u16
                }
                None => {
                    failed = true;
                    break;
                }
            }
        }

        // Emitter off even when a conversion died mid-scan
        self.emitter.set_low().map_err(|_| SensorReadFailure)?;

        if failed {
            return Err(SensorReadFailure);
        }
        Ok(raw)
    }
}

impl<EMIT: OutputPin> LineSensorArray for Qtr5<EMIT> {
    fn read_raw(&mut self) -> Result<[u16; SENSOR_COUNT], SensorReadFailure> {
        self.scan()
    }
}
