//! Randomized telemetry generation
//!
//! Produces one range-bounded sensor payload per device class. The RNG is
//! supplied by the caller so tests can seed it deterministically.

use crate::registry::{Device, DeviceClass};
use rand::Rng;
use serde::Serialize;

/// One telemetry sample for a device
///
/// Serialized as `{"sensors":{...},"id":"..."}`, matching the wire format
/// the host parser expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    pub sensors: SensorValues,
    pub id: String,
}

/// Class-specific sensor fields
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SensorValues {
    Soil(SoilSensors),
    Atm(AtmSensors),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilSensors {
    pub soil_moisture: f64,
    pub soil_temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtmSensors {
    pub air_temperature: f64,
    pub air_humidity: f64,
    pub rain_intensity: u8,
    pub wind_speed: f64,
    pub light_intensity: f64,
    pub barometric_pressure: f64,
}

/// Draw a randomized reading for a device
pub fn sample<R: Rng>(rng: &mut R, device: &Device) -> SensorReading {
    let sensors = match device.class {
        DeviceClass::Soil => SensorValues::Soil(SoilSensors {
            soil_moisture: round2(rng.gen_range(40.0..=90.0)),
            soil_temperature: round2(rng.gen_range(20.0..=35.0)),
        }),
        DeviceClass::Atm => SensorValues::Atm(AtmSensors {
            air_temperature: round2(rng.gen_range(25.0..=38.0)),
            air_humidity: round1(rng.gen_range(50.0..=95.0)),
            rain_intensity: rng.gen_range(0..=1),
            wind_speed: round2(rng.gen_range(0.0..=15.0)),
            light_intensity: round1(rng.gen_range(100.0..=5000.0)),
            barometric_pressure: round1(rng.gen_range(990.0..=1015.0)),
        }),
    };

    SensorReading {
        sensors,
        id: device.id.clone(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
