// Telemetry data domain models
use super::sensor::{SensorProfile, Status};

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub value: f64,
    pub time_ms: i64,
}

impl TimeSeriesPoint {
    pub fn new(label: String, value: f64, time_ms: i64) -> Self {
        Self {
            label,
            value,
            time_ms,
        }
    }
}

/// A generated series together with its classification against the
/// sensor's thresholds.
#[derive(Debug, Clone)]
pub struct SensorReadings {
    pub sensor_name: String,
    pub points: Vec<TimeSeriesPoint>,
    pub profile: SensorProfile,
    pub current_value: f64,
    pub status: Status,
}

impl SensorReadings {
    pub fn unit(&self) -> &'static str {
        self.profile.unit
    }

    pub fn warning_threshold(&self) -> f64 {
        self.profile.warning_threshold
    }

    pub fn fault_threshold(&self) -> f64 {
        self.profile.fault_threshold
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperatingInfo {
    pub operating_hours: String,
    pub last_updated: String,
}
