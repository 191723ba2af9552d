// Dashboard domain model
use super::industry::{Industry, LeakType};
use super::sensor::Status;
use super::telemetry::{OperatingInfo, SensorReadings};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeRange {
    pub min: f64,
    pub max: f64,
}

impl GaugeRange {
    /// Picks the display range from keywords in the sensor name.
    pub fn for_sensor(name: &str) -> Self {
        let name = name.to_lowercase();
        let (min, max) = if name.contains("temperature") {
            (20.0, 120.0)
        } else if name.contains("pressure") {
            (0.0, 200.0)
        } else if name.contains("vibration") {
            (100.0, 1000.0)
        } else if name.contains("acoustic") {
            (30.0, 120.0)
        } else {
            (0.0, 100.0)
        };
        Self { min, max }
    }

    /// Fill percentage of the gauge, clamped to `0..=100`.
    pub fn percentage(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min) * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone)]
pub struct SensorCard {
    pub index: usize,
    pub name: String,
    pub slug: String,
    pub status: Status,
    pub current_value: f64,
    pub unit: &'static str,
    pub gauge: GaugeRange,
    pub percentage: f64,
}

#[derive(Debug, Clone)]
pub struct LeakTypeDashboard {
    pub title: String,
    pub industry: &'static Industry,
    pub leak_type: &'static LeakType,
    pub sensors: Vec<SensorCard>,
}

#[derive(Debug, Clone)]
pub struct LeakTypeOverview {
    pub title: &'static str,
    pub slug: String,
    pub description: &'static str,
    pub status: Status,
}

#[derive(Debug, Clone)]
pub struct IndustryOverview {
    pub industry: &'static Industry,
    pub leak_types: Vec<LeakTypeOverview>,
}

#[derive(Debug, Clone)]
pub struct SensorDetail {
    pub industry: &'static Industry,
    pub leak_type: &'static LeakType,
    pub readings: SensorReadings,
    pub operating_info: OperatingInfo,
    pub usage: String,
}

#[derive(Debug, Clone)]
pub struct SensorHealth {
    pub sensor_name: &'static str,
    pub industry: &'static str,
    pub leak_type: &'static str,
    pub status: Status,
    pub current_value: f64,
    pub unit: &'static str,
    pub warning_threshold: f64,
    pub fault_threshold: f64,
    pub health: u8,
}
