// Sensor type catalog, per-type thresholds and status classification
use serde::Serialize;
use std::fmt;

use super::error::{GeneratorError, GeneratorResult};

/// Recognised sensor kinds. Names are matched case-insensitively; anything
/// else is kept verbatim in `Unknown` and falls back to the default profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SensorType {
    Temperature,
    Pressure,
    Acoustic,
    Vibration,
    Mq135,
    IrFlame,
    Fuel,
    FuelCable,
    FuelOilSensingCable,
    WaterInOil,
    SoilMoisture,
    Humidity,
    Power,
    Ultrasonic,
    UltrasonicFuelLevel,
    Load,
    CapacitiveFuel,
    Unknown(String),
}

impl SensorType {
    pub const RECOGNISED: [SensorType; 17] = [
        SensorType::Temperature,
        SensorType::Pressure,
        SensorType::Acoustic,
        SensorType::Vibration,
        SensorType::Mq135,
        SensorType::IrFlame,
        SensorType::Fuel,
        SensorType::FuelCable,
        SensorType::FuelOilSensingCable,
        SensorType::WaterInOil,
        SensorType::SoilMoisture,
        SensorType::Humidity,
        SensorType::Power,
        SensorType::Ultrasonic,
        SensorType::UltrasonicFuelLevel,
        SensorType::Load,
        SensorType::CapacitiveFuel,
    ];

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "temperature sensor" => SensorType::Temperature,
            "pressure sensor" => SensorType::Pressure,
            "acoustic sensor" => SensorType::Acoustic,
            "vibration sensor" => SensorType::Vibration,
            "mq-135 sensor" => SensorType::Mq135,
            "ir flame sensor" => SensorType::IrFlame,
            "fuel sensor" => SensorType::Fuel,
            "fuel cable" => SensorType::FuelCable,
            "fuel & oil sensing cable" => SensorType::FuelOilSensingCable,
            "water-in-oil sensor" => SensorType::WaterInOil,
            "soil moisture sensor" => SensorType::SoilMoisture,
            "humidity sensor" => SensorType::Humidity,
            "power sensor" => SensorType::Power,
            "ultrasonic sensor" => SensorType::Ultrasonic,
            "ultrasonic fuel level sensor" => SensorType::UltrasonicFuelLevel,
            "load sensor" => SensorType::Load,
            "capacitive fuel sensor" => SensorType::CapacitiveFuel,
            _ => SensorType::Unknown(name.to_string()),
        }
    }

    /// Canonical lowercase name as matched by `from_name`.
    pub fn canonical_name(&self) -> &str {
        match self {
            SensorType::Temperature => "temperature sensor",
            SensorType::Pressure => "pressure sensor",
            SensorType::Acoustic => "acoustic sensor",
            SensorType::Vibration => "vibration sensor",
            SensorType::Mq135 => "mq-135 sensor",
            SensorType::IrFlame => "ir flame sensor",
            SensorType::Fuel => "fuel sensor",
            SensorType::FuelCable => "fuel cable",
            SensorType::FuelOilSensingCable => "fuel & oil sensing cable",
            SensorType::WaterInOil => "water-in-oil sensor",
            SensorType::SoilMoisture => "soil moisture sensor",
            SensorType::Humidity => "humidity sensor",
            SensorType::Power => "power sensor",
            SensorType::Ultrasonic => "ultrasonic sensor",
            SensorType::UltrasonicFuelLevel => "ultrasonic fuel level sensor",
            SensorType::Load => "load sensor",
            SensorType::CapacitiveFuel => "capacitive fuel sensor",
            SensorType::Unknown(name) => name,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SensorType::Unknown(_))
    }

    pub fn profile(&self) -> SensorProfile {
        match self {
            SensorType::Temperature => SensorProfile::new(65.0, 15.0, "°C", 85.0, 95.0),
            SensorType::Pressure => SensorProfile::new(75.0, 25.0, "psi", 120.0, 150.0),
            SensorType::Acoustic => SensorProfile::new(60.0, 20.0, "dB", 85.0, 95.0),
            SensorType::Vibration => SensorProfile::new(450.0, 150.0, "Hz", 650.0, 750.0),
            SensorType::Mq135 => SensorProfile::new(35.0, 15.0, "ppm", 60.0, 80.0),
            SensorType::IrFlame => SensorProfile::new(0.4, 0.3, "V", 0.8, 1.0),
            SensorType::Fuel | SensorType::FuelCable | SensorType::FuelOilSensingCable => {
                SensorProfile::new(45.0, 15.0, "%", 70.0, 85.0)
            }
            SensorType::WaterInOil => SensorProfile::new(0.05, 0.03, "%", 0.1, 0.15),
            SensorType::SoilMoisture => SensorProfile::new(35.0, 10.0, "%", 60.0, 75.0),
            SensorType::Humidity => SensorProfile::new(45.0, 15.0, "%", 70.0, 85.0),
            SensorType::Power => SensorProfile::new(220.0, 20.0, "V", 250.0, 270.0),
            SensorType::Ultrasonic | SensorType::UltrasonicFuelLevel => {
                SensorProfile::new(50.0, 20.0, "cm", 80.0, 90.0)
            }
            SensorType::Load => SensorProfile::new(5.0, 3.0, "kg", 8.0, 10.0),
            SensorType::CapacitiveFuel => SensorProfile::new(50.0, 15.0, "%", 75.0, 90.0),
            SensorType::Unknown(_) => SensorProfile::DEFAULT,
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorProfile {
    pub base_value: f64,
    pub variance: f64,
    pub unit: &'static str,
    pub warning_threshold: f64,
    pub fault_threshold: f64,
}

impl SensorProfile {
    pub const DEFAULT: SensorProfile = SensorProfile::new(50.0, 20.0, "units", 80.0, 90.0);

    pub const fn new(
        base_value: f64,
        variance: f64,
        unit: &'static str,
        warning_threshold: f64,
        fault_threshold: f64,
    ) -> Self {
        Self {
            base_value,
            variance,
            unit,
            warning_threshold,
            fault_threshold,
        }
    }

    /// Thresholds must be ordered `0 <= warning < fault`.
    pub fn validate(&self) -> GeneratorResult<()> {
        if self.warning_threshold < 0.0 || self.fault_threshold <= self.warning_threshold {
            return Err(GeneratorError::InvalidConfig(format!(
                "profile thresholds out of order: warning={}, fault={}",
                self.warning_threshold, self.fault_threshold
            )));
        }
        Ok(())
    }

    pub fn classify(&self, value: f64) -> Status {
        classify(value, self)
    }
}

/// Resolve the profile for a sensor-type name. Unknown names silently get
/// `SensorProfile::DEFAULT`.
pub fn lookup_profile(name: &str) -> SensorProfile {
    SensorType::from_name(name).profile()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Status {
    Normal,
    Warning,
    Fault,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "Normal",
            Status::Warning => "Warning",
            Status::Fault => "Fault",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict `>` on both thresholds: a value sitting exactly on a threshold has
/// not crossed it.
pub fn classify(value: f64, profile: &SensorProfile) -> Status {
    if value > profile.fault_threshold {
        Status::Fault
    } else if value > profile.warning_threshold {
        Status::Warning
    } else {
        Status::Normal
    }
}
