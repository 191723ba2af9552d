// Predictive maintenance domain models
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{GeneratorError, GeneratorResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Temperature,
    Vibration,
    Sound,
    Load,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Temperature,
        ComponentKind::Vibration,
        ComponentKind::Sound,
        ComponentKind::Load,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ComponentKind::Temperature => "temperature",
            ComponentKind::Vibration => "vibration",
            ComponentKind::Sound => "sound",
            ComponentKind::Load => "load",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub health: u8,
    pub current: f64,
    pub threshold: f64,
    pub unit: String,
}

impl ComponentHealth {
    pub fn new(health: u8, current: f64, threshold: f64, unit: &str) -> Self {
        Self {
            health,
            current,
            threshold,
            unit: unit.to_string(),
        }
    }
}

/// The four monitored components of the predictive view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Components {
    pub temperature: ComponentHealth,
    pub vibration: ComponentHealth,
    pub sound: ComponentHealth,
    pub load: ComponentHealth,
}

impl Default for Components {
    fn default() -> Self {
        Self {
            temperature: ComponentHealth::new(21, 92.0, 85.0, "°C"),
            vibration: ComponentHealth::new(97, 450.0, 650.0, "Hz"),
            sound: ComponentHealth::new(83, 65.0, 85.0, "dB"),
            load: ComponentHealth::new(57, 78.0, 90.0, "%"),
        }
    }
}

impl Components {
    pub fn get(&self, kind: ComponentKind) -> &ComponentHealth {
        match kind {
            ComponentKind::Temperature => &self.temperature,
            ComponentKind::Vibration => &self.vibration,
            ComponentKind::Sound => &self.sound,
            ComponentKind::Load => &self.load,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ComponentKind, &ComponentHealth)> {
        ComponentKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    pub fn min_health(&self) -> u8 {
        self.iter().map(|(_, c)| c.health).min().unwrap_or(0)
    }

    pub fn validate(&self) -> GeneratorResult<()> {
        for (kind, component) in self.iter() {
            if component.health > 100 {
                return Err(GeneratorError::InvalidArgument(format!(
                    "{} health {} exceeds 100",
                    kind, component.health
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthBand {
    Critical,
    Warning,
    Good,
}

impl HealthBand {
    pub fn from_health(health: u8) -> Self {
        if health < 30 {
            HealthBand::Critical
        } else if health < 60 {
            HealthBand::Warning
        } else {
            HealthBand::Good
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthPoint {
    pub label: String,
    pub health: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyPoint {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fault {
    pub id: u32,
    pub kind: ComponentKind,
    pub component: &'static str,
    pub severity: Severity,
    pub message: &'static str,
    pub readings: String,
    pub location: &'static str,
    pub timestamp: String,
    pub recommendations: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub id: u32,
    pub component: &'static str,
    pub severity: Severity,
    pub action: &'static str,
    pub deadline: &'static str,
    pub impact: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone)]
pub struct PredictiveSummary {
    pub health_history: Vec<HealthPoint>,
    pub anomaly_history: Vec<AnomalyPoint>,
    pub components: Components,
    pub remaining_days: u32,
    pub remaining_hours: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_components_min_health() {
        assert_eq!(Components::default().min_health(), 21);
    }

    #[test]
    fn test_validate_rejects_health_above_100() {
        let mut components = Components::default();
        components.sound.health = 101;
        assert!(matches!(
            components.validate(),
            Err(GeneratorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_health_band_edges() {
        assert_eq!(HealthBand::from_health(29), HealthBand::Critical);
        assert_eq!(HealthBand::from_health(30), HealthBand::Warning);
        assert_eq!(HealthBand::from_health(59), HealthBand::Warning);
        assert_eq!(HealthBand::from_health(60), HealthBand::Good);
    }
}
