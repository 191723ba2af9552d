// Predictive maintenance service - Health trends, anomaly trends and RUL
use crate::application::clock::Clock;
use crate::domain::error::GeneratorResult;
use crate::domain::predictive::{
    AnomalyPoint, ComponentKind, Components, Fault, HealthPoint, PredictiveSummary,
    Recommendation, Severity,
};
use crate::infrastructure::config::LabelFormats;
use chrono::{DateTime, FixedOffset, TimeDelta};
use std::sync::Arc;

/// Seed shared by every series of the predictive view.
pub const PREDICTIVE_SEED: u64 = 12345;

pub const HEALTH_HISTORY_DAYS: usize = 20;
pub const ANOMALY_HISTORY_HOURS: usize = 10;

/// Health score `days_ago` days back: a slow downward trend from 75 with a
/// ±15 sine perturbation, clamped to `20..=95`.
pub fn health_score(seed: u64, days_ago: usize) -> f64 {
    let base = 75.0 - days_ago as f64 * 0.5;
    let variation = (seed as f64 + days_ago as f64).sin() * 15.0;
    (base + variation).clamp(20.0, 95.0)
}

/// Anomaly score `hours_ago` hours back: rising by 3 per hour toward now
/// with a ±20 sine perturbation, clamped to `10..=95`.
pub fn anomaly_score(seed: u64, hours_ago: usize) -> f64 {
    let base = 40.0 + (ANOMALY_HISTORY_HOURS - 1 - hours_ago) as f64 * 3.0;
    let variation = (seed as f64 + hours_ago as f64 * 2.0).sin() * 20.0;
    (base + variation).clamp(10.0, 95.0)
}

/// `(days, hours)` remaining, bucketed from the worst component health.
pub fn remaining_useful_life(min_health: u8) -> (u32, u32) {
    let days = (u32::from(min_health) / 20).max(1);
    let hours = (u32::from(min_health) / 5).max(1);
    (days, hours)
}

pub fn aggregate(
    components: &Components,
    seed: u64,
    now: DateTime<FixedOffset>,
    labels: &LabelFormats,
) -> GeneratorResult<PredictiveSummary> {
    components.validate()?;

    let health_history = (0..HEALTH_HISTORY_DAYS)
        .rev()
        .map(|i| HealthPoint {
            label: (now - TimeDelta::days(i as i64)).format(&labels.date).to_string(),
            health: health_score(seed, i),
        })
        .collect();

    let anomaly_history = (0..ANOMALY_HISTORY_HOURS)
        .rev()
        .map(|j| AnomalyPoint {
            label: (now - TimeDelta::hours(j as i64)).format(&labels.time).to_string(),
            score: anomaly_score(seed, j),
        })
        .collect();

    let min_health = components.min_health();
    let (remaining_days, remaining_hours) = remaining_useful_life(min_health);

    tracing::debug!(
        "Predictive summary: min health={}, RUL={}d/{}h",
        min_health,
        remaining_days,
        remaining_hours
    );

    Ok(PredictiveSummary {
        health_history,
        anomaly_history,
        components: components.clone(),
        remaining_days,
        remaining_hours,
    })
}

struct FaultRule {
    id: u32,
    kind: ComponentKind,
    health_floor: u8,
    component: &'static str,
    severity: Severity,
    message: &'static str,
    reading_unit: &'static str,
    location: &'static str,
    recommendations: &'static [&'static str],
}

static FAULT_RULES: [FaultRule; 4] = [
    FaultRule {
        id: 1,
        kind: ComponentKind::Temperature,
        health_floor: 30,
        component: "Temperature System",
        severity: Severity::Critical,
        message: "Critical temperature levels detected in pump bearing assembly",
        reading_unit: "°C",
        location: "Pump Station 3, Unit B",
        recommendations: &[
            "Shut down pump immediately to prevent catastrophic failure",
            "Inspect cooling system for blockages or failures",
            "Check lubrication system and replace if necessary",
            "Inspect bearing assembly for wear or damage",
        ],
    },
    FaultRule {
        id: 2,
        kind: ComponentKind::Vibration,
        health_floor: 50,
        component: "Vibration System",
        severity: Severity::Warning,
        message: "Abnormal vibration patterns detected in compressor unit",
        reading_unit: " Hz",
        location: "Compressor Station 2",
        recommendations: &[
            "Schedule maintenance within 48 hours",
            "Inspect shaft alignment and correct if necessary",
            "Check for loose mounting bolts and tighten",
            "Inspect bearings for wear and replace if needed",
        ],
    },
    FaultRule {
        id: 3,
        kind: ComponentKind::Sound,
        health_floor: 60,
        component: "Sound System",
        severity: Severity::Warning,
        message: "Unusual acoustic signature detected in valve assembly",
        reading_unit: " dB",
        location: "Pipeline Section A, Valve Cluster 5",
        recommendations: &[
            "Inspect valve for internal leakage or cavitation",
            "Check valve seat and replace if damaged",
            "Verify proper flow conditions and adjust if necessary",
            "Consider replacement if valve shows signs of extensive wear",
        ],
    },
    FaultRule {
        id: 4,
        kind: ComponentKind::Load,
        health_floor: 40,
        component: "Load System",
        severity: Severity::Critical,
        message: "Excessive load detected on transfer pump motor",
        reading_unit: " kW",
        location: "Transfer Station 4",
        recommendations: &[
            "Reduce operational load immediately",
            "Inspect for mechanical obstructions in pump assembly",
            "Check for fluid viscosity issues or contamination",
            "Inspect motor windings and electrical connections",
        ],
    },
];

/// Faults for every component whose health is below its alert floor.
pub fn detect_faults(components: &Components, timestamp: &str) -> Vec<Fault> {
    FAULT_RULES
        .iter()
        .filter_map(|rule| {
            let component = components.get(rule.kind);
            if component.health >= rule.health_floor {
                return None;
            }
            Some(Fault {
                id: rule.id,
                kind: rule.kind,
                component: rule.component,
                severity: rule.severity,
                message: rule.message,
                readings: format!(
                    "{}{} (Threshold: {}{})",
                    component.current, rule.reading_unit, component.threshold, rule.reading_unit
                ),
                location: rule.location,
                timestamp: timestamp.to_string(),
                recommendations: rule.recommendations.to_vec(),
            })
        })
        .collect()
}

pub fn recommend(faults: &[Fault]) -> Vec<Recommendation> {
    faults
        .iter()
        .map(|fault| {
            let critical = fault.severity == Severity::Critical;
            Recommendation {
                id: fault.id,
                component: fault.component,
                severity: fault.severity,
                action: fault.recommendations.first().copied().unwrap_or_default(),
                deadline: if critical { "Immediate" } else { "Within 48 hours" },
                impact: if critical { "High" } else { "Medium" },
                location: fault.location,
            }
        })
        .collect()
}

#[derive(Clone)]
pub struct PredictiveService {
    clock: Arc<dyn Clock>,
    labels: LabelFormats,
    components: Components,
}

impl PredictiveService {
    pub fn new(clock: Arc<dyn Clock>, labels: LabelFormats, components: Components) -> Self {
        Self {
            clock,
            labels,
            components,
        }
    }

    pub fn summary(&self) -> GeneratorResult<PredictiveSummary> {
        aggregate(&self.components, PREDICTIVE_SEED, self.clock.now(), &self.labels)
    }

    pub fn faults(&self) -> Vec<Fault> {
        let timestamp = self.clock.now().format(&self.labels.timestamp).to_string();
        detect_faults(&self.components, &timestamp)
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        recommend(&self.faults())
    }
}
