// Mapper to convert domain models to the JSON payloads the dashboard renders
use crate::domain::alert::{Alert, AlertFeed, AlertSeverity, AlertStatus};
use crate::domain::dashboard::{
    IndustryOverview, LeakTypeDashboard, SensorCard, SensorDetail, SensorHealth,
};
use crate::domain::industry::Industry;
use crate::domain::predictive::{
    Components, Fault, HealthBand, PredictiveSummary, Recommendation, Severity,
};
use crate::domain::sensor::Status;
use crate::domain::telemetry::{SensorReadings, TimeSeriesPoint};
use anyhow::Context;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PointJson {
    pub time: String,
    pub value: f64,
    pub timestamp: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReadingsJson {
    pub sensor_type: String,
    pub data: Vec<PointJson>,
    pub unit: &'static str,
    pub warning_threshold: f64,
    pub fault_threshold: f64,
    pub current_value: f64,
    pub status: Status,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorCardJson {
    #[serde(rename = "type")]
    pub sensor_type: String,
    pub slug: String,
    pub index: usize,
    pub status: Status,
    pub value: f64,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeakTypeDashboardJson {
    pub title: String,
    pub industry: &'static str,
    pub leak_type: &'static str,
    pub description: &'static str,
    pub sensors: Vec<SensorCardJson>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeakTypeSummaryJson {
    pub title: &'static str,
    pub slug: String,
    pub description: &'static str,
    pub sensors: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryJson {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub leak_types: Vec<LeakTypeSummaryJson>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingInfoJson {
    pub operating_hours: String,
    pub last_updated: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorDetailJson {
    pub industry: &'static str,
    pub leak_type: &'static str,
    pub usage: String,
    pub operating_info: OperatingInfoJson,
    #[serde(flatten)]
    pub readings: SensorReadingsJson,
}

#[derive(Debug, Serialize)]
pub struct HealthPointJson {
    pub time: String,
    pub health: f64,
}

#[derive(Debug, Serialize)]
pub struct AnomalyPointJson {
    pub time: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultJson {
    pub id: u32,
    pub component: &'static str,
    pub severity: Severity,
    pub message: &'static str,
    pub timestamp: String,
    pub readings: String,
    pub location: &'static str,
    pub recommendations: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationJson {
    pub id: u32,
    pub component: &'static str,
    pub severity: Severity,
    pub action: &'static str,
    pub deadline: &'static str,
    pub impact: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictiveJson {
    pub health_history: Vec<HealthPointJson>,
    pub anomaly_history: Vec<AnomalyPointJson>,
    pub components: Components,
    pub remaining_days: u32,
    pub remaining_hours: u32,
    pub health_band: HealthBand,
    pub faults: Vec<FaultJson>,
    pub recommendations: Vec<RecommendationJson>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorHealthJson {
    #[serde(rename = "type")]
    pub sensor_type: &'static str,
    pub industry: &'static str,
    pub leak_type: &'static str,
    pub status: Status,
    pub current_value: f64,
    pub unit: &'static str,
    pub warning_threshold: f64,
    pub fault_threshold: f64,
    pub health: u8,
    pub health_band: HealthBand,
}

pub fn readings_to_json(readings: SensorReadings) -> SensorReadingsJson {
    SensorReadingsJson {
        unit: readings.unit(),
        warning_threshold: readings.warning_threshold(),
        fault_threshold: readings.fault_threshold(),
        current_value: readings.current_value,
        status: readings.status,
        data: readings.points.into_iter().map(point_to_json).collect(),
        sensor_type: readings.sensor_name,
    }
}

fn point_to_json(point: TimeSeriesPoint) -> PointJson {
    PointJson {
        time: point.label,
        value: point.value,
        timestamp: point.time_ms,
    }
}

fn card_to_json(card: SensorCard) -> SensorCardJson {
    SensorCardJson {
        sensor_type: card.name,
        slug: card.slug,
        index: card.index,
        status: card.status,
        value: card.current_value,
        unit: card.unit,
        min: card.gauge.min,
        max: card.gauge.max,
        percentage: card.percentage,
    }
}

pub fn dashboard_to_json(dashboard: LeakTypeDashboard) -> LeakTypeDashboardJson {
    LeakTypeDashboardJson {
        title: dashboard.title,
        industry: dashboard.industry.title,
        leak_type: dashboard.leak_type.title,
        description: dashboard.leak_type.description,
        sensors: dashboard.sensors.into_iter().map(card_to_json).collect(),
    }
}

pub fn industry_to_json(industry: &'static Industry) -> IndustryJson {
    IndustryJson {
        slug: industry.slug,
        title: industry.title,
        description: industry.description,
        leak_types: industry
            .leak_types
            .iter()
            .map(|lt| LeakTypeSummaryJson {
                title: lt.title,
                slug: lt.slug(),
                description: lt.description,
                sensors: lt.sensors,
                status: None,
            })
            .collect(),
    }
}

pub fn overview_to_json(overview: IndustryOverview) -> IndustryJson {
    let mut json = industry_to_json(overview.industry);
    for (summary, leak) in json.leak_types.iter_mut().zip(overview.leak_types) {
        summary.status = Some(leak.status);
    }
    json
}

pub fn detail_to_json(detail: SensorDetail) -> SensorDetailJson {
    SensorDetailJson {
        industry: detail.industry.title,
        leak_type: detail.leak_type.title,
        usage: detail.usage,
        operating_info: OperatingInfoJson {
            operating_hours: detail.operating_info.operating_hours,
            last_updated: detail.operating_info.last_updated,
        },
        readings: readings_to_json(detail.readings),
    }
}

fn fault_to_json(fault: Fault) -> FaultJson {
    FaultJson {
        id: fault.id,
        component: fault.component,
        severity: fault.severity,
        message: fault.message,
        timestamp: fault.timestamp,
        readings: fault.readings,
        location: fault.location,
        recommendations: fault.recommendations,
    }
}

fn recommendation_to_json(rec: Recommendation) -> RecommendationJson {
    RecommendationJson {
        id: rec.id,
        component: rec.component,
        severity: rec.severity,
        action: rec.action,
        deadline: rec.deadline,
        impact: rec.impact,
        location: rec.location,
    }
}

pub fn predictive_to_json(
    summary: PredictiveSummary,
    faults: Vec<Fault>,
    recommendations: Vec<Recommendation>,
) -> PredictiveJson {
    PredictiveJson {
        health_history: summary
            .health_history
            .into_iter()
            .map(|p| HealthPointJson {
                time: p.label,
                health: p.health,
            })
            .collect(),
        anomaly_history: summary
            .anomaly_history
            .into_iter()
            .map(|p| AnomalyPointJson {
                time: p.label,
                score: p.score,
            })
            .collect(),
        health_band: HealthBand::from_health(summary.components.min_health()),
        components: summary.components,
        remaining_days: summary.remaining_days,
        remaining_hours: summary.remaining_hours,
        faults: faults.into_iter().map(fault_to_json).collect(),
        recommendations: recommendations
            .into_iter()
            .map(recommendation_to_json)
            .collect(),
    }
}

pub fn fleet_to_json(fleet: Vec<SensorHealth>) -> Vec<SensorHealthJson> {
    fleet
        .into_iter()
        .map(|s| SensorHealthJson {
            sensor_type: s.sensor_name,
            industry: s.industry,
            leak_type: s.leak_type,
            status: s.status,
            current_value: s.current_value,
            unit: s.unit,
            warning_threshold: s.warning_threshold,
            fault_threshold: s.fault_threshold,
            health: s.health,
            health_band: HealthBand::from_health(s.health),
        })
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertJson {
    pub id: u32,
    pub title: &'static str,
    pub message: &'static str,
    pub severity: AlertSeverity,
    pub time: &'static str,
    pub status: AlertStatus,
    pub location: &'static str,
    pub asset_id: &'static str,
    pub recommendations: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct AlertCountsJson {
    pub active: usize,
    pub acknowledged: usize,
    pub resolved: usize,
}

#[derive(Debug, Serialize)]
pub struct AlertFeedJson {
    pub alerts: Vec<AlertJson>,
    pub counts: AlertCountsJson,
}

fn alert_to_json(alert: &Alert) -> AlertJson {
    AlertJson {
        id: alert.id,
        title: alert.title,
        message: alert.message,
        severity: alert.severity,
        time: alert.time,
        status: alert.status,
        location: alert.location,
        asset_id: alert.asset_id,
        recommendations: alert.recommendations,
        industry: alert.industry,
    }
}

pub fn alerts_to_json(feed: AlertFeed) -> AlertFeedJson {
    AlertFeedJson {
        alerts: feed.alerts.into_iter().map(alert_to_json).collect(),
        counts: AlertCountsJson {
            active: feed.active,
            acknowledged: feed.acknowledged,
            resolved: feed.resolved,
        },
    }
}

pub fn to_pretty_json<T: Serialize>(payload: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(payload).context("Failed to serialize JSON payload")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::industry::find_industry;
    use crate::domain::sensor::lookup_profile;
    use serde_json::json;

    fn readings() -> SensorReadings {
        SensorReadings {
            sensor_name: "Pressure Sensor".to_string(),
            points: vec![TimeSeriesPoint::new("14:30".to_string(), 112.5, 1_710_513_000_000)],
            profile: lookup_profile("pressure sensor"),
            current_value: 112.5,
            status: Status::Normal,
        }
    }

    #[test]
    fn test_readings_payload_shape() {
        let value = serde_json::to_value(readings_to_json(readings())).unwrap();
        assert_eq!(
            value,
            json!({
                "sensorType": "Pressure Sensor",
                "data": [{ "time": "14:30", "value": 112.5, "timestamp": 1_710_513_000_000i64 }],
                "unit": "psi",
                "warningThreshold": 120.0,
                "faultThreshold": 150.0,
                "currentValue": 112.5,
                "status": "Normal"
            })
        );
    }

    #[test]
    fn test_industry_payload_lists_leak_slugs() {
        let json = industry_to_json(find_industry("construction").unwrap());
        let value = serde_json::to_value(&json).unwrap();
        assert_eq!(value["leakTypes"][2]["slug"], "fuel-theft");
        assert!(value["leakTypes"][0].get("status").is_none());
    }

    #[test]
    fn test_alert_feed_json_shape() {
        let feed = AlertFeed::build(
            crate::domain::alert::ALERTS.iter().collect(),
            crate::domain::alert::AlertFilter::All,
        );
        let value = serde_json::to_value(alerts_to_json(feed)).unwrap();
        assert_eq!(value["alerts"][0]["assetId"], "PIPE-A-123");
        assert_eq!(value["alerts"][2]["severity"], "critical");
        assert_eq!(value["alerts"][2]["status"], "acknowledged");
        assert!(value["alerts"][0].get("industry").is_none());
        assert_eq!(value["counts"], json!({"active": 2, "acknowledged": 1, "resolved": 1}));
    }
}
