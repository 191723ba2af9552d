// Command handlers: each renders one dashboard view as pretty JSON
use crate::domain::alert::AlertFilter;
use crate::infrastructure::json_mapper::{
    alerts_to_json, dashboard_to_json, detail_to_json, fleet_to_json, industry_to_json, overview_to_json,
    predictive_to_json, readings_to_json, to_pretty_json,
};
use crate::presentation::app_state::AppState;
use anyhow::Context;

pub fn list_industries(state: &AppState) -> anyhow::Result<String> {
    let industries: Vec<_> = state
        .dashboard_service
        .list_industries()
        .iter()
        .map(industry_to_json)
        .collect();
    to_pretty_json(&industries)
}

pub fn industry_overview(state: &AppState, slug: &str) -> anyhow::Result<String> {
    let overview = state.dashboard_service.industry_overview(slug)?;
    to_pretty_json(&overview_to_json(overview))
}

pub fn leak_type_dashboard(
    state: &AppState,
    industry: &str,
    leak_type: &str,
) -> anyhow::Result<String> {
    let dashboard = state
        .dashboard_service
        .leak_type_dashboard(industry, leak_type)
        .with_context(|| format!("Failed to build dashboard for {}/{}", industry, leak_type))?;
    to_pretty_json(&dashboard_to_json(dashboard))
}

/// Points default to the configured count when not given.
pub fn sensor_series(
    state: &AppState,
    sensor_type: &str,
    points: Option<usize>,
) -> anyhow::Result<String> {
    let points = points.unwrap_or(state.config.default_points);
    let readings = state
        .generator
        .generate(sensor_type, points)
        .with_context(|| format!("Failed to generate series for '{}'", sensor_type))?;
    to_pretty_json(&readings_to_json(readings))
}

pub fn sensor_detail(
    state: &AppState,
    industry: &str,
    leak_type: &str,
    index: usize,
) -> anyhow::Result<String> {
    let detail = state
        .dashboard_service
        .sensor_detail(industry, leak_type, index)?;
    to_pretty_json(&detail_to_json(detail))
}

pub fn predictive(state: &AppState) -> anyhow::Result<String> {
    let service = &state.predictive_service;
    let summary = service.summary()?;
    let faults = service.faults();
    let recommendations = service.recommendations();
    to_pretty_json(&predictive_to_json(summary, faults, recommendations))
}

pub fn fleet_health(state: &AppState, industry: Option<&str>) -> anyhow::Result<String> {
    let fleet = state.dashboard_service.fleet_health(industry)?;
    to_pretty_json(&fleet_to_json(fleet))
}

pub fn alerts(state: &AppState, filter: &str, industry: Option<&str>) -> anyhow::Result<String> {
    let filter: AlertFilter = filter.parse()?;
    let feed = state.dashboard_service.alert_feed(filter, industry)?;
    to_pretty_json(&alerts_to_json(feed))
}

pub fn dump_config(state: &AppState) -> anyhow::Result<String> {
    state.config.to_toml()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::clock::test_clock;
    use crate::infrastructure::config::DashboardConfig;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::new(DashboardConfig::default(), Arc::new(test_clock()))
    }

    #[test]
    fn test_sensor_series_uses_default_points() {
        let output = sensor_series(&state(), "Humidity Sensor", None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["data"].as_array().unwrap().len(), 24);
        assert_eq!(value["unit"], "%");
    }

    #[test]
    fn test_sensor_series_rejects_zero_points() {
        let err = sensor_series(&state(), "Humidity Sensor", Some(0)).unwrap_err();
        assert!(format!("{:#}", err).contains("point count must be at least 1"));
    }

    #[test]
    fn test_predictive_payload() {
        let output = predictive(&state()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["remainingDays"], 1);
        assert_eq!(value["remainingHours"], 4);
        assert_eq!(value["healthBand"], "critical");
        assert_eq!(value["faults"][0]["severity"], "critical");
        assert_eq!(value["recommendations"][0]["deadline"], "Immediate");
        assert_eq!(value["components"]["load"]["health"], 57);
    }

    #[test]
    fn test_industries_listing() {
        let output = list_industries(&state()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 5);
        assert_eq!(value[0]["slug"], "oil-gas");
    }

    #[test]
    fn test_sensor_detail_payload_flattens_readings() {
        let output = sensor_detail(&state(), "oil-gas", "blowouts", 1).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["sensorType"], "IR Flame Sensor");
        assert_eq!(value["unit"], "V");
        assert_eq!(value["operatingInfo"]["operatingHours"], "876h 45m");
    }

    #[test]
    fn test_dump_config_is_toml() {
        let output = dump_config(&state()).unwrap();
        assert!(output.contains("default_points = 24"));
    }

    #[test]
    fn test_alerts_payload() {
        let output = alerts(&state(), "critical", Some("oil-gas")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["alerts"].as_array().unwrap().len(), 1);
        assert_eq!(value["alerts"][0]["title"], "Pump Vibration");
        assert_eq!(value["counts"]["active"], 2);

        let err = alerts(&state(), "urgent", None).unwrap_err();
        assert!(err.to_string().contains("unknown alert filter"));
    }
}
