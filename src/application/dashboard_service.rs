// Dashboard service - Use cases for building industry, leak-type and sensor views
use crate::application::sensor_generator::{derive_seed, pseudo_random, SensorGenerator};
use crate::domain::alert::{AlertFeed, AlertFilter, ALERTS};
use crate::domain::dashboard::{
    GaugeRange, IndustryOverview, LeakTypeDashboard, LeakTypeOverview, SensorCard, SensorDetail,
    SensorHealth,
};
use crate::domain::error::{GeneratorError, GeneratorResult};
use crate::domain::industry::{
    find_industry, slugify, usage_description, Industry, LeakType, INDUSTRIES,
};
use crate::domain::sensor::{SensorType, Status};
use std::collections::HashSet;

#[derive(Clone)]
pub struct DashboardService {
    generator: SensorGenerator,
    point_count: usize,
}

impl DashboardService {
    pub fn new(generator: SensorGenerator, point_count: usize) -> Self {
        Self {
            generator,
            point_count,
        }
    }

    pub fn list_industries(&self) -> &'static [Industry] {
        INDUSTRIES
    }

    pub fn industry(&self, slug: &str) -> GeneratorResult<&'static Industry> {
        find_industry(slug).ok_or_else(|| GeneratorError::UnknownIndustry(slug.to_string()))
    }

    pub fn leak_type(
        &self,
        industry_slug: &str,
        leak_slug: &str,
    ) -> GeneratorResult<(&'static Industry, &'static LeakType)> {
        let industry = self.industry(industry_slug)?;
        let leak_type = industry.find_leak_type(leak_slug).ok_or_else(|| {
            GeneratorError::UnknownLeakType {
                industry: industry_slug.to_string(),
                leak_type: leak_slug.to_string(),
            }
        })?;
        Ok((industry, leak_type))
    }

    pub fn industry_overview(&self, slug: &str) -> GeneratorResult<IndustryOverview> {
        let industry = self.industry(slug)?;

        let leak_types = industry
            .leak_types
            .iter()
            .map(|leak_type| {
                let status = self.worst_status(leak_type)?;
                Ok(LeakTypeOverview {
                    title: leak_type.title,
                    slug: leak_type.slug(),
                    description: leak_type.description,
                    status,
                })
            })
            .collect::<GeneratorResult<Vec<_>>>()?;

        Ok(IndustryOverview {
            industry,
            leak_types,
        })
    }

    pub fn leak_type_dashboard(
        &self,
        industry_slug: &str,
        leak_slug: &str,
    ) -> GeneratorResult<LeakTypeDashboard> {
        let (industry, leak_type) = self.leak_type(industry_slug, leak_slug)?;
        let title = format!(
            "{} - {}",
            industry.title.to_uppercase(),
            leak_type.title.to_uppercase()
        );

        let sensors = leak_type
            .sensors
            .iter()
            .enumerate()
            .map(|(index, name)| self.sensor_card(index, name))
            .collect::<GeneratorResult<Vec<_>>>()?;

        tracing::debug!("Built dashboard '{}' with {} sensor cards", title, sensors.len());

        Ok(LeakTypeDashboard {
            title,
            industry,
            leak_type,
            sensors,
        })
    }

    pub fn sensor_detail(
        &self,
        industry_slug: &str,
        leak_slug: &str,
        index: usize,
    ) -> GeneratorResult<SensorDetail> {
        let (industry, leak_type) = self.leak_type(industry_slug, leak_slug)?;
        let name = leak_type.sensors.get(index).ok_or_else(|| {
            GeneratorError::SensorIndexOutOfRange {
                leak_type: leak_type.title.to_string(),
                index,
                count: leak_type.sensors.len(),
            }
        })?;

        let readings = self.generator.generate(name, self.point_count)?;
        let usage = usage_description(&SensorType::from_name(name), industry.title);

        Ok(SensorDetail {
            industry,
            leak_type,
            readings,
            operating_info: self.generator.operating_info(),
            usage,
        })
    }

    /// Alert feed scoped to one industry (untagged alerts always show) and
    /// narrowed by the filter. Status totals ignore the filter.
    pub fn alert_feed(
        &self,
        filter: AlertFilter,
        industry_filter: Option<&str>,
    ) -> GeneratorResult<AlertFeed> {
        let scoped = match industry_filter {
            Some(slug) => {
                let industry = self.industry(slug)?;
                ALERTS.iter().filter(|a| a.applies_to(industry.slug)).collect()
            }
            None => ALERTS.iter().collect(),
        };
        let feed = AlertFeed::build(scoped, filter);
        tracing::debug!(
            "Alert feed (filter={}): {} shown, {} active",
            filter,
            feed.alerts.len(),
            feed.active
        );
        Ok(feed)
    }

    /// Health of every distinct sensor across the catalog. The first
    /// industry and leak type listing a sensor owns it.
    pub fn fleet_health(&self, industry_filter: Option<&str>) -> GeneratorResult<Vec<SensorHealth>> {
        if let Some(slug) = industry_filter {
            self.industry(slug)?;
        }

        let mut seen = HashSet::new();
        let mut fleet = Vec::new();

        for industry in INDUSTRIES {
            for leak_type in industry.leak_types {
                for name in leak_type.sensors {
                    if !seen.insert(*name) {
                        continue;
                    }
                    if industry_filter.is_some_and(|slug| slug != industry.slug) {
                        continue;
                    }
                    let readings = self.generator.generate(name, self.point_count)?;
                    fleet.push(SensorHealth {
                        sensor_name: *name,
                        industry: industry.title,
                        leak_type: leak_type.title,
                        status: readings.status,
                        current_value: readings.current_value,
                        unit: readings.unit(),
                        warning_threshold: readings.warning_threshold(),
                        fault_threshold: readings.fault_threshold(),
                        health: self.sensor_health(name, readings.status),
                    });
                }
            }
        }

        Ok(fleet)
    }

    /// Health percentage within the band of the sensor's status:
    /// Normal 70-99, Warning 40-69, Fault 10-39.
    pub fn sensor_health(&self, name: &str, status: Status) -> u8 {
        let floor = match status {
            Status::Normal => 70,
            Status::Warning => 40,
            Status::Fault => 10,
        };
        let offset = (pseudo_random(derive_seed(name), self.point_count) * 30.0).floor() as u8;
        floor + offset.min(29)
    }

    fn sensor_card(&self, index: usize, name: &str) -> GeneratorResult<SensorCard> {
        let readings = self.generator.generate(name, self.point_count)?;
        let gauge = GaugeRange::for_sensor(name);
        Ok(SensorCard {
            index,
            name: name.to_string(),
            slug: slugify(name),
            status: readings.status,
            current_value: readings.current_value,
            unit: readings.unit(),
            percentage: gauge.percentage(readings.current_value),
            gauge,
        })
    }

    fn worst_status(&self, leak_type: &LeakType) -> GeneratorResult<Status> {
        let mut worst = Status::Normal;
        for name in leak_type.sensors {
            worst = worst.max(self.generator.generate(name, self.point_count)?.status);
        }
        Ok(worst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::clock::test_clock;
    use crate::domain::alert::AlertStatus;
    use crate::infrastructure::config::LabelFormats;
    use std::sync::Arc;

    fn service() -> DashboardService {
        let generator = SensorGenerator::new(Arc::new(test_clock()), LabelFormats::default());
        DashboardService::new(generator, 24)
    }

    #[test]
    fn test_leak_type_dashboard_has_card_per_sensor() {
        let dashboard = service()
            .leak_type_dashboard("oil-gas", "faulty-valves")
            .unwrap();
        assert_eq!(dashboard.title, "OIL & GAS INDUSTRY - FAULTY VALVES");
        let names: Vec<_> = dashboard.sensors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Acoustic Sensor", "Vibration Sensor", "Pressure Sensor"]
        );
        assert_eq!(dashboard.sensors[1].slug, "vibration-sensor");
        assert_eq!(dashboard.sensors[2].index, 2);
        for card in &dashboard.sensors {
            assert!((0.0..=100.0).contains(&card.percentage));
        }
    }

    #[test]
    fn test_cards_are_stable_between_calls() {
        let svc = service();
        let first = svc.leak_type_dashboard("aerospace", "jet-fuel-leakages").unwrap();
        let second = svc.leak_type_dashboard("aerospace", "jet-fuel-leakages").unwrap();
        for (a, b) in first.sensors.iter().zip(second.sensors.iter()) {
            assert_eq!(a.status, b.status);
            assert_eq!(a.current_value, b.current_value);
        }
    }

    #[test]
    fn test_unknown_lookups_are_typed_errors() {
        let svc = service();
        assert!(matches!(
            svc.leak_type_dashboard("mining", "anything"),
            Err(GeneratorError::UnknownIndustry(_))
        ));
        assert!(matches!(
            svc.leak_type_dashboard("oil-gas", "fuel-theft"),
            Err(GeneratorError::UnknownLeakType { .. })
        ));
        assert!(matches!(
            svc.sensor_detail("oil-gas", "pipeline-corrosion", 2),
            Err(GeneratorError::SensorIndexOutOfRange { index: 2, count: 2, .. })
        ));
    }

    #[test]
    fn test_sensor_detail() {
        let detail = service()
            .sensor_detail("construction", "fuel-theft", 0)
            .unwrap();
        assert_eq!(detail.readings.sensor_name, "Ultrasonic Fuel Level Sensor");
        assert_eq!(detail.readings.unit(), "cm");
        assert_eq!(detail.readings.points.len(), 24);
        assert_eq!(detail.operating_info.operating_hours, "876h 45m");
        assert!(detail.usage.contains("Construction"));
    }

    #[test]
    fn test_industry_overview_status_is_worst_sensor() {
        let svc = service();
        let overview = svc.industry_overview("transportation").unwrap();
        assert_eq!(overview.leak_types.len(), 3);
        for leak in &overview.leak_types {
            let dashboard = svc.leak_type_dashboard("transportation", &leak.slug).unwrap();
            let worst = dashboard.sensors.iter().map(|c| c.status).max().unwrap();
            assert_eq!(leak.status, worst);
        }
    }

    #[test]
    fn test_fleet_health_deduplicates_sensors() {
        let fleet = service().fleet_health(None).unwrap();
        let names: HashSet<_> = fleet.iter().map(|s| s.sensor_name).collect();
        assert_eq!(names.len(), fleet.len());

        let pressure = fleet
            .iter()
            .find(|s| s.sensor_name == "Pressure Sensor")
            .unwrap();
        assert_eq!(pressure.industry, "Oil & Gas Industry");
        assert_eq!(pressure.leak_type, "Pipeline Corrosion");
    }

    #[test]
    fn test_fleet_health_within_status_band() {
        for sensor in service().fleet_health(None).unwrap() {
            let band = match sensor.status {
                Status::Normal => 70..=99,
                Status::Warning => 40..=69,
                Status::Fault => 10..=39,
            };
            assert!(band.contains(&sensor.health), "{:?}", sensor);
        }
    }

    #[test]
    fn test_fleet_health_industry_filter() {
        let svc = service();
        let fleet = svc.fleet_health(Some("agriculture")).unwrap();
        assert!(fleet.iter().all(|s| s.industry == "Agriculture (AgriTech)"));
        // Only sensors first listed by agriculture remain
        let names: Vec<_> = fleet.iter().map(|s| s.sensor_name).collect();
        assert_eq!(
            names,
            vec!["Fuel & Oil Cable", "Capacitive Fuel Sensor", "Humidity Sensor"]
        );

        assert!(matches!(
            svc.fleet_health(Some("mining")),
            Err(GeneratorError::UnknownIndustry(_))
        ));
    }

    #[test]
    fn test_alert_feed_filters_and_scopes() {
        let svc = service();
        let feed = svc
            .alert_feed(AlertFilter::Status(AlertStatus::Resolved), Some("construction"))
            .unwrap();
        assert_eq!(feed.alerts.len(), 1);
        assert_eq!(feed.alerts[0].asset_id, "LINE-C-012");
        assert_eq!((feed.active, feed.acknowledged, feed.resolved), (2, 1, 1));

        let all = svc.alert_feed(AlertFilter::default(), None).unwrap();
        assert_eq!(all.alerts.len(), 4);

        assert!(matches!(
            svc.alert_feed(AlertFilter::All, Some("mining")),
            Err(GeneratorError::UnknownIndustry(_))
        ));
    }
}
