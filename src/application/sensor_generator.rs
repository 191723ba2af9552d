// Sensor generator - Deterministic synthetic time series per sensor type
use crate::application::clock::Clock;
use crate::domain::error::{GeneratorError, GeneratorResult};
use crate::domain::sensor::{classify, SensorProfile, SensorType};
use crate::domain::telemetry::{OperatingInfo, SensorReadings, TimeSeriesPoint};
use crate::infrastructure::config::LabelFormats;
use chrono::{DateTime, FixedOffset, TimeDelta};
use std::sync::Arc;

pub const DEFAULT_POINT_COUNT: usize = 24;
pub const SAMPLE_INTERVAL_MINUTES: i64 = 5;

const OPERATING_HOURS: u32 = 876;
const OPERATING_MINUTES: u32 = 45;

/// Sum of the UTF-16 code units of the name. Case-sensitive, so
/// "Pressure Sensor" and "pressure sensor" seed different series.
pub fn derive_seed(name: &str) -> u64 {
    name.encode_utf16().map(u64::from).sum()
}

/// `|sin(seed * (i + 1))|`, the only randomness source of a series.
pub fn pseudo_random(seed: u64, index: usize) -> f64 {
    (seed as f64 * (index as f64 + 1.0)).sin().abs()
}

/// Value for sample `index` counted back from the newest point.
///
/// Every 8th sample is a spike or dip of 1.5 variances, every 3rd a
/// moderate swing, the rest a fine swing of half a variance. Never negative.
pub fn synthesize_value(profile: &SensorProfile, pseudo_random: f64, index: usize) -> f64 {
    let value = if index % 8 == 0 {
        let sign = if pseudo_random > 0.5 { 1.0 } else { -1.0 };
        profile.base_value + sign * profile.variance * 1.5
    } else if index % 3 == 0 {
        profile.base_value + (pseudo_random - 0.5) * profile.variance
    } else {
        profile.base_value + (pseudo_random - 0.5) * profile.variance * 0.5
    };
    value.max(0.0)
}

/// One decimal place taken from the exact binary value, so 0.85 (stored
/// just below) rounds to 0.8. Exact ties go up.
pub fn round_one_decimal(value: f64) -> f64 {
    // x.25 and x.75 are the only exact ties; scaling them by 10 is exact
    if (value * 4.0).fract() == 0.0 {
        return (value * 10.0).round() / 10.0;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Generate `point_count` samples spaced five minutes apart ending at `now`,
/// oldest first, and classify the newest one.
pub fn generate(
    sensor_name: &str,
    point_count: usize,
    now: DateTime<FixedOffset>,
    time_format: &str,
) -> GeneratorResult<SensorReadings> {
    if point_count == 0 {
        return Err(GeneratorError::InvalidArgument(
            "point count must be at least 1".to_string(),
        ));
    }

    let seed = derive_seed(sensor_name);
    let sensor_type = SensorType::from_name(sensor_name);
    if sensor_type.is_unknown() {
        tracing::warn!(
            "Unrecognised sensor type '{}', using default profile",
            sensor_name
        );
    }
    let profile = sensor_type.profile();

    let points: Vec<TimeSeriesPoint> = (0..point_count)
        .rev()
        .map(|i| {
            let time = now - TimeDelta::minutes(i as i64 * SAMPLE_INTERVAL_MINUTES);
            let value = synthesize_value(&profile, pseudo_random(seed, i), i);
            TimeSeriesPoint::new(
                time.format(time_format).to_string(),
                value,
                time.timestamp_millis(),
            )
        })
        .collect();

    // point_count >= 1 so the newest sample is index 0
    let current_value = round_one_decimal(synthesize_value(&profile, pseudo_random(seed, 0), 0));
    let status = classify(current_value, &profile);

    tracing::debug!(
        "Generated {} points for '{}' (seed={}): current={}{} status={}",
        points.len(),
        sensor_name,
        seed,
        current_value,
        profile.unit,
        status
    );

    Ok(SensorReadings {
        sensor_name: sensor_name.to_string(),
        points,
        profile,
        current_value,
        status,
    })
}

/// Generator bound to a clock and label formats.
#[derive(Clone)]
pub struct SensorGenerator {
    clock: Arc<dyn Clock>,
    labels: LabelFormats,
}

impl SensorGenerator {
    pub fn new(clock: Arc<dyn Clock>, labels: LabelFormats) -> Self {
        Self { clock, labels }
    }

    pub fn generate(&self, sensor_name: &str, point_count: usize) -> GeneratorResult<SensorReadings> {
        generate(sensor_name, point_count, self.clock.now(), &self.labels.time)
    }

    pub fn operating_info(&self) -> OperatingInfo {
        OperatingInfo {
            operating_hours: format!("{}h {}m", OPERATING_HOURS, OPERATING_MINUTES),
            last_updated: self.clock.now().format(&self.labels.timestamp).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::clock::test_clock;
    use crate::domain::sensor::{lookup_profile, Status};
    use proptest::prelude::*;

    fn generator() -> SensorGenerator {
        SensorGenerator::new(Arc::new(test_clock()), LabelFormats::default())
    }

    #[test]
    fn test_derive_seed_sums_char_codes() {
        assert_eq!(derive_seed(""), 0);
        assert_eq!(derive_seed("AB"), 65 + 66);
        assert_ne!(derive_seed("Pressure Sensor"), derive_seed("pressure sensor"));
    }

    #[test]
    fn test_pseudo_random_at_index_zero() {
        let seed = derive_seed("Pressure Sensor");
        let pr = pseudo_random(seed, 0);
        assert_eq!(pr, (seed as f64).sin().abs());
        assert!((0.0..1.0).contains(&pr));
    }

    #[test]
    fn test_zero_points_is_invalid_argument() {
        let result = generator().generate("Pressure Sensor", 0);
        assert!(matches!(result, Err(GeneratorError::InvalidArgument(_))));
    }

    #[test]
    fn test_series_shape_and_spacing() {
        let readings = generator().generate("Temperature Sensor", 24).unwrap();
        assert_eq!(readings.points.len(), 24);

        let now_ms = test_clock().now().timestamp_millis();
        assert_eq!(readings.points.last().unwrap().time_ms, now_ms);
        assert_eq!(readings.points[0].time_ms, now_ms - 23 * 5 * 60_000);
        for pair in readings.points.windows(2) {
            assert_eq!(pair[1].time_ms - pair[0].time_ms, 5 * 60_000);
        }
        assert_eq!(readings.points.last().unwrap().label, "14:30");
        assert_eq!(readings.points[0].label, "12:35");
    }

    #[test]
    fn test_newest_point_is_a_spike() {
        // index 0 is a multiple of 8, so the newest point is base ± 1.5 variances
        let readings = generator().generate("Pressure Sensor", 10).unwrap();
        let last = readings.points.last().unwrap().value;
        assert!(last == 75.0 + 37.5 || last == 75.0 - 37.5);
        assert_eq!(readings.current_value, round_one_decimal(last));
        assert_eq!(readings.status, Status::Normal);
        assert_eq!(readings.unit(), "psi");
        assert_eq!(readings.warning_threshold(), 120.0);
        assert_eq!(readings.fault_threshold(), 150.0);
    }

    #[test]
    fn test_regimes_follow_index_modulus() {
        let profile = lookup_profile("vibration sensor");
        assert_eq!(synthesize_value(&profile, 0.9, 16), 450.0 + 225.0);
        assert_eq!(synthesize_value(&profile, 0.5, 16), 450.0 - 225.0);
        assert_eq!(synthesize_value(&profile, 0.75, 3), 450.0 + 0.25 * 150.0);
        assert_eq!(synthesize_value(&profile, 0.75, 1), 450.0 + 0.25 * 75.0);
    }

    #[test]
    fn test_values_are_clamped_at_zero() {
        let profile = lookup_profile("ir flame sensor");
        // 0.4 - 0.3 * 1.5 < 0
        assert_eq!(synthesize_value(&profile, 0.1, 0), 0.0);
    }

    #[test]
    fn test_unknown_sensor_uses_default_profile() {
        let readings = generator().generate("Flux Capacitor", 5).unwrap();
        assert_eq!(readings.unit(), "units");
        assert_eq!(readings.fault_threshold(), 90.0);
    }

    #[test]
    fn test_single_point_series() {
        let readings = generator().generate("Load Sensor", 1).unwrap();
        assert_eq!(readings.points.len(), 1);
        assert_eq!(readings.current_value, round_one_decimal(readings.points[0].value));
    }

    #[test]
    fn test_operating_info() {
        let info = generator().operating_info();
        assert_eq!(info.operating_hours, "876h 45m");
        assert_eq!(info.last_updated, "15/03/2024, 14:30:00");
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(37.54), 37.5);
        assert_eq!(round_one_decimal(37.56), 37.6);
        assert_eq!(round_one_decimal(0.25), 0.3);
        assert_eq!(round_one_decimal(37.75), 37.8);
        assert_eq!(round_one_decimal(0.85), 0.8);
        assert_eq!(round_one_decimal(0.95), 0.9);
        assert_eq!(round_one_decimal(1.15), 1.1);
        assert_eq!(round_one_decimal(0.0), 0.0);
    }

    #[test]
    fn test_rounding_below_warning_keeps_status_normal() {
        // newest IR flame point is 0.4 + 0.45, stored just below 0.85
        for name in ["ir flame sensor", "IR FLAME SENSOR"] {
            let readings = generate(name, 24, test_clock().now(), "%H:%M").unwrap();
            assert_eq!(readings.points.last().unwrap().value, 0.85);
            assert_eq!(readings.current_value, 0.8);
            assert_eq!(readings.status, Status::Normal);
        }
    }

    proptest! {
        #[test]
        fn prop_generation_is_deterministic(name in "[A-Za-z0-9 -]{0,24}", n in 1usize..200) {
            let generator = generator();
            let first = generator.generate(&name, n).unwrap();
            let second = generator.generate(&name, n).unwrap();
            prop_assert_eq!(first.values(), second.values());
            prop_assert_eq!(first.status, second.status);
        }

        #[test]
        fn prop_length_and_non_negative(name in "[A-Za-z &-]{1,32}", n in 1usize..300) {
            let readings = generator().generate(&name, n).unwrap();
            prop_assert_eq!(readings.points.len(), n);
            prop_assert!(readings.points.iter().all(|p| p.value >= 0.0));
        }

        #[test]
        fn prop_pseudo_random_in_unit_interval(seed in 0u64..5_000, i in 0usize..100) {
            let pr = pseudo_random(seed, i);
            prop_assert!((0.0..1.0).contains(&pr));
        }

        #[test]
        fn prop_status_matches_current_value(n in 1usize..50, idx in 0usize..17) {
            let recognised = SensorType::RECOGNISED;
            let sensor = &recognised[idx];
            let readings = generator().generate(sensor.canonical_name(), n).unwrap();
            prop_assert_eq!(readings.status, classify(readings.current_value, &readings.profile));
        }
    }
}
