//! Deterministic synthetic sensor telemetry and predictive-health data for
//! the leak-monitoring dashboard.
//!
//! Every series is a pure function of the sensor-type name and point count;
//! the clock only labels timestamps.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::clock::{Clock, FixedClock, SystemClock};
pub use application::predictive_service::{aggregate, PREDICTIVE_SEED};
pub use application::sensor_generator::{generate, SensorGenerator, DEFAULT_POINT_COUNT};
pub use domain::error::{GeneratorError, GeneratorResult};
pub use domain::sensor::{classify, lookup_profile, SensorProfile, SensorType, Status};
