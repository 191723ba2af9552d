// Domain layer - Sensor catalog, readings and predictive models
pub mod alert;
pub mod dashboard;
pub mod error;
pub mod industry;
pub mod predictive;
pub mod sensor;
pub mod telemetry;
