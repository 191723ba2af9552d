// Application layer - Generation and aggregation use cases
pub mod clock;
pub mod dashboard_service;
pub mod predictive_service;
pub mod sensor_generator;
