// Application state shared by command handlers
use crate::application::clock::Clock;
use crate::application::dashboard_service::DashboardService;
use crate::application::predictive_service::PredictiveService;
use crate::application::sensor_generator::SensorGenerator;
use crate::infrastructure::config::DashboardConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub generator: SensorGenerator,
    pub dashboard_service: DashboardService,
    pub predictive_service: PredictiveService,
    pub config: DashboardConfig,
}

impl AppState {
    pub fn new(config: DashboardConfig, clock: Arc<dyn Clock>) -> Self {
        let generator = SensorGenerator::new(clock.clone(), config.labels.clone());
        let dashboard_service = DashboardService::new(generator.clone(), config.default_points);
        let predictive_service =
            PredictiveService::new(clock, config.labels.clone(), config.components.clone());

        Self {
            generator,
            dashboard_service,
            predictive_service,
            config,
        }
    }
}
