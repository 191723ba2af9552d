// Infrastructure layer - Configuration and output adapters
pub mod config;
pub mod json_mapper;
