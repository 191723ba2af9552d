// Presentation layer - Command handlers producing dashboard payloads
pub mod app_state;
pub mod handlers;
