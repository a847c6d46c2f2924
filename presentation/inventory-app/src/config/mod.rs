pub mod app_config;
pub mod database_config;
pub mod error;
pub mod report_config;
pub mod session_config;
pub mod sheets_config;
