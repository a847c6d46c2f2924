use std::env;

use super::{
    database_config::DatabaseSettings, error::ConfigError, report_config::ReportConfig,
    session_config::SessionConfig, sheets_config::SheetsConfig,
};

pub struct AppConfig {
    pub database: DatabaseSettings,
    pub sheets: SheetsConfig,
    pub session: SessionConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            database: DatabaseSettings::from_lookup(&lookup),
            sheets: SheetsConfig::from_lookup(&lookup)?,
            session: SessionConfig::from_lookup(&lookup)?,
            report: ReportConfig::from_lookup(&lookup)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fail_without_login_credentials() {
        let result = AppConfig::from_lookup(|_| None);

        assert_eq!(
            result.err(),
            Some(ConfigError::Missing("INVENTORY_USERNAME"))
        );
    }

    #[test]
    fn should_apply_defaults_around_required_values() {
        let config = AppConfig::from_lookup(|key| {
            key.starts_with("INVENTORY_").then(|| "gudang".to_string())
        })
        .unwrap();

        assert_eq!(config.database.url, "sqlite://inventory.db");
        assert!(!config.sheets.is_enabled());
        assert_eq!(config.report.low_stock_threshold, 5);
    }
}
