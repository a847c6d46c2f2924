use business::domain::session::model::Credentials;

use super::error::ConfigError;

/// Login gate settings
///
/// Environment variables:
/// - INVENTORY_USERNAME / INVENTORY_PASSWORD: credentials the gate accepts (required)
/// - INVENTORY_LOGIN_USERNAME / INVENTORY_LOGIN_PASSWORD: credentials this host submits (required)
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub expected: Credentials,
    pub submitted: Credentials,
}

impl SessionConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        Ok(Self {
            expected: Credentials::new(
                required("INVENTORY_USERNAME")?,
                required("INVENTORY_PASSWORD")?,
            ),
            submitted: Credentials::new(
                required("INVENTORY_LOGIN_USERNAME")?,
                required("INVENTORY_LOGIN_PASSWORD")?,
            ),
        })
    }
}
