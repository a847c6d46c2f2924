use business::domain::product::report::DEFAULT_LOW_STOCK_THRESHOLD;

use super::error::ConfigError;

/// Report tuning
///
/// Environment variables:
/// - LOW_STOCK_THRESHOLD: products with fewer units are flagged (default: 5)
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub low_stock_threshold: u32,
}

impl ReportConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let low_stock_threshold = match lookup("LOW_STOCK_THRESHOLD") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| ConfigError::Invalid {
                name: "LOW_STOCK_THRESHOLD",
                value: raw.clone(),
            })?,
            None => DEFAULT_LOW_STOCK_THRESHOLD,
        };

        Ok(Self {
            low_stock_threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_threshold_to_five() {
        let config = ReportConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.low_stock_threshold, 5);
    }

    #[test]
    fn should_reject_negative_threshold() {
        let result = ReportConfig::from_lookup(|_| Some("-2".to_string()));

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::Invalid {
                name: "LOW_STOCK_THRESHOLD",
                ..
            }
        ));
    }
}
