use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("config.missing: {0}")]
    Missing(&'static str),
    #[error("config.invalid: {name}={value}")]
    Invalid { name: &'static str, value: String },
}
