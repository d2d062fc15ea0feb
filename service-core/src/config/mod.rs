use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    6060
}

impl Config {
    /// Load the base settings from `configuration.*`, `APP__*` variables and a
    /// bare `PORT` variable, in increasing order of precedence.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::build(std::env::var("PORT").ok())
    }

    fn build(port: Option<String>) -> Result<Self, AppError> {
        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", port)?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        let config = Config::build(None).unwrap();
        assert_eq!(config.port, 6060);
    }

    #[test]
    fn port_variable_overrides_default() {
        let config = Config::build(Some("8181".to_string())).unwrap();
        assert_eq!(config.port, 8181);
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        let err = Config::build(Some("not-a-port".to_string())).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
