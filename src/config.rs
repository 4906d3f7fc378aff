use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use tracing::Level;

use crate::error::{HrmError, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub products_file: PathBuf,
    pub services_file: Option<PathBuf>,

    // Logging
    pub log_dir: PathBuf,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .parse::<Level>()
            .map_err(|e| HrmError::Config(format!("LOG_LEVEL: {}", e)))?;

        Ok(Self {
            products_file: lookup("PRODUCTS_FILE")
                .unwrap_or_else(|| "products.ran".to_string()) // file the demo expects to be missing
                .into(),
            services_file: lookup("SERVICES_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),

            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()).into(),
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.products_file, PathBuf::from("products.ran"));
        assert!(config.services_file.is_none());
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PRODUCTS_FILE", "inventory/products.txt"),
            ("SERVICES_FILE", "services.json"),
            ("LOG_DIR", "/tmp/hrm"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.products_file, PathBuf::from("inventory/products.txt"));
        assert_eq!(config.services_file, Some(PathBuf::from("services.json")));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/hrm"));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn blank_services_file_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("SERVICES_FILE", "  ")])).unwrap();
        assert!(config.services_file.is_none());
    }

    #[test]
    fn bad_log_level_is_a_config_error() {
        let err = Config::from_lookup(lookup_from(&[("LOG_LEVEL", "chatty")])).unwrap_err();

        assert!(matches!(err, HrmError::Config(_)));
        assert!(err.to_string().contains("LOG_LEVEL"));
    }
}
