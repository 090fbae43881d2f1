//! Cart service configuration loaded from environment variables.
//!
//! - `CART_API_URL` - storefront API serving `/stock/{id}` and `/products/{id}` (default: `http://localhost:3333`)
//! - `CART_API_TIMEOUT_MS` - request timeout for the storefront API (default: 5000)
//! - `CART_STORAGE_DIR` - directory holding the cart slot files (default: `.cart`)
//! - `CART_STORAGE_KEY` - slot key the cart is persisted under (default: `cart`)
//! - `CART_BIND_ADDR` - listen address (default: `0.0.0.0:8080`)

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::modules::cart::application::cart_store::DEFAULT_CART_KEY;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid environment variable {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub api_timeout: Duration,
    pub storage_dir: PathBuf,
    pub storage_key: String,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; unset and blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_url = get("CART_API_URL").unwrap_or_else(|| "http://localhost:3333".to_string());
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                name: "CART_API_URL",
                value: api_url,
            });
        }

        let api_timeout = match get("CART_API_TIMEOUT_MS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "CART_API_TIMEOUT_MS",
                        value: raw,
                    });
                }
            },
            None => Duration::from_millis(5000),
        };

        let storage_key = get("CART_STORAGE_KEY").unwrap_or_else(|| DEFAULT_CART_KEY.to_string());
        if storage_key.contains(['/', '\\']) || storage_key.contains("..") {
            return Err(ConfigError::Invalid {
                name: "CART_STORAGE_KEY",
                value: storage_key,
            });
        }

        let bind_addr = match get("CART_BIND_ADDR") {
            Some(raw) => raw.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
                name: "CART_BIND_ADDR",
                value: raw.clone(),
            })?,
            None => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };

        Ok(Self {
            api_url,
            api_timeout,
            storage_dir: get("CART_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".cart")),
            storage_key,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod cart_config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_url, "http://localhost:3333");
        assert_eq!(config.api_timeout, Duration::from_millis(5000));
        assert_eq!(config.storage_dir, PathBuf::from(".cart"));
        assert_eq!(config.storage_key, "cart");
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("CART_API_URL", "https://api.shop.example"),
            ("CART_API_TIMEOUT_MS", "250"),
            ("CART_STORAGE_DIR", "/var/lib/cart"),
            ("CART_STORAGE_KEY", "guest"),
            ("CART_BIND_ADDR", "127.0.0.1:9000"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://api.shop.example");
        assert_eq!(config.api_timeout, Duration::from_millis(250));
        assert_eq!(config.storage_dir, PathBuf::from("/var/lib/cart"));
        assert_eq!(config.storage_key, "guest");
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    }

    #[rstest]
    fn it_should_treat_blank_values_as_unset() {
        let config = AppConfig::from_lookup(lookup(&[("CART_STORAGE_KEY", "  ")])).unwrap();
        assert_eq!(config.storage_key, "cart");
    }

    #[rstest]
    #[case("CART_API_URL", "localhost:3333")]
    #[case("CART_API_TIMEOUT_MS", "soon")]
    #[case("CART_API_TIMEOUT_MS", "0")]
    #[case("CART_STORAGE_KEY", "../etc")]
    #[case("CART_BIND_ADDR", "not-an-addr")]
    fn it_should_reject_invalid_values(#[case] name: &'static str, #[case] value: &str) {
        let result = AppConfig::from_lookup(lookup(&[(name, value)]));
        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                name,
                value: value.to_string()
            })
        );
    }
}
