use std::net::SocketAddr;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000"); falls back to the Leptos
    /// `site-addr` when unset
    pub listen: Option<String>,

    /// Unix socket path; takes precedence over `listen` when set
    pub socket: Option<String>,

    /// OpenTelemetry configuration
    #[serde(default)]
    pub otel: OtelConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtelConfig {
    /// OTLP endpoint (if None, uses OTEL_EXPORTER_OTLP_ENDPOINT env var)
    pub endpoint: Option<String>,

    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            environment: default_environment(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - PORTFOLIO_LISTEN
    /// - PORTFOLIO_SOCKET
    /// - PORTFOLIO_OTEL_ENDPOINT
    /// - PORTFOLIO_OTEL_ENVIRONMENT
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            .merge(Env::prefixed("PORTFOLIO_").split("_"))
            .extract()
    }

    /// The TCP address to bind: `listen` when set, otherwise `site_addr`.
    pub fn listen_addr(&self, site_addr: SocketAddr) -> Result<SocketAddr, AppError> {
        let Some(listen) = &self.listen else {
            return Ok(site_addr);
        };
        listen.parse().map_err(|source| AppError::InvalidListen {
            addr: listen.clone(),
            source,
        })
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Serialize)]
struct ConfigDefaults {
    otel: OtelConfig,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            otel: OtelConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn site_addr() -> SocketAddr {
        "127.0.0.1:3000".parse().unwrap()
    }

    #[test]
    fn test_default_config() {
        Jail::expect_with(|_jail| {
            let config = Config::load()?;
            assert!(config.listen.is_none());
            assert!(config.socket.is_none());
            assert!(config.otel.endpoint.is_none());
            assert_eq!(config.otel.environment, "development");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("PORTFOLIO_LISTEN", "0.0.0.0:8080");
            jail.set_env("PORTFOLIO_SOCKET", "/run/portfolio.sock");
            jail.set_env("PORTFOLIO_OTEL_ENDPOINT", "http://collector:4318");
            jail.set_env("PORTFOLIO_OTEL_ENVIRONMENT", "production");

            let config = Config::load()?;
            assert_eq!(config.listen.as_deref(), Some("0.0.0.0:8080"));
            assert_eq!(config.socket.as_deref(), Some("/run/portfolio.sock"));
            assert_eq!(
                config.otel.endpoint.as_deref(),
                Some("http://collector:4318")
            );
            assert_eq!(config.otel.environment, "production");
            Ok(())
        });
    }

    #[test]
    fn test_listen_addr_falls_back_to_site_addr() {
        Jail::expect_with(|_jail| {
            let config = Config::load()?;
            let fallback: SocketAddr = "0.0.0.0:8080".parse().unwrap();
            assert_eq!(config.listen_addr(fallback).unwrap(), fallback);
            Ok(())
        });
    }

    #[test]
    fn test_listen_overrides_site_addr() {
        Jail::expect_with(|jail| {
            jail.set_env("PORTFOLIO_LISTEN", "0.0.0.0:9090");

            let config = Config::load()?;
            let addr = config.listen_addr(site_addr()).unwrap();
            assert_eq!(addr.port(), 9090);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_listen_addr() {
        Jail::expect_with(|jail| {
            jail.set_env("PORTFOLIO_LISTEN", "not-an-address");

            let config = Config::load()?;
            let err = config.listen_addr(site_addr()).unwrap_err();
            assert!(
                matches!(err, AppError::InvalidListen { ref addr, .. } if addr == "not-an-address")
            );
            Ok(())
        });
    }
}
