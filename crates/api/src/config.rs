// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Server configuration module
//!
//! This module provides configuration structures and loading logic for the
//! NFT gateway, supporting different environments and validation of
//! configuration parameters. Upstream credentials honor the historical bare
//! `API_KEY` and `REFERER` environment variables as final overrides.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use anyhow::{Result, anyhow, ensure};
use config::{Config, ConfigError, Environment as ConfigEnv, File};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::{ServerError, ServerResult};

const DEFAULT_API_KEY: &str = "11111111-1111-1111-1111-111111111111";
const DEFAULT_REFERER: &str = "https://docs.rarible.org";
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.rarible.org/v0.1";

/// A validated server port that ensures the value is appropriate for the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServerPort {
    port: u16,
    environment: Environment,
}

impl ServerPort {
    /// Create a new `ServerPort`, ensuring it's valid for the given environment
    ///
    /// # Errors
    ///
    /// Returns an error if the port is 0 in non-testing environments
    pub fn new(port: u16, environment: Environment) -> Result<Self> {
        if port == 0 && environment != Environment::Testing {
            return Err(anyhow!("port cannot be 0 in non-testing environments"));
        }
        Ok(Self { port, environment })
    }

    /// The gateway's historical default listener port
    pub const fn default_development() -> Self {
        Self {
            port: 8080,
            environment: Environment::Development,
        }
    }

    /// Create a safe testing port (port 0, the OS picks)
    pub const fn testing() -> Self {
        Self {
            port: 0,
            environment: Environment::Testing,
        }
    }

    /// Get the port value
    pub fn value(&self) -> u16 {
        self.port
    }
}

impl<'de> Deserialize<'de> for ServerPort {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let port = u16::deserialize(deserializer)?;
        // We'll validate this during configuration loading when we know the environment
        Ok(Self {
            port,
            environment: Environment::Development, // temporary, will be fixed during load
        })
    }
}

/// A validated timeout duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeoutSeconds(Duration);

impl TimeoutSeconds {
    /// Create a new `TimeoutSeconds`, ensuring the value is within valid bounds
    ///
    /// # Errors
    ///
    /// Returns an error if timeout is 0 or greater than 300 seconds
    pub fn new(seconds: u64) -> Result<Self> {
        ensure!(seconds != 0, "timeout must be greater than 0");
        ensure!(seconds <= 300, "timeout cannot exceed 300");
        Ok(Self(Duration::from_secs(seconds)))
    }

    /// Create a safe default timeout (30 seconds)
    pub const fn default_value() -> Self {
        Self(Duration::from_secs(30))
    }

    /// Create a safe testing timeout (5 seconds)
    pub const fn testing() -> Self {
        Self(Duration::from_secs(5))
    }

    /// Default bound on a single outbound upstream request (10 seconds)
    pub const fn default_upstream() -> Self {
        Self(Duration::from_secs(10))
    }

    /// Get the timeout value
    pub fn value(&self) -> Duration {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeoutSeconds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = u64::deserialize(deserializer)?;
        Self::new(seconds).map_err(|e| de::Error::custom(e.to_string()))
    }
}

impl Default for TimeoutSeconds {
    fn default() -> Self {
        Self::default_value()
    }
}

/// Environment types for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production environment
    Production,
    /// Development environment
    Development,
    /// Testing environment
    Testing,
}

/// Upstream Rarible API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the upstream REST API
    pub base_url: String,
    /// API key sent as the `X-API-KEY` header
    pub api_key: String,
    /// Value sent as the `Referer` header
    pub referer: String,
    /// Per-request timeout for outbound calls
    pub timeout_seconds: TimeoutSeconds,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            timeout_seconds: TimeoutSeconds::default_upstream(),
        }
    }
}

/// Server configuration for different environments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: IpAddr,
    /// Server port (validated for environment compatibility)
    pub port: ServerPort,
    /// Inbound request timeout in seconds (validated range: 1-300)
    pub timeout_seconds: TimeoutSeconds,
    /// Environment type
    pub environment: Environment,
    /// Upstream API settings
    pub upstream: UpstreamConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: ServerPort::default_development(),
            timeout_seconds: TimeoutSeconds::default(),
            environment: Environment::Development,
            upstream: UpstreamConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create configuration from environment variables and optional configuration files
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` if configuration is invalid or cannot be loaded.
    pub fn from_env() -> ServerResult<Self> {
        Self::load().map_err(|e| ServerError::Config {
            message: format!("failed to load configuration: {e}"),
        })
    }

    /// Load configuration using the config crate with hierarchical sources
    ///
    /// Configuration is loaded in the following order (later sources override
    /// earlier ones):
    /// 1. Default values
    /// 2. Configuration file (config.json)
    /// 3. Environment-specific files (config.{env}.json)
    /// 4. Environment variables with SERVER_ prefix; key names keep their
    ///    single underscores (`SERVER_TIMEOUT_SECONDS`) and nested keys use a
    ///    double underscore (`SERVER_UPSTREAM__API_KEY`)
    /// 5. Bare `API_KEY` / `REFERER` variables for the upstream credentials
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let env_var = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let mut config_builder = Config::builder()
            // Start with default values
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("timeout_seconds", 30)?
            .set_default("environment", "development")?
            .set_default("upstream.base_url", DEFAULT_UPSTREAM_BASE_URL)?
            .set_default("upstream.api_key", DEFAULT_API_KEY)?
            .set_default("upstream.referer", DEFAULT_REFERER)?
            .set_default("upstream.timeout_seconds", 10)?
            // Add optional configuration files
            .add_source(File::with_name("config.json").required(false))
            // Add environment-specific config file
            .add_source(
                File::with_name(&format!("config.{}.json", env_var.to_lowercase())).required(false),
            )
            // Add environment variables with SERVER_ prefix
            .add_source(Self::server_env_source());

        if std::env::var("ENVIRONMENT").is_ok() {
            config_builder = config_builder.set_override("environment", env_var.to_lowercase())?;
        }

        // The original deployment configured credentials through bare
        // variables; they win over every other source.
        if let Ok(api_key) = std::env::var("API_KEY") {
            config_builder = config_builder.set_override("upstream.api_key", api_key)?;
        }
        if let Ok(referer) = std::env::var("REFERER") {
            config_builder = config_builder.set_override("upstream.referer", referer)?;
        }

        let config = config_builder.build()?;
        let mut server_config: Self = config.try_deserialize()?;

        // Fix the ServerPort to have the correct environment context
        server_config.port = ServerPort::new(server_config.port.value(), server_config.environment)
            .map_err(|e| ConfigError::Message(format!("invalid port configuration: {e}")))?;

        Ok(server_config)
    }

    /// Environment source for `SERVER_`-prefixed overrides
    ///
    /// The nesting separator must differ from the plain underscore, otherwise
    /// a key like `SERVER_TIMEOUT_SECONDS` would split into the nested path
    /// `timeout.seconds` and never match anything.
    fn server_env_source() -> ConfigEnv {
        ConfigEnv::with_prefix("SERVER")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Create configuration optimized for testing
    pub fn for_testing() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: ServerPort::testing(), // let OS choose available port
            timeout_seconds: TimeoutSeconds::testing(),
            environment: Environment::Testing,
            upstream: UpstreamConfig::default(),
        }
    }

    /// Get socket address for binding
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port.value())
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Development => write!(f, "development"),
            Environment::Testing => write!(f, "testing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_validation() {
        // Invalid timeout values should fail to construct
        assert!(TimeoutSeconds::new(0).is_err());
        assert!(TimeoutSeconds::new(400).is_err());

        // Valid timeout values should construct successfully
        assert!(TimeoutSeconds::new(30).is_ok());
        assert!(TimeoutSeconds::new(1).is_ok());
        assert!(TimeoutSeconds::new(300).is_ok());
    }

    #[test]
    fn server_port_validation() {
        // Port 0 should only be valid in testing environment
        assert!(ServerPort::new(0, Environment::Testing).is_ok());
        assert!(ServerPort::new(0, Environment::Development).is_err());
        assert!(ServerPort::new(0, Environment::Production).is_err());

        // Non-zero ports should be valid in all environments
        assert!(ServerPort::new(8080, Environment::Development).is_ok());
        assert!(ServerPort::new(443, Environment::Production).is_ok());
    }

    #[test]
    fn default_port_is_8080() {
        assert_eq!(ServerPort::default_development().value(), 8080);
    }

    #[test]
    fn upstream_defaults_match_documented_values() {
        let upstream = UpstreamConfig::default();
        assert_eq!(upstream.api_key, "11111111-1111-1111-1111-111111111111");
        assert_eq!(upstream.referer, "https://docs.rarible.org");
        assert_eq!(upstream.base_url, "https://api.rarible.org/v0.1");
    }

    #[test]
    fn server_env_source_maps_underscored_and_nested_keys() {
        let mut vars = config::Map::new();
        vars.insert("SERVER_PORT".to_string(), "9090".to_string());
        vars.insert("SERVER_TIMEOUT_SECONDS".to_string(), "60".to_string());
        vars.insert(
            "SERVER_UPSTREAM__REFERER".to_string(),
            "https://example.com".to_string(),
        );

        let config = Config::builder()
            .add_source(ServerConfig::server_env_source().source(Some(vars)))
            .build()
            .expect("build config");

        assert_eq!(config.get_int("port").expect("port"), 9090);
        assert_eq!(
            config.get_int("timeout_seconds").expect("timeout_seconds"),
            60
        );
        assert_eq!(
            config.get_string("upstream.referer").expect("referer"),
            "https://example.com"
        );
    }

    #[test]
    fn environment_display() {
        assert_eq!(Environment::Production.to_string(), "production");
        assert_eq!(Environment::Development.to_string(), "development");
        assert_eq!(Environment::Testing.to_string(), "testing");
    }
}
