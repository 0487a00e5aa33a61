use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::{ResolverConfig, MAX_DATAGRAM_SIZE, MAX_RESPONSE_TIMEOUT_SECS};
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "fatcat-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/fatcat-dns/config.toml";

/// Main configuration structure for Fatcat DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Session front-end configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream resolution configuration
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Answer cache seeds
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. fatcat-dns.toml in current directory
    /// 3. /etc/fatcat-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(listen) = overrides.listen {
            self.server.listen = Some(listen);
        }
        if let Some(resolver) = overrides.default_resolver {
            self.resolver.default_resolver = resolver;
        }
        if let Some(port) = overrides.service_port {
            self.resolver.service_port = port;
        }
        if let Some(timeout) = overrides.response_timeout_secs {
            self.resolver.response_timeout_secs = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.service_port == 0 {
            return Err(ConfigError::Validation(
                "Resolver service port cannot be 0".to_string(),
            ));
        }

        let timeout = self.resolver.response_timeout_secs;
        if timeout == 0 || timeout > MAX_RESPONSE_TIMEOUT_SECS {
            return Err(ConfigError::Validation(format!(
                "Response timeout {}s outside 1-{}s",
                timeout, MAX_RESPONSE_TIMEOUT_SECS
            )));
        }

        let space = self.resolver.transaction_id_space;
        if space == 0 || space > u16::MAX as u32 + 1 {
            return Err(ConfigError::Validation(format!(
                "Transaction id space {} outside 1-65536",
                space
            )));
        }

        let datagram = self.resolver.max_datagram_size;
        if !(3..=MAX_DATAGRAM_SIZE).contains(&datagram) {
            return Err(ConfigError::Validation(format!(
                "Datagram buffer size {} outside 3-{}",
                datagram, MAX_DATAGRAM_SIZE
            )));
        }

        for seed in &self.cache.seeds {
            seed.parse().map_err(|reason| ConfigError::InvalidSeed {
                domain: seed.domain.clone(),
                reason,
            })?;
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub listen: Option<String>,
    pub default_resolver: Option<std::net::Ipv4Addr>,
    pub service_port: Option<u16>,
    pub response_timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}
