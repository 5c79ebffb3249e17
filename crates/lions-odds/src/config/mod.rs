use crate::estimator::{FactorTableError, FactorTables, ModelConfig, BASE_RATE};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub model: ModelSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let factor_tables = env::var("APP_FACTOR_TABLES")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let base_rate = match env::var("APP_BASE_RATE") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidBaseRate(raw))?,
            Err(_) => BASE_RATE,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            model: ModelSettings {
                factor_tables,
                base_rate,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the estimator's multipliers come from.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    /// Optional CSV of multiplier overrides applied over the built-in tables.
    pub factor_tables: Option<PathBuf>,
    pub base_rate: f64,
}

impl ModelSettings {
    pub fn build(&self) -> Result<ModelConfig, ConfigError> {
        let tables = match &self.factor_tables {
            Some(path) => FactorTables::from_path(path).map_err(|source| {
                ConfigError::FactorTables {
                    path: path.clone(),
                    source,
                }
            })?,
            None => FactorTables::default(),
        };

        ModelConfig::new(self.base_rate, tables).map_err(|source| ConfigError::Model { source })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidBaseRate(String),
    FactorTables {
        path: PathBuf,
        source: FactorTableError,
    },
    Model {
        source: FactorTableError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidBaseRate(raw) => {
                write!(f, "APP_BASE_RATE must be a number, found '{raw}'")
            }
            ConfigError::FactorTables { path, source } => {
                write!(
                    f,
                    "factor tables at {} could not be loaded: {}",
                    path.display(),
                    source
                )
            }
            ConfigError::Model { source } => write!(f, "invalid model: {source}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidBaseRate(_) => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::FactorTables { source, .. } | ConfigError::Model { source } => {
                Some(source)
            }
        }
    }
}
