use std::{env, net::IpAddr, str::FromStr};

use dotenvy::dotenv;
use log::{debug, info, warn};

use crate::errors::ConfigError;

// Server-specific configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub workers: usize,
}

// Application-specific configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub environment: Environment,
    pub log_level: String,
}

// Environment enum for different deployment environments
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!(
                "Invalid environment: {}. Must be one of: development, testing, production",
                s
            )),
        }
    }
}

type ConfigResult<T> = Result<T, ConfigError>;

/// Key-value store settings
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
    /// Exit at startup instead of serving degraded when the store is unreachable
    pub required: bool,
    /// Upper bound on the startup connection attempt
    pub connect_timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub redis: RedisConfig,
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> ConfigResult<Self> {
        match dotenv() {
            Ok(_) => debug!(".env file loaded successfully"),
            Err(e) => warn!("Could not load .env file: {}", e),
        }

        let server = ServerConfig {
            host: get_env_or_default("SERVER_HOST", "0.0.0.0")?,
            port: get_env_or_default("SERVER_PORT", "3000")?,
            workers: get_env_or_default("SERVER_WORKERS", "4")?,
        };

        let version = option_env!("CARGO_PKG_VERSION")
            .unwrap_or("0.1.0")
            .to_string();

        let app = AppConfig {
            name: get_env_or_default("APP_NAME", "hexlink")?,
            version: env::var("APP_VERSION").unwrap_or(version),
            environment: get_env_or_default("APP_ENVIRONMENT", "development")?,
            log_level: get_env_or_default("RUST_LOG", "info")?,
        };

        let redis = RedisConfig {
            url: get_env_or_default("REDIS_URL", "redis://redis-service:6379")?,
            required: get_env_or_default("REDIS_REQUIRED", "false")?,
            connect_timeout_seconds: get_env_or_default("REDIS_CONNECT_TIMEOUT_SECONDS", "5")?,
        };

        let config = Config { server, app, redis };
        info!("Configuration loaded successfully");
        debug!("Loaded config: {:?}", config);

        Ok(config)
    }
}

/// Helper function to get an env variable with a default value
fn get_env_or_default<T: FromStr>(key: &str, default: &str) -> ConfigResult<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => parse_value(key, &val),
        Err(env::VarError::NotPresent) => {
            debug!("{} not set, using default: {}", key, default);
            default.parse::<T>().map_err(|e| {
                ConfigError::ParseError(format!("Could not parse default for {}: {}", key, e))
            })
        }
        Err(e) => Err(ConfigError::EnvVarError(e)),
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> ConfigResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| ConfigError::ParseError(format!("Could not parse {}: {}", key, e)))
}
