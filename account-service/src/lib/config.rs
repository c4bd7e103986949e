use std::env;

use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_environment")]
    pub environment: String,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub token: TokenConfig,
    pub kafka: KafkaConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    pub symmetric_key: String,
    pub access_token_minutes: i64,
    pub refresh_token_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct KafkaConfig {
    pub brokers: String,
    pub topic: String,
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, TOKEN__SYMMETRIC_KEY, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl TokenConfig {
    pub fn access_token_duration(&self) -> Duration {
        Duration::minutes(self.access_token_minutes)
    }

    pub fn refresh_token_duration(&self) -> Duration {
        Duration::hours(self.refresh_token_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_durations() {
        let token = TokenConfig {
            symmetric_key: "k".repeat(32),
            access_token_minutes: 15,
            refresh_token_hours: 24,
        };

        assert_eq!(token.access_token_duration(), Duration::seconds(15 * 60));
        assert_eq!(token.refresh_token_duration(), Duration::seconds(24 * 60 * 60));
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let configuration = ConfigBuilder::builder()
            .set_override("database.url", "postgres://localhost/accounts")
            .unwrap()
            .set_override("server.http_port", 8080)
            .unwrap()
            .set_override("token.symmetric_key", "k".repeat(32))
            .unwrap()
            .set_override("token.access_token_minutes", 15)
            .unwrap()
            .set_override("token.refresh_token_hours", 24)
            .unwrap()
            .set_override("kafka.brokers", "localhost:9092")
            .unwrap()
            .set_override("kafka.topic", "account-notifications")
            .unwrap()
            .build()
            .unwrap();

        let config: Config = configuration.try_deserialize().unwrap();
        assert!(config.is_development());
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.server.http_port, 8080);
    }
}
