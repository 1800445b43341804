//! Configuration Module
//!
//! Loads gateway and backend connection settings from environment variables.

use std::env;
use std::str::FromStr;

/// Default TTL in seconds for cache entries set without an explicit TTL.
pub const DEFAULT_CACHE_TTL: u64 = 3600;

/// Name of the durable queue used for notifications and user messages.
pub const DEFAULT_QUEUE_NAME: &str = "demo_queue";

/// Gateway configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port
    pub server_port: u16,
    /// Default TTL in seconds applied by the cache-set endpoint
    pub cache_default_ttl: u64,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub rabbitmq: RabbitConfig,
}

/// PostgreSQL connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

/// Redis connection settings.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
}

/// RabbitMQ connection settings.
#[derive(Debug, Clone)]
pub struct RabbitConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub queue_name: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// A `.env` file in the working directory is read first when present.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP listen port (default: 8080)
    /// - `CACHE_DEFAULT_TTL` - Default cache TTL in seconds (default: 3600)
    /// - `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`, `DB_PASSWORD`, `DB_MAX_CONNECTIONS`
    /// - `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`
    /// - `RABBITMQ_HOST`, `RABBITMQ_PORT`, `RABBITMQ_USER`, `RABBITMQ_PASSWORD`, `QUEUE_NAME`
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            server_port: parsed("PORT", 8080),
            cache_default_ttl: parsed("CACHE_DEFAULT_TTL", DEFAULT_CACHE_TTL),
            database: DatabaseConfig {
                host: text("DB_HOST", "localhost"),
                port: parsed("DB_PORT", 5432),
                name: text("DB_NAME", "postgres"),
                user: text("DB_USER", "postgres"),
                password: text("DB_PASSWORD", ""),
                max_connections: parsed("DB_MAX_CONNECTIONS", 10),
            },
            redis: RedisConfig {
                host: text("REDIS_HOST", "localhost"),
                port: parsed("REDIS_PORT", 6379),
                password: env::var("REDIS_PASSWORD").ok().filter(|p| !p.is_empty()),
            },
            rabbitmq: RabbitConfig {
                host: text("RABBITMQ_HOST", "localhost"),
                port: parsed("RABBITMQ_PORT", 5672),
                user: text("RABBITMQ_USER", "guest"),
                password: text("RABBITMQ_PASSWORD", "guest"),
                queue_name: text("QUEUE_NAME", DEFAULT_QUEUE_NAME),
            },
        }
    }
}

impl RedisConfig {
    /// Builds a `redis://` URL, embedding the password when one is configured.
    pub fn connection_url(&self) -> String {
        match &self.password {
            Some(password) => format!(
                "redis://:{}@{}:{}",
                urlencoding::encode(password),
                self.host,
                self.port
            ),
            None => format!("redis://{}:{}", self.host, self.port),
        }
    }
}

impl RabbitConfig {
    /// Builds an `amqp://` URL targeting the default virtual host.
    pub fn connection_url(&self) -> String {
        format!(
            "amqp://{}:{}@{}:{}/%2f",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.host,
            self.port
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            cache_default_ttl: DEFAULT_CACHE_TTL,
            database: DatabaseConfig {
                host: "localhost".to_string(),
                port: 5432,
                name: "postgres".to_string(),
                user: "postgres".to_string(),
                password: String::new(),
                max_connections: 10,
            },
            redis: RedisConfig {
                host: "localhost".to_string(),
                port: 6379,
                password: None,
            },
            rabbitmq: RabbitConfig {
                host: "localhost".to_string(),
                port: 5672,
                user: "guest".to_string(),
                password: "guest".to_string(),
                queue_name: DEFAULT_QUEUE_NAME.to_string(),
            },
        }
    }
}

fn text(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
