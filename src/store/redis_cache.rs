//! Redis-backed cache store.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tracing::{info, warn};

use super::{CacheStore, StoreResult};
use crate::config::RedisConfig;

/// Cache store over a Redis `ConnectionManager`.
///
/// The manager multiplexes one connection and is cloned per call.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    pub async fn connect(config: &RedisConfig) -> StoreResult<Self> {
        let client = Client::open(config.connection_url())?;
        let conn = ConnectionManager::new(client).await?;
        info!(host = %config.host, port = config.port, "Redis connected");

        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl_secs).await?;
        Ok(())
    }

    async fn close(&self) {
        let mut conn = self.conn.clone();
        match redis::cmd("QUIT").query_async::<()>(&mut conn).await {
            Ok(()) => info!("Redis connection closed"),
            Err(e) => warn!("Redis QUIT failed: {}", e),
        }
    }
}
