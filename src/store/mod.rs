//! Store Module
//!
//! Async traits the handlers call, one per external service, with the
//! production clients (PostgreSQL, Redis, RabbitMQ) and in-process
//! counterparts behind them.

pub mod memory;
mod postgres;
mod rabbitmq;
mod redis_cache;

#[cfg(test)]
pub(crate) mod mocks;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::BackendError;
use crate::models::{NewUser, QueueMessage, User};

pub use postgres::PostgresUserStore;
pub use rabbitmq::RabbitQueue;
pub use redis_cache::RedisCache;

/// Convenience Result type for backend calls.
pub type StoreResult<T> = std::result::Result<T, BackendError>;

/// Relational store holding user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users ordered by id.
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Inserts a user and returns the stored row with its assigned id.
    async fn create_user(&self, user: NewUser) -> StoreResult<User>;

    async fn count_users(&self) -> StoreResult<i64>;

    /// Releases pooled connections.
    async fn close(&self);
}

/// Key-value store with per-key expiry.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the value for `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous entry, expiring
    /// after `ttl_secs` seconds.
    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> StoreResult<()>;

    async fn close(&self);
}

/// Single named durable queue.
///
/// Has no `close`: the channel lives until the process exits.
#[async_trait]
pub trait MessageQueue: Send + Sync {
    async fn publish(&self, message: &QueueMessage) -> StoreResult<()>;

    /// Removes and acknowledges the oldest ready message, returning its JSON
    /// payload, or `None` when the queue is empty.
    async fn consume(&self) -> StoreResult<Option<Value>>;

    /// Number of messages ready for delivery.
    async fn depth(&self) -> StoreResult<u32>;
}
