//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint. Every handler makes one
//! backend call (create-user makes two) and maps faults to a generic 500.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::config::{Config, DEFAULT_CACHE_TTL};
use crate::error::{ApiError, Result};
use crate::models::{
    ConsumeResponse, CreateUserRequest, GetCacheResponse, HealthResponse, QueueMessage,
    SendMessageRequest, SendMessageResponse, SetCacheRequest, SetCacheResponse, StatsResponse,
    User,
};
use crate::store::memory::{MemoryCache, MemoryQueue, MemoryUserStore};
use crate::store::{
    CacheStore, MessageQueue, PostgresUserStore, RabbitQueue, RedisCache, UserStore,
};

/// Application state shared across all handlers.
///
/// Holds the three long-lived backend handles, opened once at startup.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub cache: Arc<dyn CacheStore>,
    pub queue: Arc<dyn MessageQueue>,
    /// TTL in seconds used when a cache-set request omits one
    pub default_ttl: u64,
}

impl AppState {
    /// Creates a new AppState over the given backends.
    pub fn new(
        users: Arc<dyn UserStore>,
        cache: Arc<dyn CacheStore>,
        queue: Arc<dyn MessageQueue>,
    ) -> Self {
        Self {
            users,
            cache,
            queue,
            default_ttl: DEFAULT_CACHE_TTL,
        }
    }

    pub fn with_default_ttl(mut self, default_ttl: u64) -> Self {
        self.default_ttl = default_ttl;
        self
    }

    /// AppState backed entirely by in-process stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryCache::new()),
            Arc::new(MemoryQueue::new()),
        )
    }

    /// Connects to Redis, RabbitMQ and PostgreSQL, in that order.
    ///
    /// Fails on the first backend that cannot be reached.
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let cache = RedisCache::connect(&config.redis)
            .await
            .context("Failed to connect to Redis")?;

        let queue = RabbitQueue::connect(&config.rabbitmq)
            .await
            .context("Failed to connect to RabbitMQ")?;

        let users = PostgresUserStore::connect(&config.database)
            .await
            .context("Failed to connect to PostgreSQL")?;

        Ok(Self::new(Arc::new(users), Arc::new(cache), Arc::new(queue))
            .with_default_ttl(config.cache_default_ttl))
    }

    /// Closes the cache client, then the database pool.
    ///
    /// The queue channel is left open until the process exits.
    pub async fn close(&self) {
        self.cache.close().await;
        self.users.close().await;
    }
}

/// Handler for GET /health
///
/// Static liveness report; backends are not probed.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /api/users
pub async fn list_users_handler(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = state.users.list_users().await.map_err(ApiError::Database)?;
    Ok(Json(users))
}

/// Handler for POST /api/users
///
/// Inserts the user, then enqueues a `user_created` notification. If the
/// enqueue fails the row stays committed and the request still fails.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let user = state
        .users
        .create_user(req.into())
        .await
        .map_err(ApiError::CreateUser)?;

    if let Err(e) = state
        .queue
        .publish(&QueueMessage::user_created(user.clone()))
        .await
    {
        warn!(
            user_id = user.id,
            "User row committed but creation notification was not enqueued"
        );
        return Err(ApiError::CreateUser(e));
    }

    info!(user_id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Handler for GET /api/cache/:key
pub async fn get_cache_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetCacheResponse>> {
    let value = state.cache.get(&key).await.map_err(ApiError::Cache)?;
    Ok(Json(GetCacheResponse::new(key, value)))
}

/// Handler for POST /api/cache
pub async fn set_cache_handler(
    State(state): State<AppState>,
    Json(req): Json<SetCacheRequest>,
) -> Result<Json<SetCacheResponse>> {
    let ttl = req.ttl.unwrap_or(state.default_ttl);

    state
        .cache
        .set(&req.key, &req.value, ttl)
        .await
        .map_err(ApiError::Cache)?;

    Ok(Json(SetCacheResponse::new(req.key, req.value)))
}

/// Handler for POST /api/message
pub async fn send_message_handler(
    State(state): State<AppState>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>> {
    state
        .queue
        .publish(&QueueMessage::message(req.message))
        .await
        .map_err(ApiError::Queue)?;

    Ok(Json(SendMessageResponse::sent()))
}

/// Handler for GET /api/messages/consume
///
/// Takes at most one message; it is acknowledged before being returned.
pub async fn consume_message_handler(
    State(state): State<AppState>,
) -> Result<Json<ConsumeResponse>> {
    let message = state.queue.consume().await.map_err(ApiError::Queue)?;
    Ok(Json(ConsumeResponse::new(message)))
}

/// Handler for GET /api/stats
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let users = state.users.count_users().await.map_err(ApiError::Stats)?;
    let queue_messages = state.queue.depth().await.map_err(ApiError::Stats)?;

    Ok(Json(StatsResponse::new(users, queue_messages)))
}
