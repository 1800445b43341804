//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    consume_message_handler, create_user_handler, get_cache_handler, health_handler,
    list_users_handler, send_message_handler, set_cache_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /health` - Static liveness report
/// - `GET /api/users` - List users
/// - `POST /api/users` - Create a user and enqueue a notification
/// - `GET /api/cache/:key` - Read a cached value
/// - `POST /api/cache` - Write a cached value
/// - `POST /api/message` - Enqueue a message
/// - `GET /api/messages/consume` - Take one message off the queue
/// - `GET /api/stats` - User count and queue depth
///
/// # Middleware
/// - CORS: Allows any origin, method and header
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/cache", post(set_cache_handler))
        .route("/cache/:key", get(get_cache_handler))
        .route("/message", post(send_message_handler))
        .route("/messages/consume", get(consume_message_handler))
        .route("/stats", get(stats_handler));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BackendError;
    use crate::store::memory::{MemoryCache, MemoryQueue, MemoryUserStore};
    use crate::store::mocks::{MockCache, MockQueue, MockUsers};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn unavailable() -> BackendError {
        BackendError::Unavailable("connection refused".to_string())
    }

    async fn error_message(router: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        (status, json["error"].as_str().unwrap_or_default().to_string())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_request(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_ignores_failing_backends() {
        let state = AppState::new(
            Arc::new(MockUsers::new()),
            Arc::new(MockCache::new()),
            Arc::new(MockQueue::new()),
        );
        let app = create_router(state);

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_users_database_error() {
        let mut users = MockUsers::new();
        users.expect_list_users().returning(|| Err(unavailable()));
        let state = AppState::new(
            Arc::new(users),
            Arc::new(MemoryCache::new()),
            Arc::new(MemoryQueue::new()),
        );

        let (status, error) = error_message(create_router(state), get_request("/api/users")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error, "Database error");
    }

    #[tokio::test]
    async fn test_create_user_queue_error() {
        let mut queue = MockQueue::new();
        queue.expect_publish().returning(|_| Err(unavailable()));
        let state = AppState::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryCache::new()),
            Arc::new(queue),
        );

        let (status, error) = error_message(
            create_router(state),
            post_request("/api/users", r#"{"name":"a","email":"a@example.com"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error, "Failed to create user");
    }

    #[tokio::test]
    async fn test_set_cache_error() {
        let mut cache = MockCache::new();
        cache.expect_set().returning(|_, _, _| Err(unavailable()));
        let state = AppState::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(cache),
            Arc::new(MemoryQueue::new()),
        );

        let (status, error) = error_message(
            create_router(state),
            post_request("/api/cache", r#"{"key":"k","value":"v"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error, "Cache error");
    }

    #[tokio::test]
    async fn test_consume_queue_error() {
        let mut queue = MockQueue::new();
        queue.expect_consume().returning(|| Err(unavailable()));
        let state = AppState::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryCache::new()),
            Arc::new(queue),
        );

        let (status, error) =
            error_message(create_router(state), get_request("/api/messages/consume")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error, "Queue error");
    }

    #[tokio::test]
    async fn test_stats_database_error() {
        let mut users = MockUsers::new();
        users.expect_count_users().returning(|| Err(unavailable()));
        let state = AppState::new(
            Arc::new(users),
            Arc::new(MemoryCache::new()),
            Arc::new(MemoryQueue::new()),
        );

        let (status, error) = error_message(create_router(state), get_request("/api/stats")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error, "Failed to get stats");
    }

    #[tokio::test]
    async fn test_unknown_route_not_found() {
        let app = create_router(AppState::in_memory());
        let response = app.oneshot(get_request("/api/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
