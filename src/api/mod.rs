//! API Module
//!
//! HTTP handlers and routing for the gateway REST API.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET|POST /api/users` - List or create users (PostgreSQL)
//! - `GET /api/cache/:key`, `POST /api/cache` - Read or write cache entries (Redis)
//! - `POST /api/message`, `GET /api/messages/consume` - Produce or consume messages (RabbitMQ)
//! - `GET /api/stats` - User count and queue depth

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
