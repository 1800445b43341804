//! Stack Gateway - A small HTTP gateway over PostgreSQL, Redis and RabbitMQ
//!
//! Each REST endpoint makes a pass-through call to one backend and returns
//! the result as JSON.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
