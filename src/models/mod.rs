//! Domain records and request/response models for the gateway API
//!
//! This module defines the user record, the queue payload format, and the
//! DTOs used for serializing/deserializing HTTP request and response bodies.

pub mod message;
pub mod requests;
pub mod responses;
pub mod user;

// Re-export commonly used types
pub use message::{iso_timestamp, QueueMessage};
pub use requests::{CreateUserRequest, SendMessageRequest, SetCacheRequest};
pub use responses::{
    ConsumeResponse, ErrorResponse, GetCacheResponse, HealthResponse, SendMessageResponse,
    SetCacheResponse, StatsResponse,
};
pub use user::{NewUser, User};
