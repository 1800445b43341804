//! In-process backends
//!
//! Implementations of the store traits that keep everything in memory,
//! mirroring the observable behavior of PostgreSQL, Redis and RabbitMQ
//! closely enough to drive the HTTP API without external services.

mod cache;
mod entry;
mod queue;
mod users;


pub use cache::MemoryCache;
pub use entry::CacheEntry;
pub use queue::MemoryQueue;
pub use users::MemoryUserStore;
