//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use super::iso_timestamp;

/// Response body for GET /api/cache/:key
#[derive(Debug, Clone, Serialize)]
pub struct GetCacheResponse {
    pub key: String,
    /// `null` when the key is absent or expired
    pub value: Option<String>,
}

impl GetCacheResponse {
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for POST /api/cache
#[derive(Debug, Clone, Serialize)]
pub struct SetCacheResponse {
    pub success: bool,
    pub key: String,
    pub value: String,
}

impl SetCacheResponse {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            success: true,
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for POST /api/message
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageResponse {
    pub success: bool,
    pub message: String,
}

impl SendMessageResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: "Message sent to queue".to_string(),
        }
    }
}

/// Response body for GET /api/messages/consume
#[derive(Debug, Clone, Serialize)]
pub struct ConsumeResponse {
    pub success: bool,
    /// The consumed payload, or `null` when the queue was empty
    pub message: Option<Value>,
}

impl ConsumeResponse {
    pub fn new(message: Option<Value>) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

/// Response body for GET /api/stats
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Number of rows in the users table
    pub users: i64,
    /// Messages currently ready in the queue
    pub queue_messages: u32,
    pub timestamp: String,
}

impl StatsResponse {
    pub fn new(users: i64, queue_messages: u32) -> Self {
        Self {
            users,
            queue_messages,
            timestamp: iso_timestamp(),
        }
    }
}

/// Backend connectivity as reported by the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub postgres: String,
    pub redis: String,
    pub rabbitmq: String,
}

/// Response body for the health endpoint (GET /health)
///
/// The service map is static: backends are not probed.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (always "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    pub services: ServiceStatus,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: iso_timestamp(),
            services: ServiceStatus {
                postgres: "connected".to_string(),
                redis: "connected".to_string(),
                rabbitmq: "connected".to_string(),
            },
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_cache_response_absent_value_is_null() {
        let resp = GetCacheResponse::new("missing", None);
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value, json!({"key": "missing", "value": null}));
    }

    #[test]
    fn test_set_cache_response_serialize() {
        let resp = SetCacheResponse::new("my_key", "my_value");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "key": "my_key", "value": "my_value"})
        );
    }

    #[test]
    fn test_stats_response_uses_camel_case() {
        let resp = StatsResponse::new(3, 5);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"queueMessages\":5"));
        assert!(json.contains("\"users\":3"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_consume_response_empty_queue() {
        let value = serde_json::to_value(ConsumeResponse::new(None)).unwrap();
        assert_eq!(value, json!({"success": true, "message": null}));
    }

    #[test]
    fn test_health_response_serialize() {
        let value = serde_json::to_value(HealthResponse::healthy()).unwrap();
        assert_eq!(value["status"], "healthy");
        assert_eq!(value["services"]["postgres"], "connected");
        assert_eq!(value["services"]["redis"], "connected");
        assert_eq!(value["services"]["rabbitmq"], "connected");
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Queue error");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"Queue error"}"#);
    }
}
