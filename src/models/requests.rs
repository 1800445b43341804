//! Request DTOs for the gateway API
//!
//! Defines the structure of incoming HTTP request bodies. Field contents are
//! passed to the backends as given.

use serde::Deserialize;
use serde_json::Value;

use super::NewUser;

/// Request body for POST /api/users
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser::new(req.name, req.email)
    }
}

/// Request body for POST /api/cache
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: The value to store
/// - `ttl`: Optional TTL in seconds (uses the configured default if not specified)
#[derive(Debug, Clone, Deserialize)]
pub struct SetCacheRequest {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub ttl: Option<u64>,
}

/// Request body for POST /api/message
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    /// Any JSON value; `null` when omitted
    #[serde(default)]
    pub message: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_cache_request_deserialize() {
        let json = r#"{"key": "test", "value": "hello"}"#;
        let req: SetCacheRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "test");
        assert_eq!(req.value, "hello");
        assert!(req.ttl.is_none());
    }

    #[test]
    fn test_set_cache_request_with_ttl() {
        let json = r#"{"key": "test", "value": "hello", "ttl": 60}"#;
        let req: SetCacheRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ttl, Some(60));
    }

    #[test]
    fn test_create_user_request_into_new_user() {
        let json = r#"{"name": "Grace", "email": "grace@example.com"}"#;
        let req: CreateUserRequest = serde_json::from_str(json).unwrap();
        let new_user = NewUser::from(req);
        assert_eq!(new_user, NewUser::new("Grace", "grace@example.com"));
    }

    #[test]
    fn test_send_message_request_missing_message_is_null() {
        let req: SendMessageRequest = serde_json::from_str("{}").unwrap();
        assert!(req.message.is_null());
    }

    #[test]
    fn test_send_message_request_accepts_objects() {
        let req: SendMessageRequest =
            serde_json::from_str(r#"{"message": {"text": "hi"}}"#).unwrap();
        assert_eq!(req.message["text"], "hi");
    }
}
