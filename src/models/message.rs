//! Queue payload format
//!
//! Every message placed on the queue is a JSON object tagged by `action`
//! and stamped with the time it was produced.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::User;

/// A message published to the gateway queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum QueueMessage {
    /// Notification emitted after a user row is inserted
    UserCreated { user: User, timestamp: String },
    /// Arbitrary payload submitted through the send-message endpoint
    Message { message: Value, timestamp: String },
}

impl QueueMessage {
    /// Builds a creation notification stamped with the current time.
    pub fn user_created(user: User) -> Self {
        QueueMessage::UserCreated {
            user,
            timestamp: iso_timestamp(),
        }
    }

    /// Wraps a client payload stamped with the current time.
    pub fn message(message: Value) -> Self {
        QueueMessage::Message {
            message,
            timestamp: iso_timestamp(),
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            QueueMessage::UserCreated { timestamp, .. } | QueueMessage::Message { timestamp, .. } => {
                timestamp
            }
        }
    }
}

/// Current UTC time as ISO 8601 with millisecond precision, e.g.
/// `2024-05-01T12:00:00.123Z`.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
