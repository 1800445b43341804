//! In-process message queue.

use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::models::QueueMessage;
use crate::store::{MessageQueue, StoreResult};

/// FIFO queue holding serialized payloads, as a broker would.
#[derive(Debug, Default)]
pub struct MemoryQueue {
    messages: Mutex<VecDeque<Vec<u8>>>,
}

impl MemoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues raw bytes, bypassing payload encoding.
    pub async fn push_raw(&self, payload: impl Into<Vec<u8>>) {
        self.messages.lock().await.push_back(payload.into());
    }
}

#[async_trait]
impl MessageQueue for MemoryQueue {
    async fn publish(&self, message: &QueueMessage) -> StoreResult<()> {
        let payload = serde_json::to_vec(message)?;
        self.messages.lock().await.push_back(payload);
        Ok(())
    }

    async fn consume(&self) -> StoreResult<Option<Value>> {
        // popping is the acknowledgement
        let Some(payload) = self.messages.lock().await.pop_front() else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_slice(&payload)?))
    }

    async fn depth(&self) -> StoreResult<u32> {
        Ok(self.messages.lock().await.len() as u32)
    }
}
