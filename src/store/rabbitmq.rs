//! RabbitMQ-backed message queue.

use async_trait::async_trait;
use lapin::options::{
    BasicAckOptions, BasicGetOptions, BasicPublishOptions, QueueDeclareOptions,
};
use lapin::types::FieldTable;
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties};
use serde_json::Value;
use tracing::{debug, info};

use super::{MessageQueue, StoreResult};
use crate::config::RabbitConfig;
use crate::models::QueueMessage;

/// Message queue over a single AMQP channel.
///
/// Messages go through the default exchange, routed by queue name.
pub struct RabbitQueue {
    // held so the connection outlives the channel
    _connection: Connection,
    channel: Channel,
    queue_name: String,
}

impl RabbitQueue {
    /// Connects, opens a channel, and declares the durable queue.
    pub async fn connect(config: &RabbitConfig) -> StoreResult<Self> {
        let connection =
            Connection::connect(&config.connection_url(), ConnectionProperties::default()).await?;
        let channel = connection.create_channel().await?;

        let queue = Self {
            _connection: connection,
            channel,
            queue_name: config.queue_name.clone(),
        };
        let ready = queue.declare().await?;
        info!(
            queue = %queue.queue_name,
            ready,
            "RabbitMQ connected"
        );

        Ok(queue)
    }

    /// Declares the queue (idempotent) and returns its ready message count.
    async fn declare(&self) -> StoreResult<u32> {
        let queue = self
            .channel
            .queue_declare(
                &self.queue_name,
                QueueDeclareOptions {
                    durable: true,
                    ..QueueDeclareOptions::default()
                },
                FieldTable::default(),
            )
            .await?;

        Ok(queue.message_count())
    }
}

#[async_trait]
impl MessageQueue for RabbitQueue {
    async fn publish(&self, message: &QueueMessage) -> StoreResult<()> {
        let payload = serde_json::to_vec(message)?;

        self.channel
            .basic_publish(
                "",
                &self.queue_name,
                BasicPublishOptions::default(),
                &payload,
                BasicProperties::default(),
            )
            .await?;

        debug!(queue = %self.queue_name, bytes = payload.len(), "Published message");
        Ok(())
    }

    async fn consume(&self) -> StoreResult<Option<Value>> {
        let message = self
            .channel
            .basic_get(&self.queue_name, BasicGetOptions { no_ack: false })
            .await?;

        let Some(message) = message else {
            return Ok(None);
        };

        message
            .delivery
            .acker
            .ack(BasicAckOptions::default())
            .await?;

        let payload = serde_json::from_slice(&message.delivery.data)?;
        Ok(Some(payload))
    }

    async fn depth(&self) -> StoreResult<u32> {
        self.declare().await
    }
}
