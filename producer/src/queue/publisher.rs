//! Async RabbitMQ publisher for shipment notices.
//!
//! One notice is published per call, in caller order. The default mode opens
//! and closes a fresh connection around every publish; the queue cycle is
//! declare → publish → log → pause, and the connection is closed however the
//! cycle ends. An explicit pooled mode reuses one cached connection for the
//! whole run instead.

use std::time::Duration;

use lapin::{
    options::{BasicPublishOptions, QueueDeclareOptions},
    types::FieldTable,
    BasicProperties, Channel, Connection, ConnectionProperties,
};
use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::{info, warn};

use super::types::ShipmentNotice;
use crate::error::ProducerError;

/// How the publisher holds its broker connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionMode {
    /// Open and close a connection around every publish. The default.
    PerMessage,
    /// Keep one connection for the whole run, reconnecting if it drops.
    Pooled,
}

/// RabbitMQ publisher with per-message or pooled connection handling.
pub struct Publisher {
    url: String,
    queue: String,
    delay: Duration,
    mode: ConnectionMode,
    connection: RwLock<Option<Connection>>,
    channel: RwLock<Option<Channel>>,
}

impl Publisher {
    /// Create a new publisher for `queue` on the broker at `url`.
    pub fn new(url: String, queue: String, delay: Duration, mode: ConnectionMode) -> Self {
        Self {
            url,
            queue,
            delay,
            mode,
            connection: RwLock::new(None),
            channel: RwLock::new(None),
        }
    }

    /// Publish one notice, then pause for the configured delay.
    ///
    /// Sequential by construction: the call returns only after the notice is
    /// confirmed and the pause has elapsed, so publish order equals call
    /// order.
    pub async fn publish(&self, notice: &ShipmentNotice) -> Result<(), ProducerError> {
        match self.mode {
            ConnectionMode::PerMessage => self.publish_per_message(notice).await,
            ConnectionMode::Pooled => {
                let channel = self.ensure_connected().await?;
                self.publish_on(&channel, notice).await
            }
        }
    }

    async fn publish_per_message(&self, notice: &ShipmentNotice) -> Result<(), ProducerError> {
        let conn = Connection::connect(&self.url, ConnectionProperties::default())
            .await
            .map_err(ProducerError::BrokerConnection)?;

        let result = match conn.create_channel().await {
            Ok(channel) => self.publish_on(&channel, notice).await,
            Err(e) => Err(ProducerError::BrokerConnection(e)),
        };

        // Closed no matter how the publish went.
        if let Err(e) = conn.close(200, "Normal shutdown").await {
            warn!(error = %e, "rabbitmq_connection_close_error");
        }

        result
    }

    /// Declare the queue, publish the notice, log it, pause.
    async fn publish_on(
        &self,
        channel: &Channel,
        notice: &ShipmentNotice,
    ) -> Result<(), ProducerError> {
        // Idempotent; a durable queue survives a broker restart.
        channel
            .queue_declare(
                &self.queue,
                QueueDeclareOptions {
                    durable: true,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await
            .map_err(ProducerError::Publish)?;

        channel
            .basic_publish(
                "",
                &self.queue,
                BasicPublishOptions::default(),
                notice.body().as_bytes(),
                BasicProperties::default()
                    .with_delivery_mode(2) // Persistent
                    .with_content_type("text/plain".into()),
            )
            .await
            .map_err(ProducerError::Publish)?
            .await
            .map_err(ProducerError::Publish)?;

        info!(
            mode = notice.mode(),
            queue = %self.queue,
            alert = notice.is_alert(),
            body_length = notice.body().len(),
            "shipment_sent"
        );

        sleep(self.delay).await;

        Ok(())
    }

    /// Ensure we have a valid cached connection and channel (pooled mode).
    async fn ensure_connected(&self) -> Result<Channel, ProducerError> {
        // Check if we have a valid channel
        {
            let channel = self.channel.read().await;
            if let Some(ch) = channel.as_ref() {
                if ch.status().connected() {
                    return Ok(ch.clone());
                }
            }
        }

        // Need to reconnect
        let mut connection = self.connection.write().await;
        let mut channel = self.channel.write().await;

        // Double-check after acquiring write lock
        if let Some(ch) = channel.as_ref() {
            if ch.status().connected() {
                return Ok(ch.clone());
            }
        }

        info!("rabbitmq_publisher_connecting");

        let conn = Connection::connect(&self.url, ConnectionProperties::default())
            .await
            .map_err(ProducerError::BrokerConnection)?;

        info!("rabbitmq_publisher_connected");

        let ch = conn
            .create_channel()
            .await
            .map_err(ProducerError::BrokerConnection)?;

        *connection = Some(conn);
        *channel = Some(ch.clone());

        Ok(ch)
    }

    /// Close any cached connection gracefully. A no-op in per-message mode.
    pub async fn close(&self) {
        let mut connection = self.connection.write().await;
        let mut channel = self.channel.write().await;

        if let Some(ch) = channel.take() {
            if let Err(e) = ch.close(200, "Normal shutdown").await {
                warn!(error = %e, "rabbitmq_channel_close_error");
            }
        }

        if let Some(conn) = connection.take() {
            if let Err(e) = conn.close(200, "Normal shutdown").await {
                warn!(error = %e, "rabbitmq_connection_close_error");
            }

            info!("rabbitmq_publisher_closed");
        }
    }
}
