//! ShipFeed Producer - CSV-driven RabbitMQ shipment notice publisher.
//!
//! This binary reads shipment rows (mode, cost) from a CSV feed and publishes
//! one notice per row to the durable shipping queue, pausing between
//! publishes. Shipments costing $100,000 or more are sent with an alert
//! prefix.

use std::process;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use shipfeed::admin::offer_admin_site;
use shipfeed::{Config, ProducerError, Publisher, ShipmentNotice, ShipmentReader, SHIPPING_QUEUE};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("producer_starting");

    // Load configuration from environment
    let config = Config::from_env();
    info!(
        broker_host = %config.broker_host,
        feed_path = %config.feed_path.display(),
        publish_delay_secs = config.publish_delay_secs,
        offer_admin_site = config.offer_admin_site,
        pooled_connection = config.pooled_connection,
        "config_loaded"
    );

    // Offered once, before any row is read
    offer_admin_site(&config);

    match run(&config).await {
        Ok(()) => {
            info!("producer_complete");
            Ok(())
        }
        Err(e @ ProducerError::BrokerConnection(_)) => {
            // An unreachable broker is fatal for the run; no retry.
            error!(error = %e, "rabbitmq_connection_failed");
            process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

/// Drive the feed through the publisher, one row at a time.
async fn run(config: &Config) -> Result<(), ProducerError> {
    let reader = ShipmentReader::open(&config.feed_path)?;

    let publisher = Publisher::new(
        config.amqp_url(),
        SHIPPING_QUEUE.to_string(),
        config.publish_delay(),
        config.connection_mode(),
    );

    for shipment in reader {
        let shipment = shipment?;
        let notice = ShipmentNotice::new(&shipment);
        publisher.publish(&notice).await?;
    }

    // Tears down the cached connection in pooled mode; no-op otherwise.
    publisher.close().await;

    Ok(())
}
