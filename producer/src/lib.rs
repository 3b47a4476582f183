//! ShipFeed - CSV-driven shipment notice producer.
//!
//! This library provides the modules behind the `shipfeed-producer` binary:
//! - `feed`: streams shipment rows (mode, cost) out of the CSV feed
//! - `queue`: renders one notice per row and publishes it to RabbitMQ
//! - `admin`: best-effort launch of the broker management console
//!
//! ## Pipeline
//!
//! ```text
//! shipping.csv → Reader → Publisher → shipping_queue
//! ```
//!
//! The producer is fully sequential: one row, one connection, one publish,
//! one pause, in file order.

pub mod admin;
pub mod config;
pub mod error;
pub mod feed;
pub mod queue;

// Re-export commonly used types
pub use config::Config;
pub use error::ProducerError;
pub use feed::{Shipment, ShipmentReader};
pub use queue::{ConnectionMode, Publisher, ShipmentNotice, SHIPPING_QUEUE};
