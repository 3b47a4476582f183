//! Queue module for RabbitMQ operations.
//!
//! This module provides:
//! - The wire notice rendered from one shipment row
//! - The publisher that sends each notice to the durable shipping queue
//!
//! ## Architecture
//!
//! ```text
//! CSV feed → Reader → Publisher → shipping_queue → Consumer (elsewhere)
//! ```

pub mod publisher;
pub mod types;

pub use publisher::{ConnectionMode, Publisher};
pub use types::{ShipmentNotice, EXCESSIVE_COST_THRESHOLD, SHIPPING_QUEUE};
