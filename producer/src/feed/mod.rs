//! Feed module for CSV shipment ingestion.
//!
//! The feed is a CSV file with a header row followed by `mode,cost` rows.
//! Rows are handed to the publisher one at a time, in file order.

pub mod reader;
pub mod shipment;

pub use reader::ShipmentReader;
pub use shipment::Shipment;
