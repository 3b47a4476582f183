//! Error types for the producer pipeline.
//!
//! Every failure here is terminal for a run: the producer has no retry
//! policy. The binary treats a failed broker connection specially (logged,
//! exit status 1); everything else propagates.

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds recognized by the producer.
#[derive(Debug, Error)]
pub enum ProducerError {
    /// The shipping feed could not be opened.
    #[error("failed to open shipping feed {}: {source}", path.display())]
    FeedAccess {
        /// Path of the feed file that could not be opened
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A row could not be read from the feed.
    #[error("failed to read shipping feed row: {0}")]
    FeedRead(#[from] csv::Error),

    /// A cost field could not be parsed as a number.
    #[error("feed row {row}: cost {value:?} is not a number: {source}")]
    CostParse {
        /// 1-based data-row number (header excluded)
        row: u64,
        /// Offending field text
        value: String,
        /// Underlying parse error
        source: ParseFloatError,
    },

    /// The connection to the broker could not be established.
    #[error("connection to RabbitMQ server failed: {0}")]
    BrokerConnection(#[source] lapin::Error),

    /// The broker rejected the queue declaration or the publish.
    #[error("failed to publish shipment notice: {0}")]
    Publish(#[source] lapin::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_feed_access_display_names_path() {
        let err = ProducerError::FeedAccess {
            path: Path::new("shipping.csv").to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("shipping.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_cost_parse_display_names_row_and_value() {
        let source = "not-a-number".parse::<f64>().unwrap_err();
        let err = ProducerError::CostParse {
            row: 3,
            value: "not-a-number".to_string(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("not-a-number"));
    }
}
