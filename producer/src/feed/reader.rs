//! CSV reader yielding shipments in file order.
//!
//! The first line of the feed is a header and is skipped unconditionally;
//! fields are taken by position, not by header name. Blank lines are ignored.
//! A cost that does not parse as a number fails the row, and with it the run.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::ProducerError;
use crate::feed::shipment::Shipment;

/// Raw feed row before the cost is parsed.
#[derive(Debug, Deserialize)]
struct RawRecord {
    mode: String,
    cost: String,
}

/// Streaming reader over the shipping feed.
///
/// Iteration yields one `Shipment` per data row without buffering the whole
/// file.
pub struct ShipmentReader<R: io::Read> {
    records: csv::StringRecordsIntoIter<R>,
    row: u64,
}

impl ShipmentReader<File> {
    /// Open the feed file at `path`.
    pub fn open(path: &Path) -> Result<Self, ProducerError> {
        let file = File::open(path).map_err(|source| ProducerError::FeedAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(file))
    }
}

impl<R: io::Read> ShipmentReader<R> {
    /// Build a reader over any byte source. Used directly by tests.
    pub fn from_reader(rdr: R) -> Self {
        let records = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(rdr)
            .into_records();
        Self { records, row: 0 }
    }
}

impl<R: io::Read> Iterator for ShipmentReader<R> {
    type Item = Result<Shipment, ProducerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(ProducerError::FeedRead(e))),
        };
        self.row += 1;

        let raw: RawRecord = match record.deserialize(None) {
            Ok(raw) => raw,
            Err(e) => return Some(Err(ProducerError::FeedRead(e))),
        };

        match raw.cost.trim().parse::<f64>() {
            Ok(cost) => Some(Ok(Shipment::new(raw.mode, cost))),
            Err(source) => Some(Err(ProducerError::CostParse {
                row: self.row,
                value: raw.cost,
                source,
            })),
        }
    }
}
