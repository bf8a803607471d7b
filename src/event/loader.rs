//! Newline-delimited JSON ingestion
//!
//! Malformed rows (unparseable JSON, anything but a JSON object, missing
//! visitor or document id) are skipped and counted. Optional fields of an
//! unexpected type read as absent and never cost the row. Read failures are
//! returned as `StoreError::Io`.

use super::record::{Event, RawEvent};
use super::store::{EventLog, StoreResult};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of loading a log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows turned into events
    pub accepted: usize,
    /// Rows dropped as malformed
    pub skipped: usize,
}

impl EventLog {
    /// Load a snapshot from a newline-delimited JSON file
    pub fn open(path: impl AsRef<Path>) -> StoreResult<(Self, LoadReport)> {
        let path = path.as_ref();
        info!("Loading events from {:?}", path);
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a snapshot from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> StoreResult<(Self, LoadReport)> {
        let mut events = Vec::new();
        let mut report = LoadReport::default();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let raw = match serde_json::from_str::<Value>(trimmed) {
                Ok(Value::Object(object)) => RawEvent::from_object(&object),
                Ok(_) => {
                    debug!("Skipping line {}: not a JSON object", line_no + 1);
                    report.skipped += 1;
                    continue;
                }
                Err(e) => {
                    debug!("Skipping line {}: {}", line_no + 1, e);
                    report.skipped += 1;
                    continue;
                }
            };

            match Event::try_from(raw) {
                Ok(event) => {
                    events.push(event);
                    report.accepted += 1;
                }
                Err(missing) => {
                    debug!("Skipping line {}: missing {}", line_no + 1, missing);
                    report.skipped += 1;
                }
            }
        }

        if report.skipped > 0 {
            warn!(
                "Skipped {} malformed event(s), kept {}",
                report.skipped, report.accepted
            );
        }
        info!("Loaded {} events", report.accepted);

        Ok((EventLog::new(events), report))
    }
}
