//! Tracker event model and the read-only event store
//!
//! - Identifier newtypes for visitors and documents
//! - Validated `Event` records and their raw wire form
//! - `EventStore` trait and the in-memory `EventLog` snapshot
//! - Newline-delimited JSON loading

pub mod loader;
pub mod record;
pub mod store;
pub mod types;

pub use loader::LoadReport;
pub use record::{Event, EventType, MissingField, RawEvent};
pub use store::{EventLog, EventStore, StoreError, StoreResult};
pub use types::{DocumentId, VisitorId};
