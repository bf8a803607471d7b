//! Event store: the read-only source every analysis runs against
//!
//! `EventStore` is the seam between the analytics and however the tracker
//! log is held. `EventLog` is the in-memory snapshot used by the CLI and the
//! tests; it indexes event positions by document and by visitor once, at
//! construction, so both filters return events in log order.

use super::record::Event;
use super::types::{DocumentId, VisitorId};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised when the store cannot produce data
///
/// An unknown document or visitor is never an error; it yields no events.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Event store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to an immutable event snapshot
pub trait EventStore {
    /// Every event against `document`, in log order
    fn events_for_document(&self, document: &DocumentId) -> StoreResult<Vec<&Event>>;

    /// Every event produced by `visitor`, in log order
    fn events_for_visitor(&self, visitor: &VisitorId) -> StoreResult<Vec<&Event>>;

    /// The whole snapshot, in log order
    fn events(&self) -> StoreResult<Vec<&Event>>;
}

/// In-memory event snapshot
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
    by_document: FxHashMap<DocumentId, Vec<usize>>,
    by_visitor: FxHashMap<VisitorId, Vec<usize>>,
}

impl EventLog {
    /// Build a snapshot from validated events
    pub fn new(events: Vec<Event>) -> Self {
        let mut by_document: FxHashMap<DocumentId, Vec<usize>> = FxHashMap::default();
        let mut by_visitor: FxHashMap<VisitorId, Vec<usize>> = FxHashMap::default();

        for (pos, event) in events.iter().enumerate() {
            by_document
                .entry(event.document_id.clone())
                .or_default()
                .push(pos);
            by_visitor
                .entry(event.visitor_id.clone())
                .or_default()
                .push(pos);
        }

        EventLog {
            events,
            by_document,
            by_visitor,
        }
    }

    /// A new snapshot holding only the events against `document`
    pub fn for_document(&self, document: &DocumentId) -> EventLog {
        let events = self
            .positions(self.by_document.get(document))
            .cloned()
            .collect();
        EventLog::new(events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn document_count(&self) -> usize {
        self.by_document.len()
    }

    pub fn visitor_count(&self) -> usize {
        self.by_visitor.len()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    fn positions<'a>(
        &'a self,
        positions: Option<&'a Vec<usize>>,
    ) -> impl Iterator<Item = &'a Event> + 'a {
        positions
            .into_iter()
            .flatten()
            .map(move |&pos| &self.events[pos])
    }
}

impl EventStore for EventLog {
    fn events_for_document(&self, document: &DocumentId) -> StoreResult<Vec<&Event>> {
        Ok(self.positions(self.by_document.get(document)).collect())
    }

    fn events_for_visitor(&self, visitor: &VisitorId) -> StoreResult<Vec<&Event>> {
        Ok(self.positions(self.by_visitor.get(visitor)).collect())
    }

    fn events(&self) -> StoreResult<Vec<&Event>> {
        Ok(self.events.iter().collect())
    }
}

impl FromIterator<Event> for EventLog {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        EventLog::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;

    fn sample() -> EventLog {
        vec![
            Event::new("v1", "d1", EventType::Pageview),
            Event::new("v2", "d1", EventType::Pageview),
            Event::new("v1", "d2", EventType::Pageview),
            Event::new("v1", "d1", EventType::Pagereadtime).with_read_time(10),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_events_for_document_in_log_order() {
        let log = sample();
        let events = log.events_for_document(&DocumentId::new("d1")).unwrap();
        let visitors: Vec<&str> = events.iter().map(|e| e.visitor_id.as_str()).collect();
        assert_eq!(visitors, vec!["v1", "v2", "v1"]);
    }

    #[test]
    fn test_events_for_visitor() {
        let log = sample();
        let events = log.events_for_visitor(&VisitorId::new("v1")).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1].document_id, DocumentId::new("d2"));
    }

    #[test]
    fn test_unknown_ids_are_empty() {
        let log = sample();
        assert!(log.events_for_document(&DocumentId::new("nope")).unwrap().is_empty());
        assert!(log.events_for_visitor(&VisitorId::new("nope")).unwrap().is_empty());
    }

    #[test]
    fn test_for_document_view() {
        let log = sample();
        let view = log.for_document(&DocumentId::new("d1"));
        assert_eq!(view.len(), 3);
        assert_eq!(view.document_count(), 1);
        assert_eq!(view.visitor_count(), 2);
        // the source snapshot is untouched
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn test_empty_log() {
        let log = EventLog::default();
        assert!(log.is_empty());
        assert!(log.events().unwrap().is_empty());
    }
}
