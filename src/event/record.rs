//! Event records as read from the tracker log
//!
//! `RawEvent` mirrors the wire format with every field optional. Validation
//! into `Event` happens once, at ingestion; downstream code never re-checks
//! required fields.

use super::types::{DocumentId, VisitorId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Kind of tracker event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Impression,
    Pageview,
    Pagereadtime,
    Read,
    /// Any type the analyzer does not interpret, kept by name
    Other(String),
}

impl EventType {
    pub fn parse(name: &str) -> Self {
        match name {
            "impression" => EventType::Impression,
            "pageview" => EventType::Pageview,
            "pagereadtime" => EventType::Pagereadtime,
            "read" => EventType::Read,
            other => EventType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventType::Impression => "impression",
            EventType::Pageview => "pageview",
            EventType::Pagereadtime => "pagereadtime",
            EventType::Read => "read",
            EventType::Other(name) => name,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for EventType {
    fn from(s: String) -> Self {
        EventType::parse(&s)
    }
}

impl From<EventType> for String {
    fn from(t: EventType) -> Self {
        t.as_str().to_string()
    }
}

/// One row of the tracker log before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEvent {
    pub visitor_uuid: Option<String>,
    pub subject_doc_id: Option<String>,
    pub event_type: Option<String>,
    pub event_readtime: Option<u64>,
    pub visitor_useragent: Option<String>,
    pub visitor_country: Option<String>,
}

impl RawEvent {
    /// Read the known fields of one JSON object
    ///
    /// A field holding an unexpected JSON type reads as absent. Ids must be
    /// strings; anything else leaves them `None` and the row fails validation.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_owned);

        RawEvent {
            visitor_uuid: text("visitor_uuid"),
            subject_doc_id: text("subject_doc_id"),
            event_type: text("event_type"),
            event_readtime: object.get("event_readtime").and_then(millis),
            visitor_useragent: text("visitor_useragent"),
            visitor_country: text("visitor_country"),
        }
    }
}

// Integral or float milliseconds; negative and non-finite values read as absent
fn millis(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0)
        .map(|f| f as u64)
}

/// Why a raw row was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    VisitorId,
    DocumentId,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::VisitorId => f.write_str("visitor_uuid"),
            MissingField::DocumentId => f.write_str("subject_doc_id"),
        }
    }
}

/// A validated visitor/document interaction
///
/// Immutable once built; the log it belongs to is a static snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub visitor_id: VisitorId,
    pub document_id: DocumentId,
    pub event_type: EventType,
    /// Milliseconds; only meaningful on `pagereadtime` events
    pub read_time: Option<u64>,
    pub user_agent: Option<String>,
    /// ISO 3166-1 alpha-2 code
    pub country: Option<String>,
}

impl Event {
    /// Create an event with only the required fields
    pub fn new(
        visitor_id: impl Into<VisitorId>,
        document_id: impl Into<DocumentId>,
        event_type: EventType,
    ) -> Self {
        Event {
            visitor_id: visitor_id.into(),
            document_id: document_id.into(),
            event_type,
            read_time: None,
            user_agent: None,
            country: None,
        }
    }

    pub fn with_read_time(mut self, millis: u64) -> Self {
        self.read_time = Some(millis);
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    pub fn with_country(mut self, code: impl Into<String>) -> Self {
        self.country = Some(code.into());
        self
    }

    pub fn is_read_time(&self) -> bool {
        self.event_type == EventType::Pagereadtime
    }
}

impl TryFrom<RawEvent> for Event {
    type Error = MissingField;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let visitor = non_empty(raw.visitor_uuid).ok_or(MissingField::VisitorId)?;
        let document = non_empty(raw.subject_doc_id).ok_or(MissingField::DocumentId)?;
        let event_type = raw
            .event_type
            .map(EventType::from)
            .unwrap_or_else(|| EventType::Other(String::new()));

        Ok(Event {
            visitor_id: VisitorId::new(visitor),
            document_id: DocumentId::new(document),
            event_type,
            read_time: raw.event_readtime,
            user_agent: non_empty(raw.visitor_useragent),
            country: non_empty(raw.visitor_country),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
