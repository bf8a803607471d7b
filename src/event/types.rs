//! Identifier types for visitors and documents

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque visitor identifier (the tracker's `visitor_uuid`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct VisitorId(String);

impl VisitorId {
    pub fn new(id: impl Into<String>) -> Self {
        VisitorId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last four characters, used as a compact display label
    pub fn short(&self) -> &str {
        short_suffix(&self.0)
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VisitorId {
    fn from(s: String) -> Self {
        VisitorId(s)
    }
}

impl From<&str> for VisitorId {
    fn from(s: &str) -> Self {
        VisitorId(s.to_string())
    }
}

/// Opaque document identifier (the tracker's `subject_doc_id`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        DocumentId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last four characters, used as a compact display label
    pub fn short(&self) -> &str {
        short_suffix(&self.0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        DocumentId(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        DocumentId(s.to_string())
    }
}

fn short_suffix(s: &str) -> &str {
    // Walk back four chars so multi-byte ids never split a code point
    match s.char_indices().rev().nth(3) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}
