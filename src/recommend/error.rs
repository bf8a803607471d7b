//! Errors raised by recommendation requests

use crate::event::{DocumentId, StoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The event store could not answer; distinct from "no readers"
    #[error("Event store failure: {0}")]
    Store(#[from] StoreError),

    /// The two-hop traversal from `seed` produced more co-read occurrences
    /// than the configured ceiling
    #[error("Fan-out for document {seed} exceeds limit of {limit} co-read occurrences")]
    FanOutExceeded { seed: DocumentId, limit: usize },
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
