//! Docviews: document view analytics
//!
//! Reads a tracker log of document-view events (one row per visitor/document
//! interaction) and derives per-document and per-visitor analytics.
//!
//! The centre of the crate is the co-occurrence recommender ("documents also
//! liked by readers of X"): a two-hop traversal over the implicit
//! reader <-> document graph, ranked by shared readers, plus a graph view
//! explaining each recommendation. Around it sit the simple aggregations:
//! views by country, continent and browser, and top readers by read time.
//!
//! ## Example Usage
//!
//! ```rust
//! use docviews::event::{DocumentId, Event, EventLog, EventType, VisitorId};
//! use docviews::recommend::{also_likes, build_graph};
//! use docviews::config::RecommendConfig;
//!
//! let log: EventLog = vec![
//!     Event::new("v1", "d1", EventType::Pageview),
//!     Event::new("v2", "d1", EventType::Pageview),
//!     Event::new("v1", "d2", EventType::Pageview),
//! ]
//! .into_iter()
//! .collect();
//!
//! let seed = DocumentId::new("d1");
//! let ranked = also_likes(&log, &seed, &RecommendConfig::default()).unwrap();
//! assert_eq!(ranked.get(&seed), Some(2));
//!
//! let graph = build_graph(&log, &seed, Some(&VisitorId::new("v1")), &ranked.top_k(10)).unwrap();
//! assert_eq!(graph.edge_count(), 3);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod analytics;
pub mod config;
pub mod event;
pub mod rank;
pub mod recommend;

// Re-export main types for convenience
pub use config::{AnalyzerConfig, ConfigError, RecommendConfig};
pub use event::{
    DocumentId, Event, EventLog, EventStore, EventType, LoadReport, StoreError, StoreResult,
    VisitorId,
};
pub use rank::CountTable;
pub use recommend::{
    also_likes, build_graph, top_k_also_likes, AnalysisError, AnalysisResult, BipartiteIndex,
    GraphEdge, GraphNode, RankedList, RecommendationGraph,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
