//! Co-occurrence recommendations
//!
//! - `BipartiteIndex`: readers of a document, documents of a reader
//! - `also_likes`: documents ranked by shared readers with a seed
//! - `RankedList::top_k`: truncation to the K best entries
//! - `build_graph`: reader/document graph explaining a recommendation
//!
//! Every request builds its own index over the `EventStore`; nothing is
//! cached between requests, so requests over the same snapshot are
//! independent of each other.

pub mod also_likes;
pub mod dot;
pub mod error;
pub mod graph;
pub mod index;

pub use also_likes::{also_likes, top_k_also_likes, RankedList};
pub use error::{AnalysisError, AnalysisResult};
pub use graph::{build_graph, GraphEdge, GraphNode, RecommendationGraph};
pub use index::{BipartiteIndex, DocumentSet, ReaderSet};
