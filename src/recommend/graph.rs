//! Recommendation graph: why each recommended document was recommended
//!
//! Nodes are the recommended documents plus the seed's readers who read
//! them; edges are "visitor read document". Readers of a recommended
//! document who never read the seed are left out, since they explain
//! nothing about the recommendation.

use super::also_likes::RankedList;
use super::error::AnalysisResult;
use super::index::BipartiteIndex;
use crate::event::{DocumentId, EventStore, VisitorId};
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

/// A node of the recommendation graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GraphNode {
    Document { id: DocumentId, is_seed: bool },
    Visitor { id: VisitorId, is_queried_visitor: bool },
}

impl GraphNode {
    pub fn id(&self) -> &str {
        match self {
            GraphNode::Document { id, .. } => id.as_str(),
            GraphNode::Visitor { id, .. } => id.as_str(),
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self, GraphNode::Document { .. })
    }
}

/// Directed "read" edge from a visitor to a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from_visitor_id: VisitorId,
    pub to_document_id: DocumentId,
    pub relation: &'static str,
    /// Mirrors the visitor's tag
    pub is_queried_visitor: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecommendationGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl RecommendationGraph {
    pub fn document_nodes(&self) -> impl Iterator<Item = (&DocumentId, bool)> {
        self.nodes.iter().filter_map(|n| match n {
            GraphNode::Document { id, is_seed } => Some((id, *is_seed)),
            GraphNode::Visitor { .. } => None,
        })
    }

    pub fn visitor_nodes(&self) -> impl Iterator<Item = (&VisitorId, bool)> {
        self.nodes.iter().filter_map(|n| match n {
            GraphNode::Visitor {
                id,
                is_queried_visitor,
            } => Some((id, *is_queried_visitor)),
            GraphNode::Document { .. } => None,
        })
    }

    pub fn has_edge(&self, visitor: &VisitorId, document: &DocumentId) -> bool {
        self.edges
            .iter()
            .any(|e| &e.from_visitor_id == visitor && &e.to_document_id == document)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Build the graph for `seed` over an already ranked (usually top-K) list
///
/// `focal` tags one visitor for highlighting; an id that matches no node is
/// not an error and tags nothing.
pub fn build_graph<S: EventStore + ?Sized>(
    store: &S,
    seed: &DocumentId,
    focal: Option<&VisitorId>,
    ranked: &RankedList,
) -> AnalysisResult<RecommendationGraph> {
    let mut index = BipartiteIndex::new(store);
    let seed_readers: FxHashSet<VisitorId> = index.readers_of(seed)?.iter().cloned().collect();

    let mut graph = RecommendationGraph::default();
    let mut placed: FxHashSet<VisitorId> = FxHashSet::default();

    for document in ranked.keys() {
        graph.nodes.push(GraphNode::Document {
            id: document.clone(),
            is_seed: document == seed,
        });

        for reader in index.readers_of(document)? {
            if !seed_readers.contains(reader) {
                continue;
            }
            let is_queried_visitor = focal == Some(reader);

            if placed.insert(reader.clone()) {
                graph.nodes.push(GraphNode::Visitor {
                    id: reader.clone(),
                    is_queried_visitor,
                });
            }
            graph.edges.push(GraphEdge {
                from_visitor_id: reader.clone(),
                to_document_id: document.clone(),
                relation: "read",
                is_queried_visitor,
            });
        }
    }

    debug!(
        "build_graph({}): {} nodes, {} edges",
        seed,
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}
