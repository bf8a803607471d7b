//! Graphviz DOT rendering of a recommendation graph

use super::graph::{GraphNode, RecommendationGraph};
use std::fmt::Write;

const HIGHLIGHT: &str = "green";

impl RecommendationGraph {
    /// Render as a left-to-right DOT digraph
    ///
    /// Documents are boxes, visitors ellipses, both labelled with the last
    /// four characters of their id. The seed document and the queried
    /// visitor (with its edges) are highlighted.
    pub fn to_dot(&self, name: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(out, "digraph {} {{", quote(name));
        let _ = writeln!(out, "    rankdir=LR;");

        for node in &self.nodes {
            let (id, label, shape, color) = match node {
                GraphNode::Document { id, is_seed } => (
                    id.as_str(),
                    id.short(),
                    "box",
                    if *is_seed { HIGHLIGHT } else { "lightblue" },
                ),
                GraphNode::Visitor {
                    id,
                    is_queried_visitor,
                } => (
                    id.as_str(),
                    id.short(),
                    "ellipse",
                    if *is_queried_visitor { HIGHLIGHT } else { "lightpink" },
                ),
            };
            let _ = writeln!(
                out,
                "    {} [label={}, shape={}, style=filled, color={}];",
                quote(&node_key(node.is_document(), id)),
                quote(label),
                shape,
                color
            );
        }

        for edge in &self.edges {
            let color = if edge.is_queried_visitor { HIGHLIGHT } else { "black" };
            let _ = writeln!(
                out,
                "    {} -> {} [label=\"likes\", color={}];",
                quote(&node_key(false, edge.from_visitor_id.as_str())),
                quote(&node_key(true, edge.to_document_id.as_str())),
                color
            );
        }

        out.push_str("}\n");
        out
    }
}

// Documents and visitors live in separate id spaces; prefix so a visitor
// and a document sharing an id stay distinct nodes.
fn node_key(is_document: bool, id: &str) -> String {
    if is_document {
        format!("doc:{}", id)
    } else {
        format!("visitor:{}", id)
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
