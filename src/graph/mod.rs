//! In-memory node/edge graph handed to the Graphviz driver.

pub mod dot;

use petgraph::graph::{NodeIndex, UnGraph};
use std::fmt;

/// Identifier of a rendered node. Unique within one `PlanGraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(NodeIndex);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0.index())
    }
}

#[derive(Debug, Clone)]
pub struct PlanGraph {
    name: String,
    comment: Option<String>,
    graph: UnGraph<String, ()>,
}

impl PlanGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            graph: UnGraph::default(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Add a labeled node. Ids come from a counter, so insertion order is id order.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        NodeId(self.graph.add_node(label.into()))
    }

    pub fn add_edge(&mut self, parent: NodeId, child: NodeId) {
        self.graph.add_edge(parent.0, child.0, ());
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.graph
            .node_indices()
            .map(|ix| (NodeId(ix), self.graph[ix].as_str()))
    }

    /// Edges in insertion order as (parent, child).
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.graph
            .raw_edges()
            .iter()
            .map(|e| (NodeId(e.source()), NodeId(e.target())))
    }
}
