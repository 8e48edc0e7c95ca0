//! Depth-first walk of the operator tree into a `PlanGraph`.

use crate::error::VizError;
use crate::graph::{NodeId, PlanGraph};
use crate::label::operator_label;
use crate::plan::{MappingPlan, OperatorNode};

use tracing::{debug, trace};

/// Add `op` and its descendants to `graph`, pre-order.
///
/// Returns the id assigned to `op`. A parent, if given, gets an edge to it.
pub fn render_operator(
    op: &OperatorNode,
    parent: Option<NodeId>,
    graph: &mut PlanGraph,
) -> Result<NodeId, VizError> {
    let label = operator_label(op)?;
    let id = graph.add_node(label);
    trace!(%id, kind = %op.kind, "added operator node");

    if let Some(parent) = parent {
        graph.add_edge(parent, id);
    }

    if let Some(child) = op.child() {
        render_operator(child, Some(id), graph)?;
    }
    Ok(id)
}

/// Render every root chain of `plan` into a fresh graph.
pub fn render_plan(
    plan: &MappingPlan,
    name: &str,
    comment: Option<&str>,
) -> Result<PlanGraph, VizError> {
    let mut graph = PlanGraph::new(name);
    if let Some(comment) = comment {
        graph = graph.with_comment(comment);
    }

    for root in plan.roots() {
        render_operator(root, None, &mut graph)?;
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built plan graph"
    );
    Ok(graph)
}
