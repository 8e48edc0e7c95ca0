//! Plan layer: the mapping plan JSON and its in-memory operator tree.
//!
//! This module knows nothing about labels or Graphviz. It owns:
//! - the operator / extend-function data model
//! - loading a plan file from disk

pub mod load;
pub mod operator;

pub use load::load_plan;
pub use operator::{ExtendFunction, OperatorKind, OperatorNode};

use serde::Deserialize;

/// A parsed mapping plan: one operator chain per root.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct MappingPlan {
    roots: Vec<OperatorNode>,
}

impl MappingPlan {
    /// Parse a plan of any nesting depth. Operator chains nest one JSON
    /// object per operator, so serde_json's default depth limit is lifted and
    /// the stack grows on demand instead.
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        let mut de = serde_json::Deserializer::from_str(text);
        de.disable_recursion_limit();
        let plan = Self::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        Ok(plan)
    }

    pub fn roots(&self) -> &[OperatorNode] {
        &self.roots
    }

    /// Operators across every root chain.
    pub fn operator_count(&self) -> usize {
        self.roots.iter().map(OperatorNode::chain_len).sum()
    }
}
