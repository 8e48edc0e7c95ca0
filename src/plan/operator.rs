//! Operator tree as it appears in the mapping plan JSON.
//!
//! JSON shape (one root):
//! {
//!   "type": "SerializerOp",
//!   "config": { "template": "...", "format": "NTriples" },
//!   "operator": {
//!     "type": "ExtendOp",
//!     "config": {
//!       "extend_pairs": {
//!         "?s": { "type": "Iri", "inner_function": { "type": "Reference", "value": "id" } }
//!       }
//!     },
//!     "operator": { "type": "SourceOp", "config": { "path": "data.csv" } }
//!   }
//! }
//!
//! `config` stays an untyped JSON object: only the keys a label needs are
//! looked up, and unknown operator kinds keep whatever they carry.

use crate::error::VizError;
use serde::de::Deserializer;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;

#[derive(Debug, Clone, Deserialize)]
pub struct OperatorNode {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, deserialize_with = "deserialize_config")]
    pub config: Map<String, Value>,

    /// Single downstream operator; `null` and absent both mean leaf.
    #[serde(default)]
    pub operator: Option<Box<OperatorNode>>,
}

/// Operator kinds that get a detailed label. Anything else falls into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind<'a> {
    Serializer,
    Extend,
    Project,
    Source,
    Other(&'a str),
}

impl<'a> From<&'a str> for OperatorKind<'a> {
    fn from(tag: &'a str) -> Self {
        match tag {
            "SerializerOp" => OperatorKind::Serializer,
            "ExtendOp" => OperatorKind::Extend,
            "ProjectOp" => OperatorKind::Project,
            "SourceOp" => OperatorKind::Source,
            other => OperatorKind::Other(other),
        }
    }
}

impl OperatorNode {
    pub fn kind(&self) -> OperatorKind<'_> {
        OperatorKind::from(self.kind.as_str())
    }

    pub fn child(&self) -> Option<&OperatorNode> {
        self.operator.as_deref()
    }

    /// Number of operators in the chain starting at this node (itself included).
    pub fn chain_len(&self) -> usize {
        std::iter::successors(Some(self), |op| op.child()).count()
    }

    pub fn config_value(&self, key: &str) -> Result<&Value, VizError> {
        self.config
            .get(key)
            .ok_or_else(|| VizError::missing(&self.kind, key))
    }

    /// Config value rendered for a label: strings raw, everything else as JSON text.
    pub fn config_text(&self, key: &str) -> Result<Cow<'_, str>, VizError> {
        self.config_value(key).map(value_text)
    }

    pub fn config_string_list(&self, key: &str) -> Result<Vec<&str>, VizError> {
        let expected = "an array of strings";
        let items = self
            .config_value(key)?
            .as_array()
            .ok_or_else(|| VizError::invalid(&self.kind, key, expected))?;
        items
            .iter()
            .map(|v| {
                v.as_str()
                    .ok_or_else(|| VizError::invalid(&self.kind, key, expected))
            })
            .collect()
    }

    /// `extend_pairs` in document order. A `null` chain is kept as `None`.
    pub fn extend_pairs(&self) -> Result<Vec<(&str, Option<ExtendFunction>)>, VizError> {
        let key = "extend_pairs";
        let expected = "an object of function chains";
        let pairs = self
            .config_value(key)?
            .as_object()
            .ok_or_else(|| VizError::invalid(&self.kind, key, expected))?;

        let mut out = Vec::with_capacity(pairs.len());
        for (attr, chain) in pairs {
            let function = Option::<ExtendFunction>::deserialize(
                serde_stacker::Deserializer::new(chain),
            )
            .map_err(|_| VizError::invalid(&self.kind, key, expected))?;
            out.push((attr.as_str(), function));
        }
        Ok(out)
    }
}

/// One link of an extend-function chain.
///
/// A link either wraps `inner_function` or terminates the chain with `value`.
/// Extra keys emitted by the plan generator are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtendFunction {
    #[serde(rename = "type")]
    pub kind: String,

    /// `None` only when the key is absent; an explicit `null` is kept.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub value: Option<Value>,

    #[serde(default)]
    pub inner_function: Option<Box<ExtendFunction>>,
}

impl ExtendFunction {
    pub fn inner(&self) -> Option<&ExtendFunction> {
        self.inner_function.as_deref()
    }
}

pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

fn deserialize_config<'de, D>(deserializer: D) -> std::result::Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    // `"config": null` shows up for parameterless operators.
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
