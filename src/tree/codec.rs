// SPDX-License-Identifier: MIT

//! Serialized form of a tree and its (de)serialization
//!
//! The wire schema is one record per tree node:
//!
//! ```json
//! { "Op": "and", "Nodes": [ { "Op": "leaf", "Leaf": "(gt .X 5)" }, ... ] }
//! ```
//!
//! `Leaf` is present only on leaf records and already carries the wrapping
//! parentheses applied when the leaf was first constructed. `Nodes` is
//! present and non-empty only on composite records.

use log::debug;
use serde::{Deserialize, Serialize};

use super::error::{RecordError, TreeError};
use super::node::Tree;
use super::operator::Operator;

/// Tag used for leaf records in place of a combining operator.
const LEAF_TAG: &str = "leaf";

/// Serialized representation of one tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeRecord {
    #[serde(rename = "Op")]
    pub op: String,

    #[serde(rename = "Nodes", default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<TreeRecord>,

    #[serde(rename = "Leaf", default, skip_serializing_if = "Option::is_none")]
    pub leaf: Option<String>,
}

/// Encode a tree into its serialized record form.
pub fn encode(tree: &Tree) -> TreeRecord {
    match tree {
        Tree::Leaf(expr) => TreeRecord {
            op: LEAF_TAG.to_string(),
            nodes: Vec::new(),
            leaf: Some(expr.clone()),
        },
        Tree::Node { op, children } => TreeRecord {
            op: op.to_string(),
            nodes: children.iter().map(encode).collect(),
            leaf: None,
        },
    }
}

/// Decode a record back into a tree.
///
/// Validation is eager: an unknown operator tag, a composite record without
/// children, or a leaf record without its expression all fail here rather
/// than surfacing later during combination. Always produces a fresh tree.
pub fn decode(record: &TreeRecord) -> Result<Tree, TreeError> {
    if record.op == LEAF_TAG {
        // The stored expression was parenthesized at construction time, so
        // it is restored verbatim rather than re-wrapped.
        let expr = record.leaf.as_ref().ok_or(RecordError::MissingLeaf)?;
        return Ok(Tree::Leaf(expr.clone()));
    }

    let op: Operator = record.op.parse()?;
    if record.nodes.is_empty() {
        return Err(RecordError::NoChildren(record.op.clone()).into());
    }

    let children = record
        .nodes
        .iter()
        .map(decode)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("decoded '{}' record with {} children", op, children.len());
    Ok(Tree::node(op, children))
}

/// Serialize a tree to compact JSON.
pub fn to_json(tree: &Tree) -> Result<String, TreeError> {
    Ok(serde_json::to_string(&encode(tree))?)
}

/// Serialize a tree to indented JSON.
pub fn to_json_pretty(tree: &Tree) -> Result<String, TreeError> {
    Ok(serde_json::to_string_pretty(&encode(tree))?)
}

/// Deserialize a tree from JSON.
pub fn from_json(json: &str) -> Result<Tree, TreeError> {
    let record: TreeRecord = serde_json::from_str(json)?;
    decode(&record)
}
