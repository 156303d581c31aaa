// SPDX-License-Identifier: MIT

//! Typed errors for tree combination and decoding.

use thiserror::Error;

/// Top-level error type for logictree
#[derive(Debug, Error)]
pub enum TreeError {
    /// A composite node had no children at combine time
    #[error("empty node cannot be combined")]
    EmptyNode,

    /// A serialized record could not be decoded into a tree
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] RecordError),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Failure raised by the external template engine, passed through unchanged
    #[error(transparent)]
    Engine(Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a serialized record fails to decode
#[derive(Debug, Error)]
pub enum RecordError {
    /// Operator tag is not one of "leaf", "and", "or"
    #[error("unknown operator tag: {0}")]
    UnknownTag(String),

    /// A composite-tagged record carried no child records
    #[error("'{0}' record has no children")]
    NoChildren(String),

    /// A leaf-tagged record carried no expression
    #[error("leaf record has no expression")]
    MissingLeaf,
}
