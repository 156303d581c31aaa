// SPDX-License-Identifier: MIT

//! Squashing a tree into engine-ready template source

use log::debug;

use super::engine::Engine;
use super::registry::FuncRegistry;
use crate::tree::{Tree, TreeError};

/// Expression source wrapped in the engine's delimiters, ready to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    source: String,
}

impl CompiledTemplate {
    /// The wrapped source, e.g. `{{ and ((gt .X 1)) ((lt .X 9)) }}`.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Combine a tree and wrap the result in template delimiters.
pub fn compile(root: &Tree) -> Result<CompiledTemplate, TreeError> {
    let expr = root.combine()?;
    debug!("compiled tree to {} byte expression", expr.len());
    Ok(CompiledTemplate {
        source: format!("{{{{ {} }}}}", expr),
    })
}

/// Combine a tree and hand the wrapped source to an engine for parsing.
///
/// `funcs` is passed through to the engine uninterpreted. A combine failure
/// or an engine parse failure aborts compilation; the engine's error is
/// propagated unchanged.
pub fn compile_with<E: Engine>(
    root: &Tree,
    engine: &E,
    funcs: &FuncRegistry,
) -> Result<E::Program, TreeError> {
    let template = compile(root)?;
    engine
        .parse(template.source(), funcs)
        .map_err(TreeError::Engine)
}
