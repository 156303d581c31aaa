// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

/// A helper function callable from inside a compiled expression.
///
/// Receives the already-resolved argument values and produces a result
/// value. What "resolved" means is up to the engine; this crate never
/// invokes helpers itself.
pub type HelperFn =
    Arc<dyn Fn(&[Value]) -> Result<Value, Box<dyn Error + Send + Sync>> + Send + Sync>;

/// Registry of helper functions handed opaquely to the template engine.
///
/// The names registered here are the predicate-function names leaves may
/// reference (`gt`, `le`, `between`, ...). The registry neither validates
/// nor resolves those names; it only carries them to the engine at compile
/// time.
#[derive(Clone, Default)]
pub struct FuncRegistry {
    funcs: HashMap<String, HelperFn>,
}

impl FuncRegistry {
    pub fn new() -> Self {
        Self {
            funcs: HashMap::new(),
        }
    }

    /// Register a helper under the given name, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, func: HelperFn) {
        self.funcs.insert(name.into(), func);
    }

    pub fn get(&self, name: &str) -> Option<&HelperFn> {
        self.funcs.get(name)
    }

    /// Names of all registered helpers, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.funcs.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}

impl std::fmt::Debug for FuncRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuncRegistry")
            .field("funcs", &self.funcs.keys().collect::<Vec<_>>())
            .finish()
    }
}
