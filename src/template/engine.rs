// SPDX-License-Identifier: MIT

use std::error::Error;

use super::registry::FuncRegistry;

/// The external template/expression engine boundary.
///
/// This crate only emits expression source; parsing and evaluating it is the
/// engine's job. An implementation receives the delimiter-wrapped source
/// (`{{ ... }}`) together with the caller's helper-function table and turns
/// it into whatever executable form it uses.
///
/// Engine failures (an unregistered helper name, malformed source) are
/// returned as-is and propagated unchanged by [`compile_with`].
///
/// [`compile_with`]: super::compile_with
pub trait Engine {
    /// The engine's executable expression type
    type Program;

    /// Parse the wrapped expression source into an executable program.
    fn parse(
        &self,
        source: &str,
        funcs: &FuncRegistry,
    ) -> Result<Self::Program, Box<dyn Error + Send + Sync>>;
}
