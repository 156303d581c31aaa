// SPDX-License-Identifier: MIT

pub mod compile;
pub mod engine;
pub mod registry;

pub use compile::{compile, compile_with, CompiledTemplate};
pub use engine::Engine;
pub use registry::{FuncRegistry, HelperFn};
