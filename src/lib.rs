// SPDX-License-Identifier: MIT

//! logictree builds boolean decision trees out of predicate leaves and
//! AND/OR nodes, compiles them into a single template expression, and
//! round-trips them through a JSON record form.
//!
//! ```
//! use logictree::tree::{Operator, Tree};
//!
//! let milk = Tree::node(
//!     Operator::And,
//!     vec![Tree::leaf("ge .Milk 4"), Tree::leaf("le .Milk 6")],
//! );
//! let tree = Tree::node(Operator::Or, vec![milk, Tree::leaf("gt .Toothpaste 5")]);
//!
//! let expr = tree.combine().unwrap();
//! assert!(expr.starts_with("or "));
//! ```
//!
//! The template engine that ultimately evaluates a compiled expression is an
//! external collaborator behind [`template::Engine`]; this crate only emits
//! the expression source.

pub mod template;
pub mod tree;

pub use template::{compile, compile_with, CompiledTemplate, Engine, FuncRegistry, HelperFn};
pub use tree::{Operator, Tree, TreeError};
