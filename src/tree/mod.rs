// SPDX-License-Identifier: MIT

//! Boolean decision trees and their textual combination
//!
//! Trees are built bottom-up from predicate leaves and AND/OR nodes, then
//! squashed into a single expression string:
//!
//! ```
//! use logictree::tree::{Operator, Tree};
//!
//! let tree = Tree::node(
//!     Operator::And,
//!     vec![Tree::leaf("ge .Milk 4"), Tree::leaf("le .Milk 6")],
//! );
//! assert_eq!(tree.combine().unwrap(), "and ((ge .Milk 4)) ((le .Milk 6))");
//! ```

pub mod codec;
pub mod error;
pub mod node;
pub mod operator;

pub use codec::{decode, encode, from_json, to_json, to_json_pretty, TreeRecord};
pub use error::{RecordError, TreeError};
pub use node::Tree;
pub use operator::Operator;
