// SPDX-License-Identifier: MIT

//! The decision tree itself: leaves and composite nodes

use log::trace;

use super::error::TreeError;
use super::operator::Operator;

/// A boolean decision tree.
///
/// Either a terminal predicate leaf or a composite node combining an ordered
/// list of child trees under one operator. Trees are built bottom-up and are
/// never mutated after construction, so a finished tree can be shared across
/// threads for read-only use.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    /// Terminal predicate, stored with its wrapping parentheses
    Leaf(String),
    /// Composite node combining children under an operator
    Node {
        op: Operator,
        children: Vec<Tree>,
    },
}

impl Tree {
    /// Create a leaf holding the given predicate expression.
    ///
    /// The expression is wrapped in parentheses at construction so it binds
    /// as a single token no matter what operator later encloses it. The
    /// expression is assumed, not verified, to be valid syntax for the
    /// external evaluation engine.
    pub fn leaf(expr: impl Into<String>) -> Self {
        Tree::Leaf(format!("({})", expr.into()))
    }

    /// Create a composite node over the given children.
    ///
    /// Order is significant: it fixes the fold order of [`Tree::combine`].
    /// An empty child list is accepted here and rejected at combine time.
    pub fn node(op: Operator, children: Vec<Tree>) -> Self {
        Tree::Node { op, children }
    }

    /// Squash this tree into a single expression string.
    ///
    /// Walks the tree post-order, combining each child before folding the
    /// results with this node's operator. The first failing child aborts the
    /// whole combination. Combining the same tree twice yields identical
    /// strings.
    pub fn combine(&self) -> Result<String, TreeError> {
        match self {
            Tree::Leaf(expr) => Ok(expr.clone()),
            Tree::Node { op, children } => {
                if children.is_empty() {
                    return Err(TreeError::EmptyNode);
                }

                let mut exprs = Vec::with_capacity(children.len());
                for child in children {
                    exprs.push(child.combine()?);
                }

                let combined = op.apply(&exprs);
                trace!("combined {} children under '{}'", exprs.len(), op);
                Ok(combined)
            }
        }
    }
}
