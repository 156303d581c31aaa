// SPDX-License-Identifier: MIT

//! Combining operators for tree nodes

use std::fmt;
use std::str::FromStr;

use super::error::RecordError;

/// How a composite node folds its children together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Logical AND
    And,
    /// Logical OR
    Or,
}

impl Operator {
    /// Fold an ordered list of child expressions into one expression.
    ///
    /// The fold peels the first expression and pairs it with the fold of the
    /// rest, producing a right-nested binary expression:
    /// `and (a) (and (b) (c))`. Existing persisted expressions depend on this
    /// exact shape, so the associativity must not change.
    pub fn apply(&self, exprs: &[String]) -> String {
        match exprs {
            [] => String::new(),
            [e] => e.clone(),
            [e0, e1] => format!("{} ({}) ({})", self, e0, e1),
            [e0, rest @ ..] => format!("{} ({}) ({})", self, e0, self.apply(rest)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::And => write!(f, "and"),
            Operator::Or => write!(f, "or"),
        }
    }
}

impl FromStr for Operator {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(Operator::And),
            "or" => Ok(Operator::Or),
            other => Err(RecordError::UnknownTag(other.to_string())),
        }
    }
}
