//! Error types shared across the sortviz workspace.

use std::error::Error;
use std::fmt;

/// A selector name did not match any known option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// No algorithm has this name.
    UnknownAlgorithm {
        /// The rejected input.
        name: String,
    },
    /// No array shape has this name.
    UnknownShape {
        /// The rejected input.
        name: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAlgorithm { name } => write!(
                f,
                "unknown algorithm '{name}' (expected bubble, selection, insertion, merge or quick)"
            ),
            Self::UnknownShape { name } => write!(
                f,
                "unknown array shape '{name}' (expected random, reversed or nearly-sorted)"
            ),
        }
    }
}

impl Error for ParseError {}
