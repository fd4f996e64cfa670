//! Engine errors.

use std::fmt;

/// A required [`SearchConfig`](crate::SearchConfig) slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    Start,
    End,
    Distance,
    Heuristic,
    Neighbors,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start node",
            Self::End => "end node",
            Self::Distance => "distance function",
            Self::Heuristic => "heuristic function",
            Self::Neighbors => "neighbor function",
        })
    }
}

/// Broad class of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// `setup` was called with an incomplete configuration.
    Configuration,
    /// An operation was called in a state that does not allow it.
    Usage,
}

/// Errors raised by the search engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0} cannot be empty")]
    MissingArgument(Argument),
    #[error("cannot reconstruct from end, path not solved")]
    NotSolved,
    #[error("cannot reconstruct from current node, no node expanded yet")]
    NotEvaluated,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument(_) => ErrorKind::Configuration,
            Self::NotSolved | Self::NotEvaluated => ErrorKind::Usage,
        }
    }

    /// The offending slot for configuration errors.
    pub fn argument(&self) -> Option<Argument> {
        match self {
            Self::MissingArgument(arg) => Some(*arg),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
