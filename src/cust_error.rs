//! This module contains all custom errors used in this library.

use std::fmt;
use std::error::Error;

/// Errors raised synchronously by graph construction and mutation.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum ValidationError {
    /// An edge references a vertex that is not part of the graph.
    UnknownVertex(usize),
    /// The edge is already present.
    DuplicateEdge(usize, usize),
    /// Both endpoints of a bipartite edge fall on the same side.
    SameSideEdge(usize, usize),
    /// A vertex appears in both sides of a bipartite partition.
    SidesNotDisjoint(usize),
    /// Directed edges must not self-loop.
    DirectedSelfLoop(usize),
    /// A self-loop can never be covered by a biclique.
    LoopInCoverTarget(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVertex(v) => write!(f, "Validation: vertex {} is not in the graph.", v),
            Self::DuplicateEdge(u, v) => write!(f, "Validation: edge ({}, {}) already exists.", u, v),
            Self::SameSideEdge(u, v) => write!(f, "Validation: edge ({}, {}) does not connect both sides.", u, v),
            Self::SidesNotDisjoint(v) => write!(f, "Validation: vertex {} appears in both sides.", v),
            Self::DirectedSelfLoop(v) => write!(f, "Validation: directed edge ({}, {}) self-loops.", v, v),
            Self::LoopInCoverTarget(v) => write!(f, "Validation: self-loop at {} can not be covered by a biclique.", v),
        }
    }
}

impl Error for ValidationError {}

/// Errors raised by the solvers.
///
/// An exhausted bounded search (no cover of size <= `max_k`) is *not* an error and is reported
/// as `Ok(None)` by the respective solver.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum ProcessingError {
    InvalidParameter(String),
    /// The bitmask solver addresses at most `limit` edges.
    EdgeLimitExceeded { edges: usize, limit: usize },
    /// The satisfiability oracle failed.
    OracleFailure(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Self::EdgeLimitExceeded { edges, limit } =>
                write!(f, "Edge limit exceeded: {} edges, the bitmask solver addresses at most {}.", edges, limit),
            Self::OracleFailure(msg) => write!(f, "Oracle failure: {}", msg),
        }
    }
}

impl Error for ProcessingError {}

/// Errors raised while reading an edge list from an input stream.
#[derive(Debug)]
pub enum ImportError {
    IoError(std::io::Error),
    InputMalformedError,
    BadIntError(std::num::ParseIntError),
    BadGraphError(ValidationError),
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> ImportError {
        ImportError::IoError(e)
    }
}

impl From<std::num::ParseIntError> for ImportError {
    fn from(e: std::num::ParseIntError) -> ImportError {
        ImportError::BadIntError(e)
    }
}

impl From<ValidationError> for ImportError {
    fn from(e: ValidationError) -> ImportError {
        ImportError::BadGraphError(e)
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(_) => write!(f, "Import: IoError"),
            Self::InputMalformedError => write!(f, "Import: Input is malformed."),
            Self::BadIntError(_) => write!(f, "Import: Integer is malformed."),
            Self::BadGraphError(e) => write!(f, "Import: {}", e),
        }
    }
}

impl Error for ImportError {}
