//! Error types for route network analysis.

use thiserror::Error;

/// Error type for route network operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested node isn't part of the graph.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// A comparison asked for more ranked entries than a network provides.
    #[error("insufficient data: {network} has {available} ranked entries, {requested} requested")]
    InsufficientData {
        network: String,
        requested: usize,
        available: usize,
    },

    /// A route lists its origin as its own destination.
    #[error("malformed route map: {0} lists itself as a destination")]
    SelfLoop(String),

    /// An airport code failed validation.
    #[error("invalid airport code: {0:?}")]
    InvalidCode(String),
}

/// Result type for route network operations.
pub type Result<T> = std::result::Result<T, Error>;
