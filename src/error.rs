//! Error types for instance loading and solution-pool access.
//!
//! Only conditions a host can trigger are represented here. A tour that stops
//! being a permutation after an operator call is an internal bug and is caught
//! by assertions instead.

use thiserror::Error;

/// Errors raised while loading instances or driving the solution pool.
#[derive(Debug, Error)]
pub enum HyperHeuristicError {
    /// The instance has no depot (preparation area) record.
    #[error("instance has no depot record")]
    MissingDepot,

    /// The instance has no visitable locations.
    #[error("instance has no visitable locations")]
    EmptyInstance,

    /// A location identifier does not resolve to a location of the instance.
    #[error("unknown location id {id}")]
    UnknownLocation {
        /// The unresolved identifier.
        id: usize,
    },

    /// Location identifiers must be dense and match their position.
    #[error("location at position {index} has id {id}")]
    NonContiguousId {
        /// Position in the location list.
        index: usize,
        /// Identifier found at that position.
        id: usize,
    },

    /// Malformed instance text.
    #[error("parse error at line {line}: {cause}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// What went wrong.
        cause: String,
    },

    /// I/O failure while reading an instance or writing a result.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A slot index beyond the current pool size.
    #[error("slot {slot} out of range for pool of size {size}")]
    InvalidSlot {
        /// Requested slot.
        slot: usize,
        /// Current pool size.
        size: usize,
    },

    /// A slot that has never been initialised or written.
    #[error("slot {slot} holds no solution")]
    EmptySlot {
        /// Requested slot.
        slot: usize,
    },

    /// A heuristic index that cannot be applied on the requested path.
    #[error("heuristic {index} is not applicable here")]
    InvalidHeuristic {
        /// Requested heuristic index.
        index: usize,
    },

    /// No solution has been recorded yet.
    #[error("no solution has been recorded")]
    NoSolution,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, HyperHeuristicError>;
