//! Error types for the dynamic-trees structures.

use thiserror::Error;

/// Result alias used by the fallible (allocating or validating) entry points.
pub type Result<T> = std::result::Result<T, ForestError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForestError {
    /// Node id outside `1..=capacity`.
    #[error("node {node} out of range 1..={capacity}")]
    NodeOutOfRange { node: u32, capacity: u32 },
    /// Backing storage could not be reserved.
    #[error("failed to allocate storage for {requested} nodes")]
    AllocationFailed { requested: u32 },
}
