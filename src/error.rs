//! Error types for the vista2d camera crate
//!
//! This module defines the error types used throughout the crate,
//! covering camera attachment and scene-graph lookups.

use std::fmt;

/// Result type for vista2d operations
pub type Result<T> = std::result::Result<T, Error>;

/// vista2d camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A node id that is not (or is no longer) present in the scene document
    InvalidNode(String),

    /// An element that is not attached below a layer group of the scene root
    DetachedElement(String),

    /// The scene-graph collaborator is unusable (e.g. a poisoned lock)
    SceneGraph(String),

    /// Camera attachment failed
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidNode(msg) => write!(f, "Invalid node: {}", msg),
            Error::DetachedElement(msg) => write!(f, "Detached element: {}", msg),
            Error::SceneGraph(msg) => write!(f, "Scene graph error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
