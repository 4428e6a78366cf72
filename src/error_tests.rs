//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug,
//! Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_node_display() {
    let err = Error::InvalidNode("NodeId(4v1)".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid node"));
    assert!(display.contains("NodeId(4v1)"));
}

#[test]
fn test_detached_element_display() {
    let err = Error::DetachedElement("NodeId(2v1)".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Detached element"));
    assert!(display.contains("NodeId(2v1)"));
}

#[test]
fn test_scene_graph_display() {
    let err = Error::SceneGraph("scene lock poisoned".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Scene graph error"));
    assert!(display.contains("scene lock poisoned"));
}

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("layer references stale node".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Initialization failed"));
    assert!(display.contains("layer references stale node"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::SceneGraph("test".to_string());
    // Verify Error implements std::error::Error trait
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err1 = Error::InvalidNode("test".to_string());
    let debug1 = format!("{:?}", err1);
    assert!(debug1.contains("InvalidNode"));

    let err2 = Error::DetachedElement("test".to_string());
    let debug2 = format!("{:?}", err2);
    assert!(debug2.contains("DetachedElement"));
}

#[test]
fn test_error_clone_and_eq() {
    let err = Error::InitializationFailed("test".to_string());
    let cloned = err.clone();
    assert_eq!(err, cloned);
    assert_ne!(err, Error::SceneGraph("test".to_string()));
}

// ============================================================================
// RESULT ALIAS
// ============================================================================

#[test]
fn test_result_alias() {
    fn produces_error() -> Result<()> {
        Err(Error::InvalidNode("missing".to_string()))
    }

    let result = produces_error();
    assert!(result.is_err());
    assert_eq!(result.unwrap_err(), Error::InvalidNode("missing".to_string()));
}
