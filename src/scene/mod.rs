//! Scene collaborator module
//!
//! Provides the scene-graph capability interface consumed by cameras, the
//! geometry value types shared across the crate, and an in-memory scene
//! document implementation.

mod bounding_box;
mod document;
mod layer;
mod path;
mod scene_graph;

pub use bounding_box::BoundingBox;
pub use document::SceneDocument;
pub use layer::Layer;
pub use path::Path;
pub use scene_graph::{NodeId, NodeKind, SceneGraph};
