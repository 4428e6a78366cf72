//! Layers — named groups of scene nodes animated as one unit.

use super::scene_graph::NodeId;

/// A named, ordered collection of scene nodes treated as one animatable
/// unit.
///
/// Layers are discovered by the host (loader or editor) and shared with
/// cameras through `Arc`; a camera never owns its layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    label: String,
    nodes: Vec<NodeId>,
}

impl Layer {
    pub fn new(label: impl Into<String>, nodes: Vec<NodeId>) -> Self {
        Self {
            label: label.into(),
            nodes,
        }
    }

    /// Human-readable layer name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Top-level nodes of the layer, in rendering order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }
}
