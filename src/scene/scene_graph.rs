//! Scene-graph capability interface.
//!
//! Cameras consume the scene document exclusively through the [`SceneGraph`]
//! trait: geometry queries (bounding box, cumulative transform), node
//! creation for clip shapes and wrapper groups, and attribute writes. The
//! crate ships [`super::SceneDocument`] as the default implementation;
//! hosts with their own retained scene can implement the trait instead.

use glam::Affine2;
use slotmap::new_key_type;

use super::bounding_box::BoundingBox;
use super::path::Path;

new_key_type! {
    /// Stable key identifying a node in a scene document.
    ///
    /// Keys remain valid until the node is removed; a key for a removed
    /// node is never reported as some other node.
    pub struct NodeId;
}

/// Payload of a scene node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Plain container; children render in document order.
    Group,

    /// Axis-aligned rectangle, in local coordinates.
    Rect(BoundingBox),

    /// Polyline shape; also usable as a camera motion path.
    Path(Path),

    /// Clip-path definition. Its content defines a clip region, does not
    /// render, and does not contribute to ancestor bounding boxes.
    ClipPath {
        /// Document-unique id referenced by clipped groups.
        id: String,
    },
}

/// Capability interface over a retained 2D vector scene.
///
/// Queries return `None` for stale node ids; mutators return `false`
/// instead of failing. Callers that require a failure report wrap these
/// results themselves (see `Camera::new`).
pub trait SceneGraph {
    /// Top-level container of the document.
    fn root(&self) -> NodeId;

    /// Parent of `node`; `None` for the root or a stale id.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Bounding box of a node's own geometry plus its descendants, in the
    /// node's local coordinates: children's transforms are applied, the
    /// node's own transform is not. Clip-path subtrees are excluded.
    fn bounding_box(&self, node: NodeId) -> Option<BoundingBox>;

    /// Transform from the node's local coordinates to document coordinates:
    /// the product of every ancestor transform down to and including the
    /// node's own.
    fn cumulative_transform(&self, node: NodeId) -> Option<Affine2>;

    /// Create a detached node with the identity transform.
    fn create_node(&mut self, kind: NodeKind) -> NodeId;

    /// Attach `child` as the last child of `parent`, detaching it from any
    /// previous parent first. Returns `false` if either id is stale or the
    /// move would create a cycle.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool;

    /// Replace the node's local transform.
    fn set_transform(&mut self, node: NodeId, transform: Affine2) -> bool;

    /// Overwrite the geometry of a `Rect` node. Returns `false` for a stale
    /// id or a non-rect node.
    fn set_rect(&mut self, node: NodeId, rect: BoundingBox) -> bool;

    /// Point the node at a clip-path definition by id; content outside the
    /// referenced region is not rendered.
    fn set_clip_reference(&mut self, node: NodeId, clip_id: &str) -> bool;

    /// Produce an id starting with `prefix` that no clip-path definition in
    /// the document currently uses.
    fn generate_unique_id(&mut self, prefix: &str) -> String;
}
