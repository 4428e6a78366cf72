//! In-memory scene document.
//!
//! `SceneDocument` is the crate's default `SceneGraph` implementation: a
//! retained tree of nodes with stable slotmap keys, per-node affine
//! transforms, and DOM-style reparenting. It exists so cameras can be
//! driven and tested without an external document backend; hosts that keep
//! their scene elsewhere implement `SceneGraph` over their own storage.

use glam::Affine2;
use rustc_hash::FxHashSet;
use slotmap::SlotMap;

use super::bounding_box::BoundingBox;
use super::path::Path;
use super::scene_graph::{NodeId, NodeKind, SceneGraph};

/// A node in the document tree.
#[derive(Debug, Clone)]
struct SceneNode {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Local transform, applied to this node's content and descendants.
    transform: Affine2,
    /// Id of a clip-path definition limiting this node's rendering.
    clip_reference: Option<String>,
}

impl SceneNode {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            transform: Affine2::IDENTITY,
            clip_reference: None,
        }
    }
}

/// A retained tree of 2D vector scene nodes.
///
/// Nodes are managed via stable keys (`NodeId`); keys remain valid even
/// after other nodes are removed. Attribute writes are recorded in a dirty
/// set so a rendering collaborator can redraw only what changed.
pub struct SceneDocument {
    /// Nodes stored in a slot map for O(1) insert/remove
    nodes: SlotMap<NodeId, SceneNode>,
    /// Top-level group; never removed
    root: NodeId,
    /// Counter feeding generate_unique_id
    next_id: u64,
    /// Nodes whose attributes changed since last take_dirty_nodes()
    dirty_nodes: FxHashSet<NodeId>,
}

impl SceneDocument {
    /// Create an empty document containing only the root group.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(SceneNode::new(NodeKind::Group));
        Self {
            nodes,
            root,
            next_id: 0,
            dirty_nodes: FxHashSet::default(),
        }
    }

    /// Whether `node` is a live id in this document.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    /// Number of live nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Children of a node, in rendering order.
    pub fn children(&self, node: NodeId) -> Option<&[NodeId]> {
        self.nodes.get(node).map(|n| n.children.as_slice())
    }

    /// Payload of a node.
    pub fn node_kind(&self, node: NodeId) -> Option<&NodeKind> {
        self.nodes.get(node).map(|n| &n.kind)
    }

    /// Local transform of a node.
    pub fn transform(&self, node: NodeId) -> Option<Affine2> {
        self.nodes.get(node).map(|n| n.transform)
    }

    /// Clip-path id the node references, if any.
    pub fn clip_reference(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node)?.clip_reference.as_deref()
    }

    /// Polyline payload of a `Path` node, usable as a camera motion path.
    pub fn path(&self, node: NodeId) -> Option<&Path> {
        match &self.nodes.get(node)?.kind {
            NodeKind::Path(path) => Some(path),
            _ => None,
        }
    }

    /// Remove a node and its entire subtree. The root cannot be removed.
    ///
    /// Returns `false` if the id is stale or names the root.
    pub fn remove_node(&mut self, node: NodeId) -> bool {
        if node == self.root || !self.nodes.contains_key(node) {
            return false;
        }
        self.detach(node);

        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            if let Some(removed) = self.nodes.remove(id) {
                pending.extend(removed.children);
            }
            self.dirty_nodes.remove(&id);
        }
        true
    }

    // ===== DIRTY TRACKING =====

    /// Nodes with attribute changes pending since the last take.
    pub fn dirty_nodes(&self) -> &FxHashSet<NodeId> {
        &self.dirty_nodes
    }

    /// Take and clear the dirty node set.
    pub fn take_dirty_nodes(&mut self) -> FxHashSet<NodeId> {
        std::mem::take(&mut self.dirty_nodes)
    }

    // ===== INTERNAL =====

    /// Whether `ancestor` appears on `node`'s parent chain (or is `node`).
    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(id).and_then(|n| n.parent);
        }
        false
    }

    /// Unlink a node from its current parent, if any.
    fn detach(&mut self, child: NodeId) {
        let Some(old_parent) = self.nodes.get_mut(child).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(parent) = self.nodes.get_mut(old_parent) {
            parent.children.retain(|&c| c != child);
        }
    }

    /// Box of a node's geometry and contributing descendants, or `None`
    /// when the subtree has no geometry at all.
    fn content_box(&self, node: NodeId) -> Option<BoundingBox> {
        let n = self.nodes.get(node)?;
        match &n.kind {
            NodeKind::Rect(rect) => Some(*rect),
            NodeKind::Path(path) => path.bounding_box(),
            NodeKind::Group | NodeKind::ClipPath { .. } => {
                let mut acc: Option<BoundingBox> = None;
                for &child in &n.children {
                    // Clip-path definitions do not render into the parent
                    if matches!(
                        self.nodes.get(child).map(|c| &c.kind),
                        Some(NodeKind::ClipPath { .. })
                    ) {
                        continue;
                    }
                    if let Some(child_box) = self.content_box(child) {
                        let transform = self.nodes[child].transform;
                        let child_box = child_box.transformed(&transform);
                        acc = Some(match acc {
                            Some(total) => total.union(&child_box),
                            None => child_box,
                        });
                    }
                }
                acc
            }
        }
    }

    /// Whether any clip-path definition already uses `id`.
    fn has_clip_id(&self, id: &str) -> bool {
        self.nodes
            .values()
            .any(|n| matches!(&n.kind, NodeKind::ClipPath { id: existing } if existing == id))
    }
}

impl Default for SceneDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph for SceneDocument {
    fn root(&self) -> NodeId {
        self.root
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node)?.parent
    }

    fn bounding_box(&self, node: NodeId) -> Option<BoundingBox> {
        if !self.nodes.contains_key(node) {
            return None;
        }
        // A geometry-free subtree reports an empty box at the origin
        Some(self.content_box(node).unwrap_or(BoundingBox::ZERO))
    }

    fn cumulative_transform(&self, node: NodeId) -> Option<Affine2> {
        let n = self.nodes.get(node)?;
        let mut transform = n.transform;
        let mut current = n.parent;
        while let Some(id) = current {
            let parent = self.nodes.get(id)?;
            transform = parent.transform * transform;
            current = parent.parent;
        }
        Some(transform)
    }

    fn create_node(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.insert(SceneNode::new(kind))
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return false;
        }
        if child == self.root || self.is_ancestor(child, parent) {
            return false;
        }
        self.detach(child);
        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
        self.dirty_nodes.insert(parent);
        true
    }

    fn set_transform(&mut self, node: NodeId, transform: Affine2) -> bool {
        if let Some(n) = self.nodes.get_mut(node) {
            n.transform = transform;
            self.dirty_nodes.insert(node);
            true
        } else {
            false
        }
    }

    fn set_rect(&mut self, node: NodeId, rect: BoundingBox) -> bool {
        match self.nodes.get_mut(node) {
            Some(n) => {
                if let NodeKind::Rect(existing) = &mut n.kind {
                    *existing = rect;
                    self.dirty_nodes.insert(node);
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }

    fn set_clip_reference(&mut self, node: NodeId, clip_id: &str) -> bool {
        if let Some(n) = self.nodes.get_mut(node) {
            n.clip_reference = Some(clip_id.to_string());
            self.dirty_nodes.insert(node);
            true
        } else {
            false
        }
    }

    fn generate_unique_id(&mut self, prefix: &str) -> String {
        loop {
            let candidate = format!("{}{}", prefix, self.next_id);
            self.next_id += 1;
            if !self.has_clip_id(&candidate) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
