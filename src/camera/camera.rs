//! Per-layer camera — applies a camera state to scene nodes.

use std::sync::{Arc, Mutex};

use glam::{Affine2, Vec2};

use crate::error::{Error, Result};
use crate::scene::{BoundingBox, Layer, NodeId, NodeKind, Path, SceneGraph};
use crate::{vista_info, vista_trace};

use super::camera_state::CameraState;
use super::viewport::Viewport;

/// A camera bound to one layer of the scene.
///
/// On attachment the camera wraps every top-level node of its layer in a
/// dedicated transform group, nested under a clipped group that references a
/// freshly created clip rectangle. `update` then keeps those nodes in sync
/// with the current state: the wrapper transforms place the frame on screen
/// and the clip rectangle covers either the frame or the whole viewport.
///
/// Cameras are owned and driven by the host viewport; the scene document is
/// shared with them, but the clip rectangle and the wrapper groups belong to
/// the camera alone.
pub struct Camera {
    state: CameraState,
    scene: Arc<Mutex<dyn SceneGraph>>,
    layer: Arc<Layer>,
    viewport: Viewport,
    /// Read by the UI to route pointer gestures; not interpreted here
    selected: bool,
    /// Clip rectangle node, rewritten on every update
    clip_rect: NodeId,
    /// One wrapper group per layer node; wrapper i wraps layer node i
    transform_groups: Vec<NodeId>,
}

impl std::fmt::Debug for Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Camera")
            .field("state", &self.state)
            .field("layer", &self.layer)
            .field("viewport", &self.viewport)
            .field("selected", &self.selected)
            .field("clip_rect", &self.clip_rect)
            .field("transform_groups", &self.transform_groups)
            .finish()
    }
}

impl Camera {
    /// Attach a camera to a layer.
    ///
    /// Starts from the default full-scene frame, then inserts the camera's
    /// grouping nodes into the shared scene: a clip rectangle inside a
    /// uniquely-id'd clip-path definition, a clipped group referencing that
    /// id, and one transform group wrapping each layer node.
    ///
    /// # Errors
    ///
    /// * `Error::InitializationFailed` - a layer node id is stale
    /// * `Error::SceneGraph` - the scene lock is poisoned
    pub fn new(
        scene: Arc<Mutex<dyn SceneGraph>>,
        viewport: Viewport,
        layer: Arc<Layer>,
    ) -> Result<Self> {
        let (state, clip_rect, transform_groups) = {
            let mut doc = scene
                .lock()
                .map_err(|_| Self::log_and_return_error(Error::SceneGraph("scene lock poisoned".to_string())))?;

            let state = CameraState::from_root(&*doc)?;
            let root = doc.root();

            // Clip rectangle and its uniquely-named clip-path definition
            let clip_rect = doc.create_node(NodeKind::Rect(BoundingBox::ZERO));
            let clip_id = doc.generate_unique_id("camera-clip-");
            let clip_path = doc.create_node(NodeKind::ClipPath { id: clip_id.clone() });
            doc.append_child(clip_path, clip_rect);
            doc.append_child(root, clip_path);

            // The group that supports the clipping operation
            let clipped_group = doc.create_node(NodeKind::Group);
            doc.set_clip_reference(clipped_group, &clip_id);
            doc.append_child(root, clipped_group);

            // The groups that support the frame transformations
            let mut transform_groups = Vec::with_capacity(layer.nodes().len());
            for &node in layer.nodes() {
                let group = doc.create_node(NodeKind::Group);
                if !doc.append_child(group, node) {
                    return Err(Self::log_and_return_error(Error::InitializationFailed(
                        format!("layer '{}' references stale node {node:?}", layer.label()),
                    )));
                }
                doc.append_child(clipped_group, group);
                transform_groups.push(group);
            }

            (state, clip_rect, transform_groups)
        };

        vista_info!(
            "vista2d::Camera",
            "camera attached to layer '{}' ({} nodes)",
            layer.label(),
            transform_groups.len()
        );

        Ok(Self {
            state,
            scene,
            layer,
            viewport,
            selected: true,
            clip_rect,
            transform_groups,
        })
    }

    // ===== GETTERS =====

    /// Current frame geometry.
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// The layer this camera animates.
    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    /// Whether the UI currently routes gestures to this camera.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Owner viewport size this camera last saw.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The clip rectangle node owned by this camera.
    pub fn clip_rect(&self) -> NodeId {
        self.clip_rect
    }

    /// Wrapper groups, one per layer node, in layer order.
    pub fn transform_groups(&self) -> &[NodeId] {
        &self.transform_groups
    }

    /// Uniform scale that fits the frame inside the viewport while
    /// preserving aspect ratio (letterboxing).
    ///
    /// Computed on demand so viewport resizes are always honored.
    pub fn scale(&self) -> f32 {
        (self.viewport.width / self.state.width()).min(self.viewport.height / self.state.height())
    }

    // ===== SETTERS =====

    pub fn set_selected(&mut self, selected: bool) -> &mut Self {
        self.selected = selected;
        self
    }

    /// Record the owner's current size. Call `update` afterwards to re-fit
    /// the frame on screen.
    pub fn set_viewport(&mut self, viewport: Viewport) -> &mut Self {
        self.viewport = viewport;
        self
    }

    // ===== STATE APPLICATION =====

    /// Copy a state and synchronize the scene.
    pub fn set_at_state(&mut self, state: &CameraState) -> &mut Self {
        self.state.set_at_state(state);
        self.update()
    }

    /// Fit the frame to a scene element, then synchronize the scene.
    ///
    /// # Errors
    ///
    /// Propagates `CameraState::set_at_element` failures; also fails with
    /// `Error::SceneGraph` if the scene lock is poisoned.
    pub fn set_at_element(&mut self, element: NodeId) -> Result<&mut Self> {
        {
            let doc = self
                .scene
                .lock()
                .map_err(|_| Self::log_and_return_error(Error::SceneGraph("scene lock poisoned".to_string())))?;
            self.state.set_at_element(&*doc, element)?;
        }
        Ok(self.update())
    }

    /// Blend the frame between two states; see `CameraState::interpolate`.
    ///
    /// Does not touch the scene — the animation loop calls `update` once
    /// per tick after positioning every camera.
    pub fn interpolate(
        &mut self,
        initial: &CameraState,
        final_state: &CameraState,
        progress: f32,
        relative_zoom: f32,
        path: Option<&Path>,
        reverse_path: bool,
    ) -> &mut Self {
        self.state
            .interpolate(initial, final_state, progress, relative_zoom, path, reverse_path);
        self
    }

    // ===== INTERACTION =====

    /// Rotate the frame by `delta` degrees and synchronize the scene.
    pub fn rotate(&mut self, delta: f32) -> &mut Self {
        let angle = self.state.angle() + delta;
        self.state.set_angle(angle);
        self.update()
    }

    /// Zoom by `factor` (> 0), keeping the screen point `(x, y)` fixed.
    pub fn zoom(&mut self, factor: f32, x: f32, y: f32) -> &mut Self {
        self.state
            .set_size(self.state.width() / factor, self.state.height() / factor);
        let center = self.viewport.center();
        self.drag(
            (1.0 - factor) * (x - center.x),
            (1.0 - factor) * (y - center.y),
        )
    }

    /// Pan by a screen-space delta and synchronize the scene.
    ///
    /// The delta is rotated back into scene coordinates and divided by the
    /// current scale, so content follows the pointer exactly. Panning
    /// un-clips the frame.
    pub fn drag(&mut self, delta_x: f32, delta_y: f32) -> &mut Self {
        let scale = self.scale();
        let (sin, cos) = self.state.angle().to_radians().sin_cos();
        self.state.set_clipped(false);
        let center = self.state.center()
            - Vec2::new(
                (delta_x * cos - delta_y * sin) / scale,
                (delta_x * sin + delta_y * cos) / scale,
            );
        self.state.set_center(center);
        self.update()
    }

    /// Recompute and apply the on-screen transform and clip geometry.
    ///
    /// Writes the clip rectangle (the centered frame when clipped, the full
    /// viewport otherwise) and gives every wrapper group the composed
    /// transform: scale, then translate, then rotate by `-angle` about the
    /// camera center. The rotation is expressed in pre-scale coordinates,
    /// matching the order a renderer applies the transform list in.
    pub fn update(&mut self) -> &mut Self {
        let scale = self.scale();

        // Size and location of the frame on the screen
        let width = self.state.width() * scale;
        let height = self.state.height() * scale;
        let x = (self.viewport.width - width) / 2.0;
        let y = (self.viewport.height - height) / 2.0;

        let clip = if self.state.clipped() {
            BoundingBox::new(x, y, width, height)
        } else {
            BoundingBox::new(0.0, 0.0, self.viewport.width, self.viewport.height)
        };

        let center = self.state.center();
        let translation = Vec2::new(
            -center.x + self.state.width() / 2.0 + x / scale,
            -center.y + self.state.height() / 2.0 + y / scale,
        );

        let transform = Affine2::from_scale(Vec2::splat(scale))
            * Affine2::from_translation(translation)
            * Affine2::from_translation(center)
            * Affine2::from_angle(-self.state.angle().to_radians())
            * Affine2::from_translation(-center);

        {
            let mut doc = self.scene.lock().unwrap();
            doc.set_rect(self.clip_rect, clip);
            for &group in &self.transform_groups {
                doc.set_transform(group, transform);
            }
        }

        vista_trace!(
            "vista2d::Camera",
            "update: scale {:.3}, angle {:.1}",
            scale,
            self.state.angle()
        );

        self
    }

    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        crate::vista_error!("vista2d::Camera", "{}", error);
        error
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
