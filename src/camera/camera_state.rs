//! Camera state — the pure geometry of a viewing frame.

use glam::Vec2;

use crate::error::{Error, Result};
use crate::scene::{NodeId, Path, SceneGraph};

/// A rectangular viewing frame over the scene: center, size, rotation, and
/// clip flag.
///
/// `CameraState` computes geometry only. Applying a state to scene nodes is
/// the job of [`super::Camera`]; states themselves are cheap values that the
/// host copies around freely (e.g. one per stored presentation frame).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Frame center, in scene coordinates
    center: Vec2,
    /// Frame width, in scene units
    width: f32,
    /// Frame height, in scene units
    height: f32,
    /// Rotation in degrees, normalized to (-180, 180]
    angle: f32,
    /// Hard-clip content to the frame rectangle
    clipped: bool,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            width: 0.0,
            height: 0.0,
            angle: 0.0,
            clipped: false,
        }
    }
}

/// Map any angle in degrees onto the equivalent value in `(-180, 180]`.
fn normalize_angle(angle: f32) -> f32 {
    180.0 - (180.0 - angle).rem_euclid(360.0)
}

impl CameraState {
    /// Frame with the given center and size, unrotated and unclipped.
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
            ..Self::default()
        }
    }

    /// Default full-scene frame: the bounding box of the document root.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidNode` if the scene reports no root geometry.
    pub fn from_root(scene: &dyn SceneGraph) -> Result<Self> {
        let root = scene.root();
        let bbox = scene
            .bounding_box(root)
            .ok_or_else(|| Self::log_and_return_error(Error::InvalidNode("scene root".to_string())))?;
        Ok(Self::new(bbox.center(), bbox.width, bbox.height))
    }

    // ===== GETTERS =====

    /// Frame center, in scene coordinates.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Frame width, in scene units.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Frame height, in scene units.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Rotation in degrees, in `(-180, 180]`.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Whether content is hard-clipped to the frame rectangle.
    pub fn clipped(&self) -> bool {
        self.clipped
    }

    // ===== SETTERS =====

    pub fn set_center(&mut self, center: Vec2) -> &mut Self {
        self.center = center;
        self
    }

    pub fn set_size(&mut self, width: f32, height: f32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn set_clipped(&mut self, clipped: bool) -> &mut Self {
        self.clipped = clipped;
        self
    }

    /// Set the rotation angle, normalizing any real input into
    /// `(-180, 180]`.
    pub fn set_angle(&mut self, angle: f32) -> &mut Self {
        self.angle = normalize_angle(angle);
        self
    }

    // ===== GEOMETRY OPERATIONS =====

    /// Fit the frame to a scene element's transformed bounding box.
    ///
    /// The element's box is measured in its local coordinates, then mapped
    /// through its transform relative to the enclosing layer group (the
    /// ancestor sitting directly below a child of the root). The frame picks
    /// up the isotropic scale and rotation that transform carries.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidNode` - `element` (or an ancestor) is a stale id
    /// * `Error::DetachedElement` - `element` is not attached below a layer
    ///   group of the scene root
    pub fn set_at_element(
        &mut self,
        scene: &dyn SceneGraph,
        element: NodeId,
    ) -> Result<&mut Self> {
        let bbox = scene
            .bounding_box(element)
            .ok_or_else(|| Self::log_and_return_error(Error::InvalidNode(format!("{element:?}"))))?;

        // Nearest ancestor sitting directly below a child of the root: the
        // transform group of the layer containing the element
        let root = scene.root();
        let mut group = element;
        loop {
            let parent = scene.parent(group).ok_or_else(|| {
                Self::log_and_return_error(Error::DetachedElement(format!("{element:?}")))
            })?;
            let grandparent = scene.parent(parent).ok_or_else(|| {
                Self::log_and_return_error(Error::DetachedElement(format!("{element:?}")))
            })?;
            if grandparent == root {
                break;
            }
            group = parent;
        }

        let layer_transform = scene.cumulative_transform(group).ok_or_else(|| {
            Self::log_and_return_error(Error::InvalidNode(format!("{group:?}")))
        })?;
        let element_transform = scene.cumulative_transform(element).ok_or_else(|| {
            Self::log_and_return_error(Error::InvalidNode(format!("{element:?}")))
        })?;

        // Element transform relative to its layer group
        let matrix = layer_transform.inverse() * element_transform;

        // Isotropic scale and rotation carried by the first linear column
        let x_axis = matrix.matrix2.x_axis;
        let scale = x_axis.length();

        self.center = matrix.transform_point2(bbox.center());
        self.width = bbox.width * scale;
        self.height = bbox.height * scale;
        self.angle = x_axis.y.atan2(x_axis.x).to_degrees();

        Ok(self)
    }

    /// Copy every field from another state.
    pub fn set_at_state(&mut self, state: &CameraState) -> &mut Self {
        *self = *state;
        self
    }

    /// Blend between two states at the given progress fraction.
    ///
    /// * `progress` - 0 yields `initial`, 1 yields `final_state`; values
    ///   outside `[0, 1]` extrapolate, unclamped.
    /// * `relative_zoom` - 0 interpolates sizes linearly; otherwise sizes
    ///   follow a parabola through both endpoints whose vertex is the pivot
    ///   size `max(u0, u1) * (1 + rz)` (positive `rz`) or
    ///   `min(u0, u1) * (1 - rz)` (negative `rz`), producing the
    ///   zoom-out-pan-zoom-in effect. The pivot must lie outside the
    ///   endpoint range; callers supply `relative_zoom` only for such
    ///   transitions.
    /// * `path` - optional motion path for the center. The center follows
    ///   the path point at `length * progress` (reversed if `reverse_path`)
    ///   plus the interpolated offset between each endpoint center and the
    ///   corresponding path end, so element centers need not coincide with
    ///   the path's endpoints.
    ///
    /// The angle takes the shortest rotational direction: a transition is
    /// never more than a half turn.
    pub fn interpolate(
        &mut self,
        initial: &CameraState,
        final_state: &CameraState,
        progress: f32,
        relative_zoom: f32,
        path: Option<&Path>,
        reverse_path: bool,
    ) -> &mut Self {
        let remaining = 1.0 - progress;

        let linear = |initial: f32, final_value: f32| final_value * progress + initial * remaining;

        let quadratic = |u0: f32, u1: f32| {
            let um = if relative_zoom > 0.0 {
                u0.max(u1) * (1.0 + relative_zoom)
            } else {
                u0.min(u1) * (1.0 - relative_zoom)
            };
            let du0 = u0 - um;
            let du1 = u1 - um;
            let r = (du0 / du1).sqrt();
            let tm = r / (1.0 + r);
            let k = du0 / tm / tm;
            let dt = progress - tm;
            k * dt * dt + um
        };

        // Frame size
        if relative_zoom != 0.0 {
            self.width = quadratic(initial.width, final_state.width);
            self.height = quadratic(initial.height, final_state.height);
        } else {
            self.width = linear(initial.width, final_state.width);
            self.height = linear(initial.height, final_state.height);
        }

        // Frame center
        if let Some(path) = path {
            let length = path.length();
            let start = path.point_at(if reverse_path { length } else { 0.0 });
            let end = path.point_at(if reverse_path { 0.0 } else { length });
            let current = path.point_at(length * if reverse_path { remaining } else { progress });

            self.center = Vec2::new(
                current.x + linear(initial.center.x - start.x, final_state.center.x - end.x),
                current.y + linear(initial.center.y - start.y, final_state.center.y - end.y),
            );
        } else {
            self.center = Vec2::new(
                linear(initial.center.x, final_state.center.x),
                linear(initial.center.y, final_state.center.y),
            );
        }

        // Frame angle, along the smallest arc between the two states.
        // Intermediate values may leave (-180, 180]; only set_angle
        // normalizes.
        let delta = final_state.angle - initial.angle;
        self.angle = if delta > 180.0 {
            linear(initial.angle, final_state.angle - 360.0)
        } else if delta < -180.0 {
            linear(initial.angle - 360.0, final_state.angle)
        } else {
            linear(initial.angle, final_state.angle)
        };

        self
    }

    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        crate::vista_error!("vista2d::CameraState", "{}", error);
        error
    }
}

#[cfg(test)]
#[path = "camera_state_tests.rs"]
mod tests;
