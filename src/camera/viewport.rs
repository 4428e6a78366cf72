//! Viewport dimensions supplied by the owning display surface.

use glam::Vec2;

/// On-screen size of the area a camera projects into, in pixels.
///
/// Cameras keep a copy of the owner's current size; the host refreshes it
/// with `Camera::set_viewport` when the surface is resized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point of the viewport in screen coordinates.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
