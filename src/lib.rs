/*!
# Vista 2D Camera

Virtual camera over layered 2D vector scenes.

This crate tracks a rectangular viewing frame (center, size, rotation, clip
flag) anchored to one layer of a multi-layer scene, computes that frame from
scene-element geometry, and interpolates smoothly between two camera states
to drive frame-by-frame animation. The scene itself is reached through a
capability trait; the crate ships an in-memory document as the default
implementation.

## Architecture

- **CameraState**: pure frame geometry — fit to the root or an element,
  copy, interpolate (quadratic zoom, motion paths, shortest-arc rotation)
- **Camera**: binds a state to one layer and keeps that layer's wrapper
  groups and clip rectangle synchronized with it
- **SceneGraph**: capability trait over the scene document (geometry
  queries, node creation, attribute writes)
- **SceneDocument**: retained in-memory scene tree implementing SceneGraph

Hosts own the cameras and the animation clock; this crate owns no timing,
persistence, or input handling.
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;
pub mod scene;

// Main vista2d namespace module
pub mod vista2d {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera types
    pub use crate::camera::{Camera, CameraState, Viewport};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: vista_* macros are exported at the crate root
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
