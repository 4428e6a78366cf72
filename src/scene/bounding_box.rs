//! Axis-aligned bounding boxes in scene coordinates.

use glam::{Affine2, Vec2};

/// Axis-aligned rectangle `{x, y, width, height}` in scene units.
///
/// `(x, y)` is the corner with the smallest coordinates; extents are
/// non-negative. This is the box shape reported by scene-graph geometry
/// queries and written to clip rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    /// Empty box at the origin.
    pub const ZERO: BoundingBox = BoundingBox {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a box from its two extreme corners.
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// Corner with the smallest coordinates.
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Corner with the largest coordinates.
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::from_min_max(self.min().min(other.min()), self.max().max(other.max()))
    }

    /// Transform this box by an affine transform, returning the axis-aligned
    /// box of the result.
    ///
    /// Projects each linear axis onto the box extents instead of
    /// transforming all four corners; exact (tight) for affine transforms.
    pub fn transformed(&self, transform: &Affine2) -> BoundingBox {
        let translation = transform.translation;
        let mut new_min = translation;
        let mut new_max = translation;

        let min = self.min();
        let max = self.max();
        for i in 0..2 {
            let axis = transform.matrix2.col(i);
            let a = axis * min[i];
            let b = axis * max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        BoundingBox::from_min_max(new_min, new_max)
    }
}

#[cfg(test)]
#[path = "bounding_box_tests.rs"]
mod tests;
