//! Motion paths — arclength-sampled polylines.

use glam::Vec2;

use super::bounding_box::BoundingBox;

/// An arclength-parameterized polyline.
///
/// Supports the two queries camera interpolation needs: total length and
/// point-at-distance. Distances outside `[0, length]` clamp to the
/// endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Vec2>,
    /// Cumulative arclength at each vertex; same length as `points`.
    lengths: Vec<f32>,
}

impl Path {
    pub fn new(points: Vec<Vec2>) -> Self {
        let mut lengths = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (i, point) in points.iter().enumerate() {
            if i > 0 {
                total += point.distance(points[i - 1]);
            }
            lengths.push(total);
        }
        Self { points, lengths }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Total arclength of the polyline.
    pub fn length(&self) -> f32 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Point at the given arclength from the start.
    ///
    /// Distances are clamped to `[0, length]`. An empty path samples to the
    /// origin; a single-point path samples to that point.
    pub fn point_at(&self, distance: f32) -> Vec2 {
        let Some((&first, rest)) = self.points.split_first() else {
            return Vec2::ZERO;
        };
        if rest.is_empty() || distance <= 0.0 {
            return first;
        }

        let distance = distance.min(self.length());
        // First vertex at or beyond the requested distance
        let i = self.lengths.partition_point(|&l| l < distance);
        if i == 0 {
            return first;
        }

        let (a, b) = (self.points[i - 1], self.points[i]);
        let (la, lb) = (self.lengths[i - 1], self.lengths[i]);
        if lb - la <= f32::EPSILON {
            // Degenerate (duplicate-point) segment
            return b;
        }
        a.lerp(b, (distance - la) / (lb - la))
    }

    /// Axis-aligned box of the path's vertices, `None` for an empty path.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let (&first, rest) = self.points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        Some(BoundingBox::from_min_max(min, max))
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
