//! Shared trait abstractions
//!
//! Seams between the pure coordinate math and the components that consume it.

use crate::core::geo::{PercentPoint, WorldPoint};

/// Trait for coordinate transformation operations between world and percent space
pub trait CoordinateTransform {
    /// Transform a world position into percent space
    fn project(&self, point: &WorldPoint) -> PercentPoint;

    /// Transform a percent-space position back into world coordinates
    fn unproject(&self, point: &PercentPoint) -> WorldPoint;

    /// Project a sequence of world points, preserving order
    fn project_all(&self, points: &[WorldPoint]) -> Vec<PercentPoint> {
        points.iter().map(|p| self.project(p)).collect()
    }
}
