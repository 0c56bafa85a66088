use crate::core::geo::{PercentPoint, Point};
use serde::{Deserialize, Serialize};

/// Represents a bounding box in screen/pixel coordinates, typically the
/// client rect of the rendered background image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Creates new bounds from two points
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Creates bounds from a DOM-style rect (left, top, width, height)
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::from_coords(left, top, left + width, top + height)
    }

    /// Gets the width of the bounds
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Gets the height of the bounds
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Checks if the bounds have a usable, non-degenerate area
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Converts a screen point into percent space relative to these bounds.
    ///
    /// Points outside the bounds map outside 0..100. Returns `None` for
    /// degenerate bounds (e.g. the image has not been laid out yet).
    pub fn to_percent(&self, point: &Point) -> Option<PercentPoint> {
        if !self.is_valid() {
            return None;
        }
        Some(PercentPoint::new(
            (point.x - self.min.x) / self.width() * 100.0,
            (point.y - self.min.y) / self.height() * 100.0,
        ))
    }

    /// Converts a percent-space position back to a screen point inside these bounds
    pub fn from_percent(&self, percent: &PercentPoint) -> Point {
        Point::new(
            self.min.x + percent.x / 100.0 * self.width(),
            self.min.y + percent.y / 100.0 * self.height(),
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0))
    }
}
