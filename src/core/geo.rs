use serde::{Deserialize, Deserializer, Serialize};

/// A game-world position on the horizontal plane.
///
/// Datasets carry positions either as `{x, z}`, as full tarkov.dev vectors
/// `{x, y, z}` (where `y` is the vertical axis and is discarded), or as legacy
/// `{x, y}` pairs where `y` stands in for `z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorldPoint {
    pub x: f64,
    pub z: f64,
}

impl WorldPoint {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Returns the point with both horizontal components exchanged
    pub fn swapped(&self) -> Self {
        Self::new(self.z, self.x)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.z.is_finite()
    }
}

impl Default for WorldPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[derive(Deserialize)]
struct RawWorldPoint {
    x: f64,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    z: Option<f64>,
}

impl<'de> Deserialize<'de> for WorldPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawWorldPoint::deserialize(deserializer)?;
        let z = raw
            .z
            .or(raw.y)
            .ok_or_else(|| serde::de::Error::missing_field("z"))?;
        Ok(WorldPoint::new(raw.x, z))
    }
}

/// A position in percent space: 0..100 across the rendered background image,
/// independent of pan and zoom. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentPoint {
    pub x: f64,
    pub y: f64,
}

impl PercentPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// CSS/SVG friendly `"x,y"` pair
    pub fn to_svg_pair(&self) -> String {
        format!("{},{}", self.x, self.y)
    }
}

impl Default for PercentPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in screen (client pixel) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_point_from_xz() {
        let p: WorldPoint = serde_json::from_str(r#"{"x": 1.5, "z": -2.0}"#).unwrap();
        assert_eq!(p, WorldPoint::new(1.5, -2.0));
    }

    #[test]
    fn test_world_point_ignores_vertical_axis() {
        let p: WorldPoint = serde_json::from_str(r#"{"x": 10.0, "y": 3.2, "z": 50.0}"#).unwrap();
        assert_eq!(p, WorldPoint::new(10.0, 50.0));
    }

    #[test]
    fn test_world_point_legacy_xy() {
        let p: WorldPoint = serde_json::from_str(r#"{"x": 4.0, "y": 7.0}"#).unwrap();
        assert_eq!(p, WorldPoint::new(4.0, 7.0));
    }

    #[test]
    fn test_world_point_missing_horizontal_axis() {
        let result: Result<WorldPoint, _> = serde_json::from_str(r#"{"x": 4.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_world_point_swapped() {
        assert_eq!(WorldPoint::new(1.0, 2.0).swapped(), WorldPoint::new(2.0, 1.0));
    }

    #[test]
    fn test_percent_svg_pair() {
        assert_eq!(PercentPoint::new(55.8, 65.3).to_svg_pair(), "55.8,65.3");
    }
}
