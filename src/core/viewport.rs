use crate::core::{
    bounds::Bounds,
    config::ZoomConfig,
    geo::{PercentPoint, Point},
};
use serde::{Deserialize, Serialize};

/// Pan/zoom state of the displayed map image.
///
/// The image is drawn as `translate(offset) scale(zoom)`; overlay positions
/// stay in percent space and are composited by the host with this transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Current magnification
    pub zoom: f64,
    /// Pan offset in screen pixels
    pub offset: Point,
    dragging: bool,
    /// Pointer position minus `offset` at drag start
    drag_anchor: Point,
    limits: ZoomConfig,
}

impl Viewport {
    /// Limits that are inverted or not positive are normalized first
    pub fn new(limits: ZoomConfig) -> Self {
        Self {
            zoom: 1.0,
            offset: Point::default(),
            dragging: false,
            drag_anchor: Point::default(),
            limits: limits.normalized(),
        }
    }

    pub fn limits(&self) -> &ZoomConfig {
        &self.limits
    }

    /// Sets the zoom level, clamping to the configured range
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            // deserialized limits are not normalized, so avoid `clamp`
            self.zoom = zoom.max(self.limits.min_zoom).min(self.limits.max_zoom);
        }
    }

    /// Zoom button "+"
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + self.limits.button_step);
    }

    /// Zoom button "-"
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - self.limits.button_step);
    }

    /// Wheel zoom: positive deltas (scrolling down) zoom out
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y > 0.0 {
            self.set_zoom(self.zoom - self.limits.wheel_step);
        } else {
            self.set_zoom(self.zoom + self.limits.wheel_step);
        }
    }

    /// Restores zoom 1 and no pan
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.offset = Point::default();
        self.dragging = false;
    }

    pub fn begin_drag(&mut self, pointer: Point) {
        self.dragging = true;
        self.drag_anchor = pointer.subtract(&self.offset);
    }

    /// Moves the pan offset with the pointer while a drag is active
    pub fn drag_to(&mut self, pointer: Point) {
        if self.dragging {
            self.offset = pointer.subtract(&self.drag_anchor);
        }
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Factor that keeps markers a constant on-screen size regardless of zoom
    pub fn marker_scale(&self) -> f64 {
        1.0 / self.zoom
    }

    /// Converts a pointer position into percent space of the displayed image.
    ///
    /// `image_rect` is the on-screen bounding box of the image after pan and
    /// zoom, so the result is independent of both.
    pub fn pointer_to_percent(&self, pointer: &Point, image_rect: &Bounds) -> Option<PercentPoint> {
        image_rect.to_percent(pointer)
    }

    /// On-screen bounding box of an image whose untransformed layout box is
    /// `layout`, scaled about its center and then translated by the pan offset
    pub fn transformed_rect(&self, layout: &Bounds) -> Bounds {
        let center = layout.center().add(&self.offset);
        let half_w = layout.width() * self.zoom / 2.0;
        let half_h = layout.height() * self.zoom / 2.0;
        Bounds::from_coords(
            center.x - half_w,
            center.y - half_h,
            center.x + half_w,
            center.y + half_h,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_limits() {
        let mut viewport = Viewport::default();
        for _ in 0..40 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.zoom, 10.0);

        for _ in 0..40 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.zoom, 0.5);
    }

    #[test]
    fn test_inverted_limits_do_not_panic() {
        let mut viewport = Viewport::new(ZoomConfig {
            min_zoom: 5.0,
            max_zoom: 2.0,
            ..ZoomConfig::default()
        });
        assert_eq!(viewport.limits().min_zoom, 2.0);
        assert_eq!(viewport.limits().max_zoom, 5.0);

        viewport.zoom_in();
        assert_eq!(viewport.zoom, 2.0);
        for _ in 0..20 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.zoom, 5.0);
    }

    #[test]
    fn test_deserialized_inverted_limits_do_not_panic() {
        let json = r#"{
            "zoom": 1.0,
            "offset": {"x": 0.0, "y": 0.0},
            "dragging": false,
            "drag_anchor": {"x": 0.0, "y": 0.0},
            "limits": {"min_zoom": 3.0, "max_zoom": 1.0}
        }"#;
        let mut viewport: Viewport = serde_json::from_str(json).unwrap();
        viewport.wheel(1.0);
        assert!(viewport.zoom.is_finite());
        assert!(viewport.zoom <= 3.0);
    }

    #[test]
    fn test_wheel_direction() {
        let mut viewport = Viewport::default();
        viewport.wheel(120.0);
        assert!((viewport.zoom - 0.9).abs() < 1e-9);
        viewport.wheel(-120.0);
        viewport.wheel(-120.0);
        assert!((viewport.zoom - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_marker_scale() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(4.0);
        assert_eq!(viewport.marker_scale(), 0.25);
    }

    #[test]
    fn test_drag() {
        let mut viewport = Viewport::default();
        viewport.drag_to(Point::new(50.0, 50.0));
        assert_eq!(viewport.offset, Point::default());

        viewport.begin_drag(Point::new(100.0, 100.0));
        viewport.drag_to(Point::new(130.0, 90.0));
        assert_eq!(viewport.offset, Point::new(30.0, -10.0));
        viewport.end_drag();

        // a second drag continues from the current offset
        viewport.begin_drag(Point::new(0.0, 0.0));
        viewport.drag_to(Point::new(10.0, 10.0));
        assert_eq!(viewport.offset, Point::new(40.0, 0.0));
    }

    #[test]
    fn test_reset() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(3.0);
        viewport.begin_drag(Point::new(0.0, 0.0));
        viewport.drag_to(Point::new(5.0, 5.0));
        viewport.reset();
        assert_eq!(viewport.zoom, 1.0);
        assert_eq!(viewport.offset, Point::default());
        assert!(!viewport.is_dragging());
    }

    #[test]
    fn test_transformed_rect() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(2.0);
        viewport.offset = Point::new(10.0, 0.0);

        let rect = viewport.transformed_rect(&Bounds::from_rect(0.0, 0.0, 100.0, 50.0));
        assert_eq!(rect, Bounds::from_coords(-40.0, -25.0, 160.0, 75.0));

        let percent = viewport
            .pointer_to_percent(&Point::new(60.0, 25.0), &rect)
            .unwrap();
        assert_eq!(percent, PercentPoint::new(50.0, 50.0));
    }
}
