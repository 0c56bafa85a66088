//! Paints an [`Overlay`] onto an egui painter.
//!
//! All overlay positions are percentages of the image rect, so painting only
//! needs the on-screen rect of the image after pan and zoom.

use crate::{
    core::{bounds::Bounds, geo::PercentPoint},
    layers::{
        manager::{CalibrationGuides, DrawItem, Overlay},
        marker::{Marker, MarkerIcon},
        vector::Polygon,
    },
};
use egui::{epaint::Mesh, Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};

/// Pixel sizes used when painting, before any expansion multiplier
#[derive(Debug, Clone, PartialEq)]
pub struct PaintStyle {
    pub icon_radius: f32,
    pub dot_radius: f32,
    pub origin_radius: f32,
    pub label_size: f32,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            icon_radius: 7.0,
            dot_radius: 5.0,
            origin_radius: 4.0,
            label_size: 10.0,
        }
    }
}

pub fn to_bounds(rect: Rect) -> Bounds {
    Bounds::from_coords(
        f64::from(rect.min.x),
        f64::from(rect.min.y),
        f64::from(rect.max.x),
        f64::from(rect.max.y),
    )
}

pub fn to_rect(bounds: &Bounds) -> Rect {
    Rect::from_min_max(
        Pos2::new(bounds.min.x as f32, bounds.min.y as f32),
        Pos2::new(bounds.max.x as f32, bounds.max.y as f32),
    )
}

pub fn percent_to_screen(image_rect: Rect, point: &PercentPoint) -> Pos2 {
    Pos2::new(
        image_rect.min.x + image_rect.width() * (point.x / 100.0) as f32,
        image_rect.min.y + image_rect.height() * (point.y / 100.0) as f32,
    )
}

/// Screen-space fill mesh of a polygon outline, concave shapes included
pub fn fill_mesh(image_rect: Rect, polygon: &Polygon, color: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    for triangle in polygon.triangulate() {
        let base = mesh.vertices.len() as u32;
        for corner in &triangle {
            mesh.colored_vertex(percent_to_screen(image_rect, corner), color);
        }
        mesh.add_triangle(base, base + 1, base + 2);
    }
    mesh
}

/// Draws overlay items onto an image rect in z order
pub struct OverlayPainter<'a> {
    painter: &'a Painter,
    image_rect: Rect,
    /// Converts counter-scaled sizes back to screen pixels
    zoom: f32,
    style: &'a PaintStyle,
}

impl<'a> OverlayPainter<'a> {
    pub fn new(
        painter: &'a Painter,
        image_rect: Rect,
        overlay: &Overlay,
        style: &'a PaintStyle,
    ) -> Self {
        let zoom = if overlay.marker_scale > 0.0 {
            (1.0 / overlay.marker_scale) as f32
        } else {
            1.0
        };
        Self {
            painter,
            image_rect,
            zoom,
            style,
        }
    }

    pub fn paint(&self, overlay: &Overlay) {
        for item in overlay.draw_order() {
            match item {
                DrawItem::Polygon(polygon) => self.polygon(polygon),
                DrawItem::Guides(guides) => self.guides(guides),
                DrawItem::Marker(marker) => self.marker(marker),
            }
        }
    }

    fn polygon(&self, polygon: &Polygon) {
        let fill = Color32::from(polygon.style.fill_color);
        let mesh = fill_mesh(self.image_rect, polygon, fill);
        if !mesh.is_empty() {
            self.painter.add(Shape::mesh(mesh));
        }

        let points: Vec<Pos2> = polygon
            .points
            .iter()
            .map(|p| percent_to_screen(self.image_rect, p))
            .collect();
        // stroke width is in percent units of the image width
        let width = (polygon.style.stroke_width as f32 * self.image_rect.width() / 100.0).max(1.0);
        let stroke = Stroke::new(width, Color32::from(polygon.style.stroke_color));
        self.painter.add(Shape::closed_line(points, stroke));
    }

    fn guides(&self, guides: &CalibrationGuides) {
        let color = Color32::from(guides.origin.icon.tint());
        let stroke = Stroke::new(guides.thickness as f32 * self.zoom, color);
        let origin = percent_to_screen(self.image_rect, &guides.origin.position);
        let rect = self.image_rect;

        let vertical = [Pos2::new(origin.x, rect.min.y), Pos2::new(origin.x, rect.max.y)];
        let horizontal = [Pos2::new(rect.min.x, origin.y), Pos2::new(rect.max.x, origin.y)];
        self.painter.line_segment(vertical, stroke);
        self.painter.line_segment(horizontal, stroke);
        self.marker(&guides.origin);
    }

    fn marker(&self, marker: &Marker) {
        let center = percent_to_screen(self.image_rect, &marker.position);
        let size = marker.scale as f32 * self.zoom;
        let fill = Color32::from(marker.fill());

        match marker.icon {
            MarkerIcon::QuestObjective => {
                let radius = self.style.dot_radius * size;
                self.painter.circle_filled(center, radius, fill);
                self.painter
                    .circle_stroke(center, radius, Stroke::new(1.0, Color32::BLACK));
            }
            MarkerIcon::CalibrationOrigin => {
                self.painter
                    .circle_filled(center, self.style.origin_radius * size, fill);
            }
            MarkerIcon::ExtractPmc | MarkerIcon::ExtractScav | MarkerIcon::Transit => {
                let radius = self.style.icon_radius * size;
                self.painter.circle_filled(center, radius, fill);
                self.painter
                    .circle_stroke(center, radius, Stroke::new(1.5, Color32::WHITE));
                let glyph = if marker.icon == MarkerIcon::Transit { "T" } else { "E" };
                self.painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    glyph,
                    FontId::proportional(self.style.label_size * size),
                    Color32::WHITE,
                );
            }
        }
    }
}
