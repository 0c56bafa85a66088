use crate::{core::geo::PercentPoint, layers::base::LayerKind};
use lyon::{
    math::point,
    path::Path,
    tessellation::{BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers},
};
use serde::{Deserialize, Serialize};

#[cfg(feature = "egui")]
use egui::Color32;

/// Serializable color type that can convert to/from egui::Color32
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[cfg(feature = "egui")]
impl From<Color32> for SerializableColor {
    fn from(color: Color32) -> Self {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        Self { r, g, b, a }
    }
}

#[cfg(feature = "egui")]
impl From<SerializableColor> for Color32 {
    fn from(color: SerializableColor) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with an alpha given as a 0..1 fraction
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                (f64::from(self.a) / 255.0 * 100.0).round() / 100.0
            )
        }
    }
}

/// Style for polygon features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonStyle {
    pub fill_color: SerializableColor,
    pub stroke_color: SerializableColor,
    /// Stroke width in percent units, already counter-scaled for zoom
    pub stroke_width: f64,
}

pub(crate) const PMC_GREEN: SerializableColor = SerializableColor::rgb(16, 185, 129);
pub(crate) const SCAV_ORANGE: SerializableColor = SerializableColor::rgb(249, 115, 22);
pub(crate) const TRANSIT_RED: SerializableColor = SerializableColor::rgb(249, 22, 22);
const AREA_FILL_OPACITY: f64 = 0.2;

impl PolygonStyle {
    fn tinted(color: SerializableColor, stroke_width: f64) -> Self {
        Self {
            fill_color: color.with_opacity(AREA_FILL_OPACITY),
            stroke_color: color,
            stroke_width,
        }
    }

    pub fn extract_pmc(stroke_width: f64) -> Self {
        Self::tinted(PMC_GREEN, stroke_width)
    }

    pub fn extract_scav(stroke_width: f64) -> Self {
        Self::tinted(SCAV_ORANGE, stroke_width)
    }

    pub fn transit(stroke_width: f64) -> Self {
        Self::tinted(TRANSIT_RED, stroke_width)
    }
}

/// A closed polygon in percent space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<PercentPoint>,
    pub style: PolygonStyle,
    pub layer: LayerKind,
}

impl Polygon {
    /// Returns `None` for an empty point list, which is never rendered
    pub fn new(points: Vec<PercentPoint>, style: PolygonStyle, layer: LayerKind) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self {
            points,
            style,
            layer,
        })
    }

    /// Value for an SVG `points` attribute inside a `0 0 100 100` viewBox
    pub fn to_svg_points(&self) -> String {
        self.points
            .iter()
            .map(PercentPoint::to_svg_pair)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn z_index(&self) -> i32 {
        self.layer.z_index()
    }

    /// Fill triangles for the outline, correct for concave shapes.
    ///
    /// Degenerate outlines yield no triangles.
    pub fn triangulate(&self) -> Vec<[PercentPoint; 3]> {
        let finite = self.points.iter().all(|p| p.x.is_finite() && p.y.is_finite());
        if self.points.len() < 3 || !finite {
            return Vec::new();
        }

        let mut builder = Path::builder();
        builder.begin(point(self.points[0].x as f32, self.points[0].y as f32));
        for p in &self.points[1..] {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        builder.close();
        let path = builder.build();

        let mut buffers: VertexBuffers<PercentPoint, u32> = VertexBuffers::new();
        let result = FillTessellator::new().tessellate_path(
            &path,
            &FillOptions::default(),
            &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
                let position = vertex.position();
                PercentPoint::new(f64::from(position.x), f64::from(position.y))
            }),
        );
        if let Err(e) = result {
            log::warn!("Failed to tessellate outline: {:?}", e);
            return Vec::new();
        }

        buffers
            .indices
            .chunks_exact(3)
            .map(|tri| {
                [
                    buffers.vertices[tri[0] as usize],
                    buffers.vertices[tri[1] as usize],
                    buffers.vertices[tri[2] as usize],
                ]
            })
            .collect()
    }
}
