//! Assembles projected layers into one overlay and orders them for drawing.

use crate::{
    core::{geo::PercentPoint, maps::MapId},
    layers::{
        base::{LayerKind, ProjectionContext},
        features::FeatureOverlay,
        marker::{Marker, MarkerIcon},
        quests::ProjectedQuest,
        vector::Polygon,
    },
};
use serde::Serialize;

/// Origin marker and axis guide lines of the active calibration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalibrationGuides {
    pub origin: Marker,
    /// Percent x of the vertical guide line
    pub vertical_x: f64,
    /// Percent y of the horizontal guide line
    pub horizontal_y: f64,
    /// Line thickness in pixels, counter-scaled for zoom
    pub thickness: f64,
}

impl CalibrationGuides {
    pub fn new(ctx: &ProjectionContext) -> Self {
        let calib = &ctx.calibration;
        let origin = PercentPoint::new(calib.offset_x, calib.offset_z);
        Self {
            origin: Marker::new(origin, MarkerIcon::CalibrationOrigin, LayerKind::CalibrationGuides)
                .with_title("Calibration origin")
                .with_scale(ctx.marker_scale),
            vertical_x: calib.offset_x,
            horizontal_y: calib.offset_z,
            thickness: ctx.markers.guide_thickness * ctx.marker_scale,
        }
    }
}

/// A single drawable, borrowed from an [`Overlay`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawItem<'a> {
    Polygon(&'a Polygon),
    Marker(&'a Marker),
    Guides(&'a CalibrationGuides),
}

impl DrawItem<'_> {
    pub fn z_index(&self) -> i32 {
        match self {
            DrawItem::Polygon(p) => p.z_index(),
            DrawItem::Marker(m) => m.z_index(),
            DrawItem::Guides(_) => LayerKind::CalibrationGuides.z_index(),
        }
    }
}

/// Everything drawn on top of the map image for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub map: MapId,
    pub marker_scale: f64,
    pub extracts: FeatureOverlay,
    pub transits: FeatureOverlay,
    pub quests: Vec<ProjectedQuest>,
    pub guides: Option<CalibrationGuides>,
}

impl Overlay {
    /// All markers in insertion order
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.extracts
            .markers
            .iter()
            .chain(self.transits.markers.iter())
            .chain(self.quests.iter().flat_map(|q| q.markers()))
    }

    /// All polygons in insertion order
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.extracts.outlines.iter().chain(self.transits.outlines.iter())
    }

    /// Items sorted bottom to top. Items on the same layer keep insertion order.
    pub fn draw_order(&self) -> Vec<DrawItem<'_>> {
        let mut items: Vec<DrawItem<'_>> = self
            .polygons()
            .map(DrawItem::Polygon)
            .chain(self.guides.iter().map(DrawItem::Guides))
            .chain(self.markers().map(DrawItem::Marker))
            .collect();
        items.sort_by_key(|item| item.z_index());
        items
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{calibration::Calibration, tracking::QuestColor};
    use crate::layers::{quests::ProjectedObjective, vector::PolygonStyle};

    fn marker(layer: LayerKind) -> Marker {
        Marker::new(PercentPoint::new(0.0, 0.0), MarkerIcon::QuestObjective, layer)
    }

    fn overlay() -> Overlay {
        let ctx = ProjectionContext::new(Calibration::identity(), 1.0);
        Overlay {
            map: MapId(1),
            marker_scale: 1.0,
            extracts: FeatureOverlay {
                markers: vec![marker(LayerKind::ExtractMarkers)],
                outlines: vec![Polygon::new(
                    vec![PercentPoint::new(1.0, 1.0)],
                    PolygonStyle::extract_pmc(0.2),
                    LayerKind::ExtractOutlines,
                )
                .unwrap()],
            },
            transits: FeatureOverlay::default(),
            quests: vec![
                ProjectedQuest {
                    name: "Expanded".to_string(),
                    color: QuestColor { hue: 1 },
                    expanded: true,
                    objectives: vec![ProjectedObjective {
                        index: 0,
                        description: String::new(),
                        markers: vec![marker(LayerKind::ExpandedQuestMarkers)],
                    }],
                },
                ProjectedQuest {
                    name: "Collapsed".to_string(),
                    color: QuestColor { hue: 2 },
                    expanded: false,
                    objectives: vec![ProjectedObjective {
                        index: 0,
                        description: String::new(),
                        markers: vec![marker(LayerKind::QuestMarkers)],
                    }],
                },
            ],
            guides: Some(CalibrationGuides::new(&ctx)),
        }
    }

    #[test]
    fn test_draw_order() {
        let overlay = overlay();
        let z: Vec<i32> = overlay.draw_order().iter().map(|i| i.z_index()).collect();
        assert_eq!(z, vec![25, 26, 30, 30, 100]);

        match overlay.draw_order().last() {
            Some(DrawItem::Marker(m)) => assert_eq!(m.layer, LayerKind::ExpandedQuestMarkers),
            other => panic!("unexpected top item {:?}", other),
        }
    }

    #[test]
    fn test_guides_follow_offsets() {
        let calibration = Calibration::new(40.0, 60.0, 1.0, 1.0, false, false, false);
        let guides = CalibrationGuides::new(&ProjectionContext::new(calibration, 0.5));
        assert_eq!(guides.origin.position, PercentPoint::new(40.0, 60.0));
        assert_eq!(guides.vertical_x, 40.0);
        assert_eq!(guides.horizontal_y, 60.0);
        assert_eq!(guides.thickness, 0.5);
    }

    #[test]
    fn test_overlay_serializes() {
        let json = overlay().to_json().unwrap();
        assert!(json.contains("\"ExpandedQuestMarkers\""));
    }
}
