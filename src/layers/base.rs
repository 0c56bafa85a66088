use crate::core::{
    calibration::Calibration,
    config::MarkerConfig,
    constants::{Z_CALIBRATION_GUIDES, Z_EXPANDED_MARKERS, Z_MARKERS, Z_OUTLINES},
};
use serde::{Deserialize, Serialize};

/// Overlay groups, in the order the viewer stacks them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    ExtractOutlines,
    TransitOutlines,
    CalibrationGuides,
    ExtractMarkers,
    TransitMarkers,
    QuestMarkers,
    ExpandedQuestMarkers,
}

impl LayerKind {
    pub fn z_index(&self) -> i32 {
        match self {
            LayerKind::ExtractOutlines | LayerKind::TransitOutlines => Z_OUTLINES,
            LayerKind::CalibrationGuides => Z_CALIBRATION_GUIDES,
            LayerKind::ExtractMarkers | LayerKind::TransitMarkers | LayerKind::QuestMarkers => {
                Z_MARKERS
            }
            LayerKind::ExpandedQuestMarkers => Z_EXPANDED_MARKERS,
        }
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::ExtractOutlines => write!(f, "extract-outlines"),
            LayerKind::TransitOutlines => write!(f, "transit-outlines"),
            LayerKind::CalibrationGuides => write!(f, "calibration-guides"),
            LayerKind::ExtractMarkers => write!(f, "extract-markers"),
            LayerKind::TransitMarkers => write!(f, "transit-markers"),
            LayerKind::QuestMarkers => write!(f, "quest-markers"),
            LayerKind::ExpandedQuestMarkers => write!(f, "expanded-quest-markers"),
        }
    }
}

/// Everything a projector needs besides the data it projects.
///
/// Built by the caller from its UI state; projectors never read shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionContext {
    pub calibration: Calibration,
    /// `1 / zoom` of the viewport
    pub marker_scale: f64,
    pub markers: MarkerConfig,
}

impl ProjectionContext {
    pub fn new(calibration: Calibration, marker_scale: f64) -> Self {
        Self {
            calibration,
            marker_scale,
            markers: MarkerConfig::default(),
        }
    }

    pub fn with_marker_config(mut self, markers: MarkerConfig) -> Self {
        self.markers = markers;
        self
    }

    /// Outline stroke width after counter-scaling
    pub fn stroke_width(&self) -> f64 {
        self.markers.outline_stroke_width * self.marker_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_order() {
        assert!(LayerKind::ExtractOutlines.z_index() < LayerKind::CalibrationGuides.z_index());
        assert!(LayerKind::CalibrationGuides.z_index() < LayerKind::QuestMarkers.z_index());
        assert!(LayerKind::QuestMarkers.z_index() < LayerKind::ExpandedQuestMarkers.z_index());
        assert_eq!(LayerKind::TransitMarkers.z_index(), LayerKind::QuestMarkers.z_index());
    }

    #[test]
    fn test_layer_kind_display() {
        assert_eq!(LayerKind::ExtractOutlines.to_string(), "extract-outlines");
        assert_eq!(LayerKind::ExpandedQuestMarkers.to_string(), "expanded-quest-markers");
    }

    #[test]
    fn test_stroke_width_counter_scales() {
        let ctx = ProjectionContext::new(Calibration::identity(), 0.5);
        assert_eq!(ctx.stroke_width(), 0.1);
    }
}
