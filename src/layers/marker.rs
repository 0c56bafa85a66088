use crate::{
    core::{constants::ICON_BASE, geo::PercentPoint, tracking::QuestColor},
    layers::{
        base::LayerKind,
        vector::{SerializableColor, PMC_GREEN, SCAV_ORANGE, TRANSIT_RED},
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerIcon {
    ExtractPmc,
    ExtractScav,
    Transit,
    /// Filled dot in the quest's color
    QuestObjective,
    CalibrationOrigin,
}

impl MarkerIcon {
    /// Image for icon markers; dots are drawn, not loaded
    pub fn icon_url(&self) -> Option<String> {
        let file = match self {
            MarkerIcon::ExtractPmc => "extract_pmc",
            MarkerIcon::ExtractScav => "extract_scav",
            MarkerIcon::Transit => "extract_transit",
            MarkerIcon::QuestObjective | MarkerIcon::CalibrationOrigin => return None,
        };
        Some(format!("{}/{}.png", ICON_BASE, file))
    }

    /// Flat color for hosts that draw shapes instead of icon images
    pub fn tint(&self) -> SerializableColor {
        match self {
            MarkerIcon::ExtractPmc => PMC_GREEN,
            MarkerIcon::ExtractScav => SCAV_ORANGE,
            MarkerIcon::Transit => TRANSIT_RED,
            MarkerIcon::QuestObjective => SerializableColor::rgb(255, 255, 255),
            MarkerIcon::CalibrationOrigin => SerializableColor::rgb(239, 68, 68),
        }
    }
}

/// A projected point marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Center of the marker in percent space
    pub position: PercentPoint,
    pub icon: MarkerIcon,
    /// Hover text
    pub title: String,
    /// Size multiplier applied on top of the host's base size
    pub scale: f64,
    pub layer: LayerKind,
    pub color: Option<QuestColor>,
}

impl Marker {
    pub fn new(position: PercentPoint, icon: MarkerIcon, layer: LayerKind) -> Self {
        Self {
            position,
            icon,
            title: String::new(),
            scale: 1.0,
            layer,
            color: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color(mut self, color: QuestColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn z_index(&self) -> i32 {
        self.layer.z_index()
    }

    /// Quest color when set, otherwise the icon tint
    pub fn fill(&self) -> SerializableColor {
        match self.color {
            Some(color) => {
                let [r, g, b] = color.to_rgb();
                SerializableColor::rgb(r, g, b)
            }
            None => self.icon.tint(),
        }
    }

    /// CSS transform the web viewer applies to center and counter-scale the marker
    pub fn css_transform(&self) -> String {
        format!("translate(-50%, -50%) scale({})", self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_urls() {
        assert_eq!(
            MarkerIcon::ExtractPmc.icon_url().as_deref(),
            Some("https://tarkov.dev/maps/interactive/extract_pmc.png")
        );
        assert!(MarkerIcon::QuestObjective.icon_url().is_none());
        assert_eq!(MarkerIcon::Transit.tint().to_css(), "#f91616");
    }

    #[test]
    fn test_fill_prefers_quest_color() {
        let marker = Marker::new(
            PercentPoint::new(0.0, 0.0),
            MarkerIcon::QuestObjective,
            LayerKind::QuestMarkers,
        );
        assert_eq!(marker.fill(), SerializableColor::rgb(255, 255, 255));

        let colored = marker.with_color(QuestColor { hue: 0 });
        assert_eq!(colored.fill(), SerializableColor::rgb(246, 85, 85));
    }

    #[test]
    fn test_marker_builder() {
        let marker = Marker::new(
            PercentPoint::new(1.0, 2.0),
            MarkerIcon::Transit,
            LayerKind::TransitMarkers,
        )
        .with_title("Transit")
            .with_scale(0.5);
        assert_eq!(marker.title, "Transit");
        assert_eq!(marker.z_index(), 30);
        assert_eq!(marker.css_transform(), "translate(-50%, -50%) scale(0.5)");
    }
}
