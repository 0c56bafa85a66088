//! Configuration for viewer behavior and overlay presentation
//!
//! Every section has defaults matching the shipped viewer; a JSON document
//! only needs to name the values it changes.

use crate::{
    core::constants::{
        BUTTON_ZOOM_STEP, EXPANDED_MARKER_MULTIPLIER, MAX_ZOOM, MIN_ZOOM, OUTLINE_STROKE_WIDTH,
        WHEEL_ZOOM_STEP,
    },
    Error, Result,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub zoom: ZoomConfig,
    pub markers: MarkerConfig,
    pub toggles: FeatureToggles,
}

impl ViewerConfig {
    /// Parses a (possibly partial) configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ViewerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the zoom range is usable
    pub fn validate(&self) -> Result<()> {
        let zoom = &self.zoom;
        if !(zoom.min_zoom > 0.0 && zoom.min_zoom <= zoom.max_zoom) {
            return Err(Error::InvalidConfig(format!(
                "zoom range {}..={} is empty or not positive",
                zoom.min_zoom, zoom.max_zoom
            )));
        }
        if !(zoom.button_step > 0.0 && zoom.wheel_step > 0.0) {
            return Err(Error::InvalidConfig("zoom steps must be positive".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub button_step: f64,
    pub wheel_step: f64,
}

impl ZoomConfig {
    /// Copy with a usable range. Bounds or steps that are not positive
    /// finite numbers fall back to their defaults and an inverted range is
    /// swapped.
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        let usable = |value: f64, fallback: f64| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        let min_zoom = usable(self.min_zoom, defaults.min_zoom);
        let max_zoom = usable(self.max_zoom, defaults.max_zoom);
        Self {
            min_zoom: min_zoom.min(max_zoom),
            max_zoom: min_zoom.max(max_zoom),
            button_step: usable(self.button_step, defaults.button_step),
            wheel_step: usable(self.wheel_step, defaults.wheel_step),
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            button_step: BUTTON_ZOOM_STEP,
            wheel_step: WHEEL_ZOOM_STEP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Additional scale for markers of the expanded quest
    pub expanded_multiplier: f64,
    /// Outline stroke width in percent units at zoom 1
    pub outline_stroke_width: f64,
    /// Calibration guide line thickness in pixels at zoom 1
    pub guide_thickness: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            expanded_multiplier: EXPANDED_MARKER_MULTIPLIER,
            outline_stroke_width: OUTLINE_STROKE_WIDTH,
            guide_thickness: 1.0,
        }
    }
}

/// Which overlay groups are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureToggles {
    pub show_extracts: bool,
    pub show_transits: bool,
    /// Origin marker and guide lines of the active calibration
    pub show_calibration: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            show_extracts: true,
            show_transits: true,
            show_calibration: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.zoom.min_zoom, 0.5);
        assert_eq!(config.zoom.max_zoom, 10.0);
        assert_eq!(config.markers.expanded_multiplier, 1.8);
        assert!(config.toggles.show_extracts);
        assert!(config.toggles.show_transits);
        assert!(!config.toggles.show_calibration);
    }

    #[test]
    fn test_partial_json() {
        let config = ViewerConfig::from_json_str(
            r#"{"zoom": {"max_zoom": 4.0}, "toggles": {"show_transits": false}}"#,
        )
        .unwrap();
        assert_eq!(config.zoom.max_zoom, 4.0);
        assert_eq!(config.zoom.min_zoom, 0.5);
        assert!(!config.toggles.show_transits);
        assert!(config.toggles.show_extracts);
    }

    #[test]
    fn test_invalid_zoom_range() {
        assert!(
            ViewerConfig::from_json_str(r#"{"zoom": {"min_zoom": 5.0, "max_zoom": 2.0}}"#).is_err()
        );
        assert!(ViewerConfig::from_json_str(r#"{"zoom": {"wheel_step": 0.0}}"#).is_err());
    }

    #[test]
    fn test_nan_zoom_steps_rejected() {
        let mut config = ViewerConfig::default();
        config.zoom.button_step = f64::NAN;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = ViewerConfig::default();
        config.zoom.wheel_step = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_normalized_zoom_limits() {
        let inverted = ZoomConfig {
            min_zoom: 5.0,
            max_zoom: 2.0,
            ..ZoomConfig::default()
        };
        let fixed = inverted.normalized();
        assert_eq!(fixed.min_zoom, 2.0);
        assert_eq!(fixed.max_zoom, 5.0);

        let broken = ZoomConfig {
            min_zoom: f64::NAN,
            max_zoom: -1.0,
            button_step: 0.0,
            wheel_step: f64::INFINITY,
        };
        assert_eq!(broken.normalized(), ZoomConfig::default());
        assert_eq!(ZoomConfig::default().normalized(), ZoomConfig::default());
    }
}
