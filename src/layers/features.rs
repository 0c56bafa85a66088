//! Projects extracts and transits of the active map into overlay primitives.

use crate::{
    core::config::FeatureToggles,
    data::features::{Feature, FeatureDataset},
    layers::{
        base::{LayerKind, ProjectionContext},
        marker::{Marker, MarkerIcon},
        vector::{Polygon, PolygonStyle},
    },
    traits::CoordinateTransform,
};
use serde::Serialize;

/// Markers and outlines of one feature group
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureOverlay {
    pub markers: Vec<Marker>,
    pub outlines: Vec<Polygon>,
}

impl FeatureOverlay {
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.outlines.is_empty()
    }
}

/// Which kind of feature a slice holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Extract,
    Transit,
}

fn marker_for(feature: &Feature, kind: FeatureKind, ctx: &ProjectionContext) -> Marker {
    let position = ctx.calibration.project(&feature.position);
    let (icon, layer, title) = match kind {
        FeatureKind::Extract => {
            let icon = if feature.is_pmc() {
                MarkerIcon::ExtractPmc
            } else {
                MarkerIcon::ExtractScav
            };
            let faction = feature.faction.as_deref().unwrap_or("unknown");
            (icon, LayerKind::ExtractMarkers, format!("{} ({})", feature.name, faction))
        }
        FeatureKind::Transit => {
            let title = feature
                .description
                .clone()
                .unwrap_or_else(|| "Transit".to_string());
            (MarkerIcon::Transit, LayerKind::TransitMarkers, title)
        }
    };

    Marker::new(position, icon, layer)
        .with_title(title)
        .with_scale(ctx.marker_scale)
}

fn outline_for(feature: &Feature, kind: FeatureKind, ctx: &ProjectionContext) -> Option<Polygon> {
    let points = ctx.calibration.project_all(feature.outline_points()?);
    let (style, layer) = match kind {
        FeatureKind::Extract if feature.is_pmc() => {
            (PolygonStyle::extract_pmc(ctx.stroke_width()), LayerKind::ExtractOutlines)
        }
        FeatureKind::Extract => (
            PolygonStyle::extract_scav(ctx.stroke_width()),
            LayerKind::ExtractOutlines,
        ),
        FeatureKind::Transit => (
            PolygonStyle::transit(ctx.stroke_width()),
            LayerKind::TransitOutlines,
        ),
    };
    Polygon::new(points, style, layer)
}

/// Projects every feature's position, and its outline when it has a non-empty one
pub fn project(features: &[Feature], kind: FeatureKind, ctx: &ProjectionContext) -> FeatureOverlay {
    FeatureOverlay {
        markers: features.iter().map(|f| marker_for(f, kind, ctx)).collect(),
        outlines: features
            .iter()
            .filter_map(|f| outline_for(f, kind, ctx))
            .collect(),
    }
}

/// Extract and transit overlays of a map; disabled groups come back empty
pub fn project_map(
    dataset: &FeatureDataset,
    map_name: &str,
    toggles: &FeatureToggles,
    ctx: &ProjectionContext,
) -> (FeatureOverlay, FeatureOverlay) {
    let extracts = if toggles.show_extracts {
        project(dataset.extracts(map_name), FeatureKind::Extract, ctx)
    } else {
        FeatureOverlay::default()
    };
    let transits = if toggles.show_transits {
        project(dataset.transits(map_name), FeatureKind::Transit, ctx)
    } else {
        FeatureOverlay::default()
    };
    (extracts, transits)
}
