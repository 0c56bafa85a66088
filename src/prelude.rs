//! Prelude module for common tarkov-gps types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use tarkov_gps::prelude::*;`

pub use crate::core::{
    bounds::Bounds,
    calibration::{Calibration, CalibrationField, CalibrationUpdate},
    config::{FeatureToggles, MarkerConfig, ViewerConfig, ZoomConfig},
    geo::{PercentPoint, Point, WorldPoint},
    map::{CursorReadout, ObjectiveDetails, QuestDetails, TacticalMap},
    maps::{ImageSource, MapDescriptor, MapId},
    store::CalibrationStore,
    tracking::{QuestColor, QuestTracker, TrackedQuest},
    viewport::Viewport,
};

pub use crate::layers::{
    base::{LayerKind, ProjectionContext},
    features::FeatureOverlay,
    manager::{CalibrationGuides, DrawItem, Overlay},
    marker::{Marker, MarkerIcon},
    quests::{ProjectedObjective, ProjectedQuest},
    vector::{Polygon, PolygonStyle, SerializableColor},
};

pub use crate::data::{
    features::{Feature, FeatureDataset, MapFeatures},
    quests::{Objective, Quest, QuestDataset},
};

pub use crate::input::{
    events::{InputEvent, KeyCode, MapEvent, MouseButton},
    handler::{Action, InputHandler},
};

pub use crate::spatial::index::{IndexedMarker, MarkerIndex};

pub use crate::traits::CoordinateTransform;

#[cfg(feature = "egui")]
pub use crate::ui::{MapView, OverlayPainter, PaintStyle, UiMapExt};

pub use crate::{Error, GpsError, Result};

// Collections
pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet, FxHasher};
