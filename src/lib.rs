//! # Tarkov GPS
//!
//! Calibrated tactical map overlays for Escape from Tarkov.
//!
//! Each map carries a calibration (offset, scale, axis flip, axis swap) that
//! converts in-game world coordinates into percentages of the map image and
//! back. Extracts, transits and quest objectives are projected through it
//! into overlay primitives that a host can draw in z order.

pub mod core;
pub mod data;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod spatial;
pub mod traits;
#[cfg(feature = "egui")]
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::Bounds,
    calibration::{Calibration, CalibrationField, CalibrationUpdate},
    geo::{PercentPoint, Point, WorldPoint},
    map::{CursorReadout, QuestDetails, TacticalMap},
    maps::{MapDescriptor, MapId},
    store::CalibrationStore,
    tracking::{QuestColor, QuestTracker},
    viewport::Viewport,
};

pub use layers::manager::{DrawItem, Overlay};

pub use data::{features::FeatureDataset, quests::QuestDataset};

pub use input::{events::InputEvent, handler::InputHandler};

pub use spatial::index::MarkerIndex;

pub use traits::CoordinateTransform;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, GpsError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum GpsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown map id: {0}")]
    UnknownMap(u8),

    #[error("Unknown quest: {0}")]
    UnknownQuest(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = GpsError;

/// Installs `env_logger` with an `info` default filter.
///
/// Safe to call more than once; later calls are ignored.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}
