//! Engine-wide constants taken from the shipped viewer defaults.
//! Keeping them in a single place makes it easier to tweak magic numbers.

/// Map shown on startup (Customs).
pub const DEFAULT_MAP_ID: u8 = 1;

/// Suffix the quest dataset uses for the extended-area variant of a map.
pub const EXTENDED_AREA_SUFFIX: &str = " 21+";

/// Smallest scale magnitude the calibration accepts; the inverse transform divides by it.
pub const MIN_SCALE_MAGNITUDE: f64 = 0.0001;

/// Zoom limits and steps for the image viewport.
pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 10.0;
pub const BUTTON_ZOOM_STEP: f64 = 0.5;
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// Extra enlargement of markers belonging to the expanded quest.
pub const EXPANDED_MARKER_MULTIPLIER: f64 = 1.8;

/// Outline stroke width in percent units, before marker counter-scaling.
pub const OUTLINE_STROKE_WIDTH: f64 = 0.2;

/// Draw order of overlay layers (higher draws on top).
pub const Z_OUTLINES: i32 = 25;
pub const Z_CALIBRATION_GUIDES: i32 = 26;
pub const Z_MARKERS: i32 = 30;
pub const Z_EXPANDED_MARKERS: i32 = 100;

/// Remote base for vector map backgrounds.
pub const REMOTE_MAP_BASE: &str = "https://assets.tarkov.dev/maps/svg";

/// Local base for raster map backgrounds.
pub const LOCAL_MAP_BASE: &str = "./public/assets/maps";

/// Base for marker icons.
pub const ICON_BASE: &str = "https://tarkov.dev/maps/interactive";
