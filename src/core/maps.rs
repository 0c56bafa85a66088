//! Static table of supported maps and their default calibrations.

use crate::core::{
    calibration::Calibration,
    constants::{DEFAULT_MAP_ID, LOCAL_MAP_BASE, REMOTE_MAP_BASE},
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Numeric identifier of a supported map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MapId(pub u8);

impl std::fmt::Display for MapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for MapId {
    fn default() -> Self {
        MapId(DEFAULT_MAP_ID)
    }
}

/// Where a map's background image comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSource {
    /// Vector background served by tarkov.dev
    RemoteSvg(String),
    /// Raster background bundled with the viewer
    LocalJpg(String),
}

impl ImageSource {
    pub fn uri(&self) -> String {
        match self {
            ImageSource::RemoteSvg(name) => format!("{}/{}.svg", REMOTE_MAP_BASE, name),
            ImageSource::LocalJpg(name) => format!("{}/{}.jpg", LOCAL_MAP_BASE, name),
        }
    }
}

/// Immutable description of a supported map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDescriptor {
    pub id: MapId,
    /// Display name, also the key used by the feature and quest datasets
    pub name: String,
    pub image: ImageSource,
    pub default_calibration: Calibration,
}

impl MapDescriptor {
    fn remote(id: u8, name: &str, svg: &str, calibration: Calibration) -> Self {
        Self {
            id: MapId(id),
            name: name.to_string(),
            image: ImageSource::RemoteSvg(svg.to_string()),
            default_calibration: calibration,
        }
    }

    fn local(id: u8, name: &str, jpg: &str, calibration: Calibration) -> Self {
        Self {
            id: MapId(id),
            name: name.to_string(),
            image: ImageSource::LocalJpg(jpg.to_string()),
            default_calibration: calibration,
        }
    }
}

static MAPS: Lazy<Vec<MapDescriptor>> = Lazy::new(|| {
    vec![
        MapDescriptor::remote(
            0,
            "Factory",
            "Factory",
            Calibration::new(51.1, 54.3, 0.76, 0.7, true, true, true),
        ),
        MapDescriptor::remote(
            1,
            "Customs",
            "Customs",
            Calibration::new(65.2, 56.3, 0.094, 0.18, true, false, false),
        ),
        MapDescriptor::remote(
            2,
            "Woods",
            "Woods",
            Calibration::new(48.5, 67.3, 0.0759, 0.0729, true, false, false),
        ),
        MapDescriptor::remote(
            3,
            "Shoreline",
            "Shoreline",
            Calibration::new(32.5, 39.8, 0.0636, 0.0917, true, false, false),
        ),
        MapDescriptor::remote(
            4,
            "Interchange",
            "Interchange",
            Calibration::new(59.333, 49.238, 0.1123, 0.1083, true, false, false),
        ),
        MapDescriptor::local(
            5,
            "The Lab",
            "labs",
            Calibration::new(161.3, 111.0, 0.33, 0.33, false, false, true),
        ),
        MapDescriptor::remote(
            6,
            "Reserve",
            "Reserve",
            Calibration::new(48.6, 50.856, 0.163, 0.1797, true, false, false),
        ),
        MapDescriptor::remote(
            7,
            "Lighthouse",
            "Lighthouse",
            Calibration::new(48.3, 58.0, 0.0955, 0.058, true, false, false),
        ),
        MapDescriptor::remote(
            8,
            "Streets of Tarkov",
            "StreetsOfTarkov",
            Calibration::new(53.6, 35.67, 0.1657, 0.1206, true, false, false),
        ),
        MapDescriptor::remote(
            9,
            "Ground Zero",
            "GroundZero",
            Calibration::new(71.5, 25.5, 0.28, 0.2, true, false, false),
        ),
        MapDescriptor::local(
            10,
            "The Labyrinth",
            "labyrinth",
            Calibration::new(33.5, 50.0, 0.825, 0.83, false, false, true),
        ),
    ]
});

/// All supported maps in selection order
pub fn all() -> &'static [MapDescriptor] {
    &MAPS
}

/// Looks up a map by id
pub fn by_id(id: MapId) -> Option<&'static MapDescriptor> {
    MAPS.iter().find(|m| m.id == id)
}

/// Looks up a map by its display name
pub fn by_name(name: &str) -> Option<&'static MapDescriptor> {
    MAPS.iter().find(|m| m.name == name)
}
