use crate::{core::geo::WorldPoint, data::null_as_default, Error, Result};
use serde::{Deserialize, Serialize};

/// Extract or transit point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub faction: Option<String>,
    pub position: WorldPoint,
    /// Optional area boundary; an empty outline is treated like a missing one
    #[serde(default)]
    pub outline: Option<Vec<WorldPoint>>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Feature {
    pub fn new(name: impl Into<String>, position: WorldPoint) -> Self {
        Self {
            name: name.into(),
            faction: None,
            position,
            outline: None,
            description: None,
        }
    }

    pub fn with_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = Some(faction.into());
        self
    }

    pub fn with_outline(mut self, outline: Vec<WorldPoint>) -> Self {
        self.outline = Some(outline);
        self
    }

    pub fn is_pmc(&self) -> bool {
        self.faction.as_deref() == Some("pmc")
    }

    /// Outline points if the feature has a renderable outline
    pub fn outline_points(&self) -> Option<&[WorldPoint]> {
        match &self.outline {
            Some(points) if !points.is_empty() => Some(points.as_slice()),
            _ => None,
        }
    }
}

/// All features of one map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapFeatures {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extracts: Vec<Feature>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transits: Vec<Feature>,
}

/// The per-map feature dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureDataset {
    maps: Vec<MapFeatures>,
}

impl FeatureDataset {
    pub fn new(maps: Vec<MapFeatures>) -> Self {
        Self { maps }
    }

    /// Parses the dataset from its JSON form
    pub fn from_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::ParseError(format!("Invalid feature dataset: {}", e)))
    }

    /// Loads the dataset from a JSON file
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let dataset = Self::from_str(&super::read_file(path.as_ref())?)?;
        log::info!("Loaded features for {} maps", dataset.maps.len());
        Ok(dataset)
    }

    /// Features of the named map, if the dataset has an entry for it
    pub fn for_map(&self, map_name: &str) -> Option<&MapFeatures> {
        self.maps.iter().find(|m| m.name == map_name)
    }

    /// Extracts of the named map; empty when the map is unknown
    pub fn extracts(&self, map_name: &str) -> &[Feature] {
        self.for_map(map_name)
            .map(|m| m.extracts.as_slice())
            .unwrap_or(&[])
    }

    /// Transits of the named map; empty when the map is unknown
    pub fn transits(&self, map_name: &str) -> &[Feature] {
        self.for_map(map_name)
            .map(|m| m.transits.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "name": "Customs",
            "extracts": [
                {
                    "name": "ZB-1011",
                    "faction": "pmc",
                    "position": {"x": 100.0, "y": 1.2, "z": 50.0},
                    "outline": [{"x": 0, "y": 0, "z": 0}, {"x": 10, "y": 0, "z": 0}, {"x": 10, "y": 0, "z": 10}]
                },
                {
                    "name": "Crossroads",
                    "faction": "scav",
                    "position": {"x": -20.0, "z": 5.0},
                    "outline": []
                }
            ],
            "transits": [
                {"description": "Transit to Factory", "position": {"x": 1.0, "z": 2.0}}
            ]
        },
        {"name": "Woods", "extracts": null}
    ]"#;

    #[test]
    fn test_parse_sample() {
        let dataset = FeatureDataset::from_str(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 2);

        let extracts = dataset.extracts("Customs");
        assert_eq!(extracts.len(), 2);
        assert!(extracts[0].is_pmc());
        assert!(!extracts[1].is_pmc());
        assert_eq!(extracts[0].position, WorldPoint::new(100.0, 50.0));
        assert_eq!(extracts[0].outline_points().map(|p| p.len()), Some(3));

        let transits = dataset.transits("Customs");
        assert_eq!(transits[0].name, "");
        assert_eq!(transits[0].description.as_deref(), Some("Transit to Factory"));
    }

    #[test]
    fn test_empty_outline_is_not_renderable() {
        let dataset = FeatureDataset::from_str(SAMPLE).unwrap();
        assert!(dataset.extracts("Customs")[1].outline_points().is_none());
        assert!(dataset.transits("Customs")[0].outline_points().is_none());
    }

    #[test]
    fn test_missing_collections_are_empty() {
        let dataset = FeatureDataset::from_str(SAMPLE).unwrap();
        assert!(dataset.extracts("Woods").is_empty());
        assert!(dataset.transits("Woods").is_empty());
        assert!(dataset.extracts("Terminal").is_empty());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            FeatureDataset::from_str("{not json"),
            Err(Error::ParseError(_))
        ));
    }
}
