use crate::{
    core::{constants::EXTENDED_AREA_SUFFIX, geo::WorldPoint},
    data::null_as_default,
    prelude::HashSet,
    Error, Result,
};
use serde::{Deserialize, Serialize};

/// Reference to a map an objective applies to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub position: WorldPoint,
}

/// A spawn-style location with several candidate positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PossibleLocation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub positions: Vec<WorldPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub maps: Vec<MapRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub zones: Vec<Zone>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub possible_locations: Vec<PossibleLocation>,
}

/// True if a dataset map name refers to `map_name` or its extended area
pub fn matches_map(candidate: &str, map_name: &str) -> bool {
    candidate == map_name
        || candidate
            .strip_prefix(map_name)
            .is_some_and(|rest| rest == EXTENDED_AREA_SUFFIX)
}

impl Objective {
    /// True if the objective lists the map (or its extended area)
    pub fn applies_to(&self, map_name: &str) -> bool {
        self.maps.iter().any(|m| matches_map(&m.name, map_name))
    }

    /// Zone positions followed by every candidate of every possible location
    pub fn points(&self) -> Vec<WorldPoint> {
        self.zones
            .iter()
            .map(|z| z.position)
            .chain(
                self.possible_locations
                    .iter()
                    .flat_map(|loc| loc.positions.iter().copied()),
            )
            .collect()
    }

    /// Points of the objective on the given map; empty if it does not apply there
    pub fn points_on(&self, map_name: &str) -> Vec<WorldPoint> {
        if self.applies_to(map_name) {
            self.points()
        } else {
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub objectives: Vec<Objective>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: u64,
    #[serde(default)]
    pub wiki_link: Option<String>,
}

impl Quest {
    /// True if any objective applies to the map
    pub fn is_on_map(&self, map_name: &str) -> bool {
        self.objectives.iter().any(|o| o.applies_to(map_name))
    }
}

/// The quest dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestDataset {
    quests: Vec<Quest>,
}

impl QuestDataset {
    pub fn new(quests: Vec<Quest>) -> Self {
        Self { quests }
    }

    /// Parses the dataset from its JSON form
    pub fn from_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::ParseError(format!("Invalid quest dataset: {}", e)))
    }

    /// Loads the dataset from a JSON file
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let dataset = Self::from_str(&super::read_file(path.as_ref())?)?;
        log::info!("Loaded {} quests", dataset.quests.len());
        Ok(dataset)
    }

    /// First quest with the given name
    pub fn find(&self, name: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.name == name)
    }

    /// Quests with at least one objective on the map, de-duplicated by name
    /// in dataset order
    pub fn available_on(&self, map_name: &str) -> Vec<&Quest> {
        let mut seen = HashSet::default();
        self.quests
            .iter()
            .filter(|q| q.is_on_map(map_name))
            .filter(|q| seen.insert(q.name.as_str()))
            .collect()
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "name": "Debut",
            "experience": 1700,
            "wikiLink": "https://escapefromtarkov.fandom.com/wiki/Debut",
            "objectives": [
                {"description": "Eliminate Scavs on Customs", "maps": [{"name": "Customs"}], "zones": null}
            ]
        },
        {
            "name": "Delivery from the Past",
            "objectives": [
                {
                    "description": "Stash the case",
                    "maps": [{"name": "Customs 21+"}],
                    "zones": [{"position": {"x": 1.0, "y": 0.0, "z": 2.0}}],
                    "possibleLocations": [
                        {"positions": [{"x": 3.0, "z": 4.0}, {"x": 5.0, "z": 6.0}]},
                        {"positions": [{"x": 7.0, "y": 8.0}]}
                    ]
                },
                {"description": "Somewhere else", "maps": [{"name": "Woods"}], "zones": [{"position": {"x": 9.0, "z": 9.0}}]}
            ]
        },
        {
            "name": "Debut",
            "objectives": [{"maps": [{"name": "Customs"}]}]
        },
        {
            "name": "Shortage",
            "objectives": [{"maps": [{"name": "Customs Extended"}]}]
        }
    ]"#;

    #[test]
    fn test_parse_sample() {
        let dataset = QuestDataset::from_str(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 4);

        let debut = dataset.find("Debut").unwrap();
        assert_eq!(debut.experience, 1700);
        assert!(debut.objectives[0].zones.is_empty());
        assert!(dataset.find("Shortage").unwrap().wiki_link.is_none());
    }

    #[test]
    fn test_map_name_matching() {
        assert!(matches_map("Customs", "Customs"));
        assert!(matches_map("Customs 21+", "Customs"));
        assert!(!matches_map("Customs Extended", "Customs"));
        assert!(!matches_map("Customs", "Customs 21+"));
    }

    #[test]
    fn test_objective_points_flatten_locations() {
        let dataset = QuestDataset::from_str(SAMPLE).unwrap();
        let objective = &dataset.find("Delivery from the Past").unwrap().objectives[0];

        assert_eq!(
            objective.points_on("Customs"),
            vec![
                WorldPoint::new(1.0, 2.0),
                WorldPoint::new(3.0, 4.0),
                WorldPoint::new(5.0, 6.0),
                WorldPoint::new(7.0, 8.0),
            ]
        );
    }

    #[test]
    fn test_objective_off_map_has_no_points() {
        let dataset = QuestDataset::from_str(SAMPLE).unwrap();
        let objective = &dataset.find("Delivery from the Past").unwrap().objectives[1];
        assert!(objective.points_on("Customs").is_empty());
        assert_eq!(objective.points_on("Woods").len(), 1);
    }

    #[test]
    fn test_available_on_deduplicates() {
        let dataset = QuestDataset::from_str(SAMPLE).unwrap();
        let names: Vec<_> = dataset
            .available_on("Customs")
            .iter()
            .map(|q| q.name.as_str())
            .collect();
        assert_eq!(names, vec!["Debut", "Delivery from the Past"]);
        assert!(dataset.available_on("Lighthouse").is_empty());
    }
}
