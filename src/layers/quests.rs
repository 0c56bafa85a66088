//! Projects objective locations of tracked quests onto the active map.

use crate::{
    core::tracking::{QuestColor, TrackedQuest},
    data::quests::{Quest, QuestDataset},
    layers::{
        base::{LayerKind, ProjectionContext},
        marker::{Marker, MarkerIcon},
    },
    traits::CoordinateTransform,
};
use serde::Serialize;

/// Projected points of one objective
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedObjective {
    /// Position of the objective within its quest
    pub index: usize,
    pub description: String,
    pub markers: Vec<Marker>,
}

/// Projected objectives of one tracked quest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedQuest {
    pub name: String,
    pub color: QuestColor,
    pub expanded: bool,
    pub objectives: Vec<ProjectedObjective>,
}

impl ProjectedQuest {
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.objectives.iter().flat_map(|o| o.markers.iter())
    }

    pub fn marker_count(&self) -> usize {
        self.objectives.iter().map(|o| o.markers.len()).sum()
    }
}

/// Projects the objectives of `quest` that apply to `map_name`.
///
/// Objectives without a map match or without points are left out.
pub fn project_quest(
    quest: &Quest,
    color: QuestColor,
    expanded: bool,
    map_name: &str,
    ctx: &ProjectionContext,
) -> ProjectedQuest {
    let (layer, scale) = if expanded {
        (
            LayerKind::ExpandedQuestMarkers,
            ctx.marker_scale * ctx.markers.expanded_multiplier,
        )
    } else {
        (LayerKind::QuestMarkers, ctx.marker_scale)
    };

    let objectives = quest
        .objectives
        .iter()
        .enumerate()
        .filter_map(|(index, objective)| {
            let points = objective.points_on(map_name);
            if points.is_empty() {
                return None;
            }
            let markers = ctx
                .calibration
                .project_all(&points)
                .into_iter()
                .map(|position| {
                    Marker::new(position, MarkerIcon::QuestObjective, layer)
                        .with_title(quest.name.clone())
                        .with_scale(scale)
                        .with_color(color)
                })
                .collect();
            Some(ProjectedObjective {
                index,
                description: objective.description.clone(),
                markers,
            })
        })
        .collect();

    ProjectedQuest {
        name: quest.name.clone(),
        color,
        expanded,
        objectives,
    }
}

/// Projects every tracked quest found in the dataset, in tracking order
pub fn project_tracked(
    tracked: &[TrackedQuest],
    expanded: Option<&str>,
    dataset: &QuestDataset,
    map_name: &str,
    ctx: &ProjectionContext,
) -> Vec<ProjectedQuest> {
    tracked
        .iter()
        .filter_map(|tq| {
            let Some(quest) = dataset.find(&tq.name) else {
                log::warn!("Tracked quest {:?} is not in the dataset", tq.name);
                return None;
            };
            let is_expanded = expanded == Some(tq.name.as_str());
            Some(project_quest(quest, tq.color, is_expanded, map_name, ctx))
        })
        .collect()
}
