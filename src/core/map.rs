use crate::{
    core::{
        bounds::Bounds,
        calibration::{Calibration, CalibrationField, CalibrationUpdate},
        config::{FeatureToggles, ViewerConfig},
        geo::{PercentPoint, Point, WorldPoint},
        maps::{self, MapDescriptor, MapId},
        store::CalibrationStore,
        tracking::QuestTracker,
        viewport::Viewport,
    },
    data::{
        features::FeatureDataset,
        quests::{Quest, QuestDataset},
    },
    layers::{
        base::ProjectionContext,
        features,
        manager::{CalibrationGuides, Overlay},
        quests,
    },
    traits::CoordinateTransform,
    Error, Result,
};
use serde::Serialize;

/// Pointer position translated to the image and to the game world
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CursorReadout {
    pub percent: PercentPoint,
    pub world: WorldPoint,
}

impl CursorReadout {
    /// World position as shown in the "GAME POS" box
    pub fn format(&self) -> String {
        format!("X: {:.2}, Z: {:.2}", self.world.x, self.world.z)
    }

    pub fn format_percent(&self) -> String {
        format!("{:.2}%, {:.2}%", self.percent.x, self.percent.y)
    }
}

/// Details of one objective of an expanded quest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveDetails {
    pub description: String,
    /// Whether the objective has points on the active map
    pub on_map: bool,
}

/// What the side panel shows for an expanded quest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestDetails {
    pub name: String,
    pub experience: u64,
    pub wiki_link: Option<String>,
    pub objectives: Vec<ObjectiveDetails>,
}

impl QuestDetails {
    fn new(quest: &Quest, map_name: &str) -> Self {
        Self {
            name: quest.name.clone(),
            experience: quest.experience,
            wiki_link: quest.wiki_link.clone(),
            objectives: quest
                .objectives
                .iter()
                .map(|o| ObjectiveDetails {
                    description: o.description.clone(),
                    on_map: !o.points_on(map_name).is_empty(),
                })
                .collect(),
        }
    }
}

/// One viewer session: the active map, its calibrations, tracked quests and viewport.
///
/// Calibrations live for the whole session and survive map switches. Tracked
/// quests and the viewport belong to the displayed map and are reset on switch.
#[derive(Debug, Clone)]
pub struct TacticalMap {
    store: CalibrationStore,
    features: FeatureDataset,
    quests: QuestDataset,
    active: &'static MapDescriptor,
    tracker: QuestTracker,
    pub viewport: Viewport,
    pub toggles: FeatureToggles,
    config: ViewerConfig,
    cursor: Option<CursorReadout>,
}

impl TacticalMap {
    pub fn new(features: FeatureDataset, quests: QuestDataset) -> Result<Self> {
        Self::with_config(features, quests, ViewerConfig::default())
    }

    pub fn with_config(
        features: FeatureDataset,
        quests: QuestDataset,
        config: ViewerConfig,
    ) -> Result<Self> {
        config.validate()?;
        let active = maps::by_id(MapId::default()).ok_or(Error::UnknownMap(MapId::default().0))?;
        Ok(Self {
            store: CalibrationStore::with_builtin_maps(),
            features,
            quests,
            active,
            tracker: QuestTracker::new(),
            viewport: Viewport::new(config.zoom.clone()),
            toggles: config.toggles,
            config,
            cursor: None,
        })
    }

    pub fn active_map(&self) -> &'static MapDescriptor {
        self.active
    }

    /// Switches the displayed map. Tracked quests, expansion and the viewport
    /// are reset; calibrations of every map are kept.
    pub fn select_map(&mut self, id: MapId) -> Result<()> {
        let descriptor = maps::by_id(id).ok_or(Error::UnknownMap(id.0))?;
        if descriptor.id != self.active.id {
            log::debug!("Switching map {} -> {}", self.active.name, descriptor.name);
        }
        self.active = descriptor;
        self.tracker.clear();
        self.viewport.reset();
        self.cursor = None;
        Ok(())
    }

    pub fn tracker(&self) -> &QuestTracker {
        &self.tracker
    }

    /// Tracks a quest by name. Adding an already tracked quest is a no-op.
    pub fn add_quest(&mut self, name: &str) -> Result<bool> {
        if self.quests.find(name).is_none() {
            return Err(Error::UnknownQuest(name.to_string()));
        }
        Ok(self.tracker.add(name))
    }

    pub fn remove_quest(&mut self, name: &str) -> bool {
        self.tracker.remove(name)
    }

    pub fn toggle_expanded(&mut self, name: &str) {
        self.tracker.toggle_expanded(name);
    }

    /// Quests on the active map that are not tracked yet
    pub fn available_quests(&self) -> Vec<&Quest> {
        self.quests
            .available_on(&self.active.name)
            .into_iter()
            .filter(|q| !self.tracker.is_tracked(&q.name))
            .collect()
    }

    /// Details of the expanded quest, if any
    pub fn quest_details(&self) -> Option<QuestDetails> {
        let name = self.tracker.expanded()?;
        let quest = self.quests.find(name)?;
        Some(QuestDetails::new(quest, &self.active.name))
    }

    /// Calibration of the active map
    pub fn calibration(&self) -> Calibration {
        self.store.get(self.active.id)
    }

    pub fn calibration_of(&self, id: MapId) -> Calibration {
        self.store.get(id)
    }

    /// Merges an update into the active map's calibration
    pub fn update_calibration(&mut self, update: &CalibrationUpdate) -> Result<Calibration> {
        self.store.update(self.active.id, update)
    }

    /// Applies a raw value typed into a calibration control.
    ///
    /// Unparsable text leaves the calibration unchanged.
    pub fn edit_calibration_field(
        &mut self,
        field: CalibrationField,
        raw: &str,
    ) -> Result<Calibration> {
        let update = CalibrationUpdate::from_input(field, raw);
        if update.is_empty() {
            log::warn!("Ignoring invalid {} input {:?}", field.label(), raw);
            return Ok(self.calibration());
        }
        self.update_calibration(&update)
    }

    /// Updates the cursor readout from a pointer position over the rendered
    /// image. Returns `None` when the image rect is degenerate.
    pub fn pointer_moved(&mut self, pointer: &Point, image_rect: &Bounds) -> Option<CursorReadout> {
        let percent = self.viewport.pointer_to_percent(pointer, image_rect)?;
        let readout = CursorReadout {
            percent,
            world: self.calibration().unproject(&percent),
        };
        self.cursor = Some(readout);
        Some(readout)
    }

    pub fn pointer_left(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<&CursorReadout> {
        self.cursor.as_ref()
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn features(&self) -> &FeatureDataset {
        &self.features
    }

    pub fn quests(&self) -> &QuestDataset {
        &self.quests
    }

    pub fn projection_context(&self) -> ProjectionContext {
        ProjectionContext::new(self.calibration(), self.viewport.marker_scale())
            .with_marker_config(self.config.markers.clone())
    }

    /// Projects everything visible on the active map with its current calibration
    pub fn overlay(&self) -> Overlay {
        let ctx = self.projection_context();
        let map_name = self.active.name.as_str();
        let (extracts, transits) =
            features::project_map(&self.features, map_name, &self.toggles, &ctx);
        let quests = quests::project_tracked(
            self.tracker.tracked(),
            self.tracker.expanded(),
            &self.quests,
            map_name,
            &ctx,
        );
        let guides = self
            .toggles
            .show_calibration
            .then(|| CalibrationGuides::new(&ctx));

        Overlay {
            map: self.active.id,
            marker_scale: ctx.marker_scale,
            extracts,
            transits,
            quests,
            guides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const FEATURES: &str = r#"[
        {
            "name": "Customs",
            "extracts": [
                {"name": "ZB-1011", "faction": "pmc", "position": {"x": 100.0, "y": 0.0, "z": 50.0}}
            ],
            "transits": []
        }
    ]"#;

    const QUESTS: &str = r#"[
        {
            "name": "Debut",
            "experience": 1700,
            "wikiLink": "https://escapefromtarkov.fandom.com/wiki/Debut",
            "objectives": [
                {"description": "Eliminate Scavs", "maps": [{"name": "Customs"}], "zones": [{"position": {"x": 10.0, "z": 20.0}}]}
            ]
        },
        {
            "name": "Shortage",
            "objectives": [
                {"description": "Find Salewa", "maps": [{"name": "Customs 21+"}], "zones": [{"position": {"x": 0.0, "z": 0.0}}]}
            ]
        },
        {
            "name": "Tarkov Shooter",
            "objectives": [{"description": "Hunt", "maps": [{"name": "Woods"}]}]
        }
    ]"#;

    fn session() -> TacticalMap {
        TacticalMap::new(
            FeatureDataset::from_str(FEATURES).unwrap(),
            QuestDataset::from_str(QUESTS).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_starts_on_customs() {
        let map = session();
        assert_eq!(map.active_map().name, "Customs");
        assert_eq!(map.calibration().offset_x, 65.2);
    }

    #[test]
    fn test_customs_overlay() {
        let map = session();
        let overlay = map.overlay();
        let marker = &overlay.extracts.markers[0];
        assert_abs_diff_eq!(marker.position.x, 55.8, epsilon = 1e-9);
        assert_abs_diff_eq!(marker.position.y, 65.3, epsilon = 1e-9);
        assert!(overlay.guides.is_none());
    }

    #[test]
    fn test_map_switch_resets_session_state() {
        let mut map = session();
        map.add_quest("Debut").unwrap();
        map.toggle_expanded("Debut");
        map.viewport.zoom_in();
        map.update_calibration(&CalibrationUpdate::new().offset_x(10.0)).unwrap();

        map.select_map(MapId(2)).unwrap();
        assert!(map.tracker().is_empty());
        assert!(map.tracker().expanded().is_none());
        assert_eq!(map.viewport.zoom, 1.0);

        map.select_map(MapId(1)).unwrap();
        assert_eq!(map.calibration().offset_x, 10.0);
    }

    #[test]
    fn test_unknown_map_rejected() {
        let mut map = session();
        assert!(matches!(map.select_map(MapId(99)), Err(Error::UnknownMap(99))));
        assert_eq!(map.active_map().id, MapId(1));
    }

    #[test]
    fn test_available_quests_exclude_tracked() {
        let mut map = session();
        let names: Vec<_> = map.available_quests().iter().map(|q| q.name.clone()).collect();
        assert_eq!(names, vec!["Debut", "Shortage"]);

        assert!(map.add_quest("Debut").unwrap());
        assert!(!map.add_quest("Debut").unwrap());
        assert_eq!(map.tracker().len(), 1);
        let names: Vec<_> = map.available_quests().iter().map(|q| q.name.clone()).collect();
        assert_eq!(names, vec!["Shortage"]);

        assert!(matches!(map.add_quest("Nope"), Err(Error::UnknownQuest(_))));
    }

    #[test]
    fn test_quest_details() {
        let mut map = session();
        map.add_quest("Debut").unwrap();
        assert!(map.quest_details().is_none());

        map.toggle_expanded("Debut");
        let details = map.quest_details().unwrap();
        assert_eq!(details.experience, 1700);
        assert_eq!(details.objectives[0].description, "Eliminate Scavs");
        assert!(details.objectives[0].on_map);
        assert!(details.wiki_link.is_some());
    }

    #[test]
    fn test_expanded_quest_is_on_top() {
        let mut map = session();
        map.add_quest("Debut").unwrap();
        map.add_quest("Shortage").unwrap();
        map.toggle_expanded("Debut");

        let overlay = map.overlay();
        let top = overlay.draw_order().last().map(|item| item.z_index());
        assert_eq!(top, Some(100));
    }

    #[test]
    fn test_cursor_readout() {
        let mut map = session();
        let rect = Bounds::from_rect(0.0, 0.0, 1000.0, 500.0);
        let readout = map.pointer_moved(&Point::new(558.0, 326.5), &rect).unwrap();

        assert_abs_diff_eq!(readout.world.x, 100.0, epsilon = 1e-6);
        assert_abs_diff_eq!(readout.world.z, 50.0, epsilon = 1e-6);
        assert_eq!(readout.format(), "X: 100.00, Z: 50.00");
        assert_eq!(readout.format_percent(), "55.80%, 65.30%");
        assert!(map.cursor().is_some());

        map.pointer_left();
        assert!(map.cursor().is_none());
    }

    #[test]
    fn test_invalid_field_input_keeps_value() {
        let mut map = session();
        let before = map.calibration();
        let after = map.edit_calibration_field(CalibrationField::ScaleX, "abc").unwrap();
        assert_eq!(before, after);

        let after = map.edit_calibration_field(CalibrationField::ScaleX, "0").unwrap();
        assert_eq!(after.scale_x, 0.0001);
    }

    #[test]
    fn test_calibration_guides_toggle() {
        let mut map = session();
        map.toggles.show_calibration = true;
        map.viewport.set_zoom(2.0);
        let guides = map.overlay().guides.unwrap();
        assert_eq!(guides.vertical_x, 65.2);
        assert_eq!(guides.thickness, 0.5);
    }
}
