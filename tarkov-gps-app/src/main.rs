use std::path::PathBuf;

use anyhow::Context;
use tarkov_gps::{
    core::{config::ViewerConfig, maps},
    ui::UiMapExt,
    CalibrationField, CalibrationUpdate, FeatureDataset, InputHandler, MapId, QuestDataset,
    TacticalMap,
};

/// Desktop tactical map viewer.
///
/// Usage: `tarkov-gps-app [features.json] [quests.json] [config.json]`
fn main() -> anyhow::Result<()> {
    tarkov_gps::init_logging();

    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let features = load_or_empty(args.next(), |p| FeatureDataset::from_path(p), "feature");
    let quests = load_or_empty(args.next(), |p| QuestDataset::from_path(p), "quest");
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ViewerConfig::from_json_str(&json).context("parsing viewer config")?
        }
        None => ViewerConfig::default(),
    };

    let map = TacticalMap::with_config(features, quests, config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("TARKOV GPS"),
        ..Default::default()
    };

    eframe::run_native(
        "tarkov-gps-app",
        options,
        Box::new(|_cc| Box::new(GpsApp::new(map))),
    )
    .map_err(|e| anyhow::anyhow!("viewer exited with error: {e}"))?;

    Ok(())
}

fn load_or_empty<T: Default>(
    path: Option<PathBuf>,
    load: fn(PathBuf) -> tarkov_gps::Result<T>,
    what: &str,
) -> T {
    let Some(path) = path else {
        log::warn!("No {} dataset given, starting without one", what);
        return T::default();
    };
    match load(path.clone()) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::warn!("Failed to load {} dataset {}: {}", what, path.display(), e);
            T::default()
        }
    }
}

struct GpsApp {
    map: TacticalMap,
    input: InputHandler,
    selected_quest: String,
    show_calibration_panel: bool,
}

impl GpsApp {
    fn new(map: TacticalMap) -> Self {
        Self {
            map,
            input: InputHandler::new(),
            selected_quest: String::new(),
            show_calibration_panel: false,
        }
    }

    fn map_selector(&mut self, ui: &mut egui::Ui) {
        let active = self.map.active_map();
        let mut selected = active.id;
        egui::ComboBox::from_label("Map")
            .selected_text(active.name.as_str())
            .show_ui(ui, |ui| {
                for descriptor in maps::all() {
                    ui.selectable_value(&mut selected, descriptor.id, descriptor.name.as_str());
                }
            });
        if selected != active.id {
            self.select_map(selected);
        }
    }

    fn select_map(&mut self, id: MapId) {
        if let Err(e) = self.map.select_map(id) {
            log::warn!("{}", e);
        }
        self.selected_quest.clear();
    }

    fn quest_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Quests");

        let available: Vec<String> = self
            .map
            .available_quests()
            .iter()
            .map(|q| q.name.clone())
            .collect();
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_source("quest_picker")
                .selected_text(if self.selected_quest.is_empty() {
                    "Select quest..."
                } else {
                    self.selected_quest.as_str()
                })
                .show_ui(ui, |ui| {
                    for name in &available {
                        ui.selectable_value(&mut self.selected_quest, name.clone(), name.as_str());
                    }
                });
            let can_add = !self.selected_quest.is_empty();
            if ui.add_enabled(can_add, egui::Button::new("Add")).clicked() {
                if let Err(e) = self.map.add_quest(&self.selected_quest) {
                    log::warn!("{}", e);
                }
                self.selected_quest.clear();
            }
        });

        ui.separator();

        let tracked: Vec<_> = self.map.tracker().tracked().to_vec();
        if tracked.is_empty() {
            ui.weak("No tracked quests");
        }
        for quest in tracked {
            let [r, g, b] = quest.color.to_rgb();
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::from_rgb(r, g, b), "●");
                let expanded = self.map.tracker().is_expanded(&quest.name);
                if ui.selectable_label(expanded, quest.name.as_str()).clicked() {
                    self.map.toggle_expanded(&quest.name);
                }
                if ui.small_button("✕").clicked() {
                    self.map.remove_quest(&quest.name);
                }
            });
        }

        if let Some(details) = self.map.quest_details() {
            ui.separator();
            ui.strong(details.name.as_str());
            ui.label(format!("Experience: {}", details.experience));
            if let Some(link) = &details.wiki_link {
                ui.hyperlink_to("Wiki", link);
            }
            for objective in &details.objectives {
                let text = egui::RichText::new(format!("• {}", objective.description));
                if objective.on_map {
                    ui.label(text);
                } else {
                    ui.label(text.weak());
                }
            }
        }
    }

    fn calibration_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading(format!("Calibration: {}", self.map.active_map().name));
        let current = self.map.calibration();

        for field in CalibrationField::ALL {
            let update = if field.is_toggle() {
                let mut on = current.field(field) != 0.0;
                ui.checkbox(&mut on, field.label())
                    .changed()
                    .then(|| CalibrationUpdate::with_value(field, if on { 1.0 } else { 0.0 }))
            } else {
                let Some((min, max, step)) = field.slider_range() else {
                    continue;
                };
                let mut value = current.field(field);
                ui.add(
                    egui::Slider::new(&mut value, min..=max)
                        .step_by(step)
                        .clamp_to_range(false)
                        .text(field.label()),
                )
                .changed()
                .then(|| CalibrationUpdate::with_value(field, value))
            };

            if let Some(update) = update {
                if let Err(e) = self.map.update_calibration(&update) {
                    log::warn!("{}", e);
                }
            }
        }

        let default = self.map.active_map().default_calibration;
        if ui.button("Restore defaults").clicked() {
            let update = CalibrationUpdate::new()
                .offset_x(default.offset_x)
                .offset_z(default.offset_z)
                .scale_x(default.scale_x)
                .scale_z(default.scale_z)
                .flip_x(default.flip_x)
                .flip_z(default.flip_z)
                .swap_axes(default.swap_axes);
            if let Err(e) = self.map.update_calibration(&update) {
                log::warn!("{}", e);
            }
        }
    }
}

impl eframe::App for GpsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                self.map_selector(ui);
                ui.separator();
                ui.checkbox(&mut self.map.toggles.show_extracts, "Extracts");
                ui.checkbox(&mut self.map.toggles.show_transits, "Transits");
                ui.checkbox(&mut self.map.toggles.show_calibration, "Calibration guides");
                ui.separator();
                ui.toggle_value(&mut self.show_calibration_panel, "Calibrate");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Zoom: {:.1}x", self.map.viewport.zoom));
                    if let Some(readout) = self.map.cursor() {
                        ui.label(readout.format_percent());
                    }
                });
            });
        });

        egui::SidePanel::left("quest_panel")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.quest_panel(ui));
            });

        if self.show_calibration_panel {
            egui::SidePanel::right("calibration_panel")
                .resizable(true)
                .default_width(300.0)
                .show(ctx, |ui| self.calibration_panel(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.tactical_map(&mut self.map, &mut self.input);
        });
    }
}
