//! Presets panel: the fixed list of named colors

use egui::Ui;

use mixer_core::preset;

use crate::panels::{Panel, rgb_color32};
use crate::state::{AppAction, SharedAppState};

/// Preset picker panel
pub struct PresetsPanel;

impl PresetsPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PresetsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for PresetsPanel {
    fn name(&self) -> &str {
        "Presets"
    }

    fn ui(&mut self, ui: &mut Ui, app_state: &SharedAppState) {
        let selected = app_state
            .lock()
            .color
            .selected_preset()
            .map(str::to_string);

        egui::ScrollArea::vertical()
            .id_salt("preset_list_scroll")
            .show(ui, |ui| {
                for &(name, rgb) in preset::PRESETS {
                    let is_selected = selected.as_deref() == Some(name);

                    ui.horizontal(|ui| {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 3.0, rgb_color32(rgb));

                        if ui.selectable_label(is_selected, name).clicked() {
                            app_state
                                .lock()
                                .queue_action(AppAction::SelectPreset(name.to_string()));
                        }
                    });
                }
            });
    }
}
