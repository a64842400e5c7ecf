//! Swatch panel: composed color, alpha, hex conversion

use egui::Ui;

use mixer_core::{Channel, TextColor};

use crate::panels::{Panel, rgb_color32};
use crate::state::{AppAction, SharedAppState};

/// Composed color panel
pub struct SwatchPanel;

impl SwatchPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SwatchPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for SwatchPanel {
    fn name(&self) -> &str {
        "Swatch"
    }

    fn ui(&mut self, ui: &mut Ui, app_state: &SharedAppState) {
        let color = app_state.lock().color.clone();

        let effective = color.effective_color();
        let alpha = color.alpha();
        let rgb = rgb_color32(effective);
        let swatch = egui::Color32::from_rgba_unmultiplied(
            rgb.r(),
            rgb.g(),
            rgb.b(),
            (alpha * 255.0).round() as u8,
        );

        ui.horizontal(|ui| {
            // Composed color with alpha applied
            let size = egui::vec2((ui.available_width() - 48.0).max(64.0), 160.0);
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            ui.painter().rect_filled(rect, 12.0, swatch);
            ui.painter()
                .rect_stroke(rect, 12.0, egui::Stroke::new(2.0, egui::Color32::BLACK));

            // Alpha slider
            let mut a = alpha;
            let response = ui.add(
                egui::Slider::new(&mut a, 0.0..=1.0)
                    .vertical()
                    .show_value(false),
            );
            if response.changed() {
                app_state.lock().queue_action(AppAction::SetAlpha(a));
            }
        });

        ui.add_space(8.0);

        // Hex field painted over the composed color in the contrast color
        ui.horizontal(|ui| {
            let text_color = match color.contrast_text_color() {
                TextColor::Black => egui::Color32::BLACK,
                TextColor::White => egui::Color32::WHITE,
            };

            let mut hex_text = app_state.lock().hex_input.clone();
            let changed = ui
                .scope(|ui| {
                    ui.visuals_mut().extreme_bg_color = rgb_color32(effective);
                    ui.add(
                        egui::TextEdit::singleline(&mut hex_text)
                            .desired_width(96.0)
                            .text_color(text_color)
                            .horizontal_align(egui::Align::Center),
                    )
                    .changed()
                })
                .inner;
            if changed {
                app_state.lock().hex_input = hex_text.clone();
            }

            if ui.button("Convert").clicked() {
                app_state.lock().queue_action(AppAction::ConvertHex(hex_text));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Reset").clicked() {
                    app_state.lock().queue_action(AppAction::Reset);
                }
                if ui.button("Random").clicked() {
                    app_state.lock().queue_action(AppAction::Randomize);
                }
            });
        });

        ui.add_space(8.0);

        // Single-channel component views, gated like the swatch itself
        ui.horizontal(|ui| {
            for &channel in Channel::all() {
                let mut component = [0.0; 3];
                component[channel.index()] = effective[channel.index()];

                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(48.0, 32.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 6.0, rgb_color32(component));
            }
        });
    }
}
