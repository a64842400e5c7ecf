//! Channels panel: per-channel switch, tinted slider and value field

use egui::Ui;

use mixer_core::Channel;

use crate::panels::{Panel, rgb_color32};
use crate::state::{AppAction, SharedAppState};

/// Channel controls panel
pub struct ChannelsPanel {
    /// Edit buffers for the three value fields, synced from the model
    /// whenever the field is not focused
    text: [String; 3],
}

impl ChannelsPanel {
    pub fn new() -> Self {
        Self {
            text: std::array::from_fn(|_| String::new()),
        }
    }
}

impl Default for ChannelsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ChannelsPanel {
    fn name(&self) -> &str {
        "Channels"
    }

    fn ui(&mut self, ui: &mut Ui, app_state: &SharedAppState) {
        let color = app_state.lock().color.clone();

        for &channel in Channel::all() {
            let enabled = color.enabled(channel);
            let tint = rgb_color32(color.channel_tint(channel));

            ui.push_id(channel.display_name(), |ui| {
                ui.horizontal(|ui| {
                    // Switch
                    let mut on = enabled;
                    if ui.checkbox(&mut on, channel.display_name()).changed() {
                        app_state.lock().queue_action(AppAction::SetChannelEnabled {
                            channel,
                            enabled: on,
                        });
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Tint swatch follows the slider, not the switch
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 4.0, tint);

                        // Value field shows the inverted display value
                        self.value_field(ui, channel, &color, app_state);
                    });
                });

                // Slider is only live while the channel is switched on
                let mut value = color.raw_value(channel) as f32;
                ui.scope(|ui| {
                    ui.visuals_mut().selection.bg_fill = tint;
                    ui.spacing_mut().slider_width = (ui.available_width() - 16.0).max(96.0);
                    let response = ui.add_enabled(
                        enabled,
                        egui::Slider::new(&mut value, 0.0..=255.0)
                            .show_value(false)
                            .trailing_fill(true),
                    );
                    if response.changed() {
                        app_state
                            .lock()
                            .queue_action(AppAction::SetChannelValue { channel, value });
                    }
                });

                ui.add_space(8.0);
            });
        }
    }
}

impl ChannelsPanel {
    fn value_field(
        &mut self,
        ui: &mut Ui,
        channel: Channel,
        color: &mixer_core::ColorState,
        app_state: &SharedAppState,
    ) {
        let buffer = &mut self.text[channel.index()];

        let response = ui.add(
            egui::TextEdit::singleline(buffer)
                .desired_width(48.0)
                .horizontal_align(egui::Align::Center),
        );

        if response.lost_focus() {
            app_state.lock().queue_action(AppAction::CommitChannelText {
                channel,
                text: buffer.clone(),
            });
        }

        if !response.has_focus() {
            *buffer = color.display_value(channel).to_string();
        }
    }
}
