//! UI panels

mod channels;
mod presets;
mod swatch;

pub use channels::ChannelsPanel;
pub use presets::PresetsPanel;
pub use swatch::SwatchPanel;

use crate::state::SharedAppState;

/// Panel trait for dockable UI panels
pub trait Panel {
    /// Panel name for tab title
    fn name(&self) -> &str;

    /// Draw the panel UI
    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState);
}

/// Convert a [0, 1] RGB triple to an opaque egui color
pub(crate) fn rgb_color32(rgb: [f32; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(
        (rgb[0] * 255.0).round() as u8,
        (rgb[1] * 255.0).round() as u8,
        (rgb[2] * 255.0).round() as u8,
    )
}
