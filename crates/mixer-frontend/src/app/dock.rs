//! Dock layout and tab viewer

use egui_dock::{DockState, NodeIndex, TabViewer};

use crate::panels::{ChannelsPanel, Panel, PresetsPanel, SwatchPanel};
use crate::state::SharedAppState;

/// Panel types for the dock system
pub enum PanelType {
    Channels(ChannelsPanel),
    Presets(PresetsPanel),
    Swatch(SwatchPanel),
}

impl PanelType {
    pub fn name(&self) -> &str {
        match self {
            PanelType::Channels(p) => p.name(),
            PanelType::Presets(p) => p.name(),
            PanelType::Swatch(p) => p.name(),
        }
    }
}

/// Tab viewer for dock area
pub struct MixerTabViewer<'a> {
    pub app_state: &'a SharedAppState,
}

impl TabViewer for MixerTabViewer<'_> {
    type Tab = PanelType;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.name().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        match tab {
            PanelType::Channels(panel) => panel.ui(ui, self.app_state),
            PanelType::Presets(panel) => panel.ui(ui, self.app_state),
            PanelType::Swatch(panel) => panel.ui(ui, self.app_state),
        }
    }
}

/// Create the default dock layout
pub fn create_dock_layout() -> DockState<PanelType> {
    let mut dock_state = DockState::new(vec![PanelType::Swatch(SwatchPanel::new())]);

    // Get the main surface
    let surface = dock_state.main_surface_mut();

    // Split right for the preset picker
    let [_swatch, _right] = surface.split_right(
        NodeIndex::root(),
        0.75,
        vec![PanelType::Presets(PresetsPanel::new())],
    );

    // Split left for the channel controls
    let [_left, _swatch] = surface.split_left(
        NodeIndex::root(),
        0.35,
        vec![PanelType::Channels(ChannelsPanel::new())],
    );

    dock_state
}
