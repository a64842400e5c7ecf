//! Main application module

mod dock;
mod menu;

use egui_dock::{DockArea, DockState, Style};

use crate::actions::dispatch_action;
use crate::state::{SharedAppState, create_shared_state};

pub use dock::{MixerTabViewer, PanelType, create_dock_layout};
pub use menu::{MenuAction, render_menu_bar};

/// Main application
pub struct ColorMixerApp {
    dock_state: DockState<PanelType>,
    app_state: SharedAppState,
}

impl ColorMixerApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            dock_state: create_dock_layout(),
            app_state: create_shared_state(),
        }
    }

    /// Process pending actions
    fn process_actions(&mut self) {
        let mut state = self.app_state.lock();
        for action in state.take_pending_actions() {
            dispatch_action(action, &mut state);
        }
    }
}

impl eframe::App for ColorMixerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process pending actions
        self.process_actions();

        // Menu bar
        if let Some(menu_action) = render_menu_bar(ctx, &self.app_state) {
            match menu_action {
                MenuAction::ResetLayout => {
                    self.dock_state = create_dock_layout();
                }
            }
        }

        // Dock area
        DockArea::new(&mut self.dock_state)
            .style(Style::from_egui(ctx.style().as_ref()))
            .show(
                ctx,
                &mut MixerTabViewer {
                    app_state: &self.app_state,
                },
            );
    }
}
