//! Menu bar rendering

use crate::state::{AppAction, SharedAppState};

/// Actions the menu triggers on the app shell rather than the color state
pub enum MenuAction {
    ResetLayout,
}

/// Render the menu bar and return any triggered action
pub fn render_menu_bar(ctx: &egui::Context, app_state: &SharedAppState) -> Option<MenuAction> {
    let mut menu_action = None;

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
            ui.menu_button("Color", |ui| {
                if ui.button("Randomize").clicked() {
                    app_state.lock().queue_action(AppAction::Randomize);
                    ui.close_menu();
                }
                if ui.button("Reset").clicked() {
                    app_state.lock().queue_action(AppAction::Reset);
                    ui.close_menu();
                }
            });
            ui.menu_button("View", |ui| {
                if ui.button("Reset Layout").clicked() {
                    menu_action = Some(MenuAction::ResetLayout);
                    ui.close_menu();
                }
            });
        });
    });

    menu_action
}
