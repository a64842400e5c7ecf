//! Color Mixer Frontend
//!
//! egui-based presentation layer over the `mixer-core` color model. All
//! logic lives in the core crate; panels here only queue actions and paint
//! from the derived views.

pub mod actions;
pub mod app;
pub mod panels;
pub mod state;

// Re-exports for convenience
pub use app::ColorMixerApp;
pub use state::{AppAction, AppState, SharedAppState};
