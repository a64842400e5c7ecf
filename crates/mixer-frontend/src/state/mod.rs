//! Application state module

use std::sync::Arc;

use parking_lot::Mutex;

use mixer_core::{Channel, ColorState};

/// Actions that can be performed on the app state
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Slider moved
    SetChannelValue { channel: Channel, value: f32 },
    /// Channel text field committed
    CommitChannelText { channel: Channel, text: String },
    /// Channel switch toggled
    SetChannelEnabled { channel: Channel, enabled: bool },
    /// Preset picked from the list
    SelectPreset(String),
    /// Convert the hex field into channel values
    ConvertHex(String),
    /// Randomize all channels
    Randomize,
    /// Back to the first preset
    Reset,
    /// Alpha slider moved
    SetAlpha(f32),
}

/// Application state
pub struct AppState {
    /// The color model every widget reads from
    pub color: ColorState,
    /// Hex field buffer. Doubles as display and input, so it lives here
    /// rather than in the panel: successful mutations rewrite it from the
    /// model, a failed conversion clears it.
    pub hex_input: String,
    /// Pending actions
    pending_actions: Vec<AppAction>,
}

impl Default for AppState {
    fn default() -> Self {
        let color = ColorState::new();
        let hex_input = color.hex_string();
        Self {
            color,
            hex_input,
            pending_actions: Vec::new(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action
    pub fn queue_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    /// Take pending actions
    pub fn take_pending_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }
}

pub type SharedAppState = Arc<Mutex<AppState>>;

/// Create a new shared app state
pub fn create_shared_state() -> SharedAppState {
    Arc::new(Mutex::new(AppState::new()))
}
