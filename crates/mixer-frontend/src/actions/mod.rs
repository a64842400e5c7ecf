//! Action handling module
//!
//! Actions are queued in AppState by the panels and processed once per
//! frame. Every handler writes through the color model and then refreshes
//! the hex buffer, so widgets always repaint from consistent state.

use crate::state::{AppAction, AppState};

/// Dispatch an action onto the app state
pub fn dispatch_action(action: AppAction, state: &mut AppState) {
    match action {
        AppAction::SetChannelValue { channel, value } => {
            state.color.set_raw_value(channel, value);
        }
        AppAction::CommitChannelText { channel, text } => {
            state.color.set_from_text(channel, &text);
        }
        AppAction::SetChannelEnabled { channel, enabled } => {
            state.color.set_enabled(channel, enabled);
        }
        AppAction::SelectPreset(name) => {
            if let Err(e) = state.color.apply_preset(&name) {
                // Unreachable from the picker, which only offers known names
                tracing::warn!("{}", e);
            }
        }
        AppAction::ConvertHex(hex) => {
            if let Err(e) = state.color.apply_hex(&hex) {
                // Reject the string but keep the color; the field clears
                tracing::debug!("{}", e);
                state.hex_input.clear();
                return;
            }
        }
        AppAction::Randomize => {
            state.color.randomize();
        }
        AppAction::Reset => {
            state.color.reset();
        }
        AppAction::SetAlpha(alpha) => {
            state.color.set_alpha(alpha);
        }
    }

    state.hex_input = state.color.hex_string();
}
