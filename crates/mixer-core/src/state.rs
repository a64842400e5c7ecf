//! Color state and derived views
//!
//! `ColorState` is the single source of truth for the mixer screen. Every
//! input modality (slider, text field, switch, preset pick, hex string)
//! funnels into a write operation here, and every widget repaints from the
//! derived views after each write.

use rand::Rng;

use crate::channel::{Channel, ChannelState};
use crate::preset;

/// Contrast color for text rendered over the composed color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Black,
    White,
}

/// The full mixer state: three channels, alpha, selected preset
#[derive(Debug, Clone, PartialEq)]
pub struct ColorState {
    red: ChannelState,
    green: ChannelState,
    blue: ChannelState,
    alpha: f32,
    selected_preset: Option<String>,
}

impl Default for ColorState {
    fn default() -> Self {
        Self {
            red: ChannelState::default(),
            green: ChannelState::default(),
            blue: ChannelState::default(),
            alpha: 1.0,
            selected_preset: None,
        }
    }
}

impl ColorState {
    pub fn new() -> Self {
        Self::default()
    }

    fn channel(&self, channel: Channel) -> &ChannelState {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut ChannelState {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    // --- Write operations ---

    /// Set a channel's slider value. Clamps to [0, 255] and truncates, so
    /// out-of-range input is absorbed rather than rejected.
    pub fn set_raw_value(&mut self, channel: Channel, value: f32) {
        self.channel_mut(channel).raw = value.clamp(0.0, 255.0) as u8;
    }

    /// Commit a channel's text field. Unparseable text resets to 0 rather
    /// than keeping the previous value.
    ///
    /// Note: the parsed number drives the slider value directly, while the
    /// field itself always re-renders as the inverted display value. Typing
    /// a number therefore does not round-trip. Kept asymmetric on purpose.
    pub fn set_from_text(&mut self, channel: Channel, text: &str) {
        let value = text.parse::<f32>().unwrap_or(0.0);
        self.set_raw_value(channel, value);
    }

    /// Toggle a channel's contribution. The slider value is untouched, so
    /// switching back on restores the previous color.
    pub fn set_enabled(&mut self, channel: Channel, on: bool) {
        self.channel_mut(channel).enabled = on;
    }

    /// Apply a named preset: slider to `round(component * 255)`, switch on
    /// for every non-zero component. Unknown names leave state unchanged.
    pub fn apply_preset(&mut self, name: &str) -> Result<(), ColorError> {
        let components = preset::components(name)
            .ok_or_else(|| ColorError::PresetNotFound(name.to_string()))?;

        for &channel in Channel::all() {
            let raw = (components[channel.index()] * 255.0).round() as u8;
            let state = self.channel_mut(channel);
            state.raw = raw;
            state.enabled = raw > 0;
        }
        self.selected_preset = Some(name.to_string());
        Ok(())
    }

    /// Apply a `#RRGGBB` hex string (leading `#` optional). Anything other
    /// than exactly six digits is rejected with state unchanged; a bad digit
    /// pair inside a six-character string coalesces to 0.
    pub fn apply_hex(&mut self, hex: &str) -> Result<(), ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let chars: Vec<char> = digits.chars().collect();
        if chars.len() != 6 {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }

        for &channel in Channel::all() {
            let pair: String = chars[channel.index() * 2..channel.index() * 2 + 2]
                .iter()
                .collect();
            let byte = u8::from_str_radix(&pair, 16).unwrap_or(0);
            let state = self.channel_mut(channel);
            state.raw = byte;
            state.enabled = byte != 0;
        }
        Ok(())
    }

    /// Draw a uniform value in [0, 255] for each channel independently
    pub fn randomize(&mut self) {
        let mut rng = rand::rng();
        for &channel in Channel::all() {
            let raw: u8 = rng.random_range(0..=255);
            let state = self.channel_mut(channel);
            state.raw = raw;
            state.enabled = raw > 0;
        }
    }

    /// Back to the first preset (Black). Idempotent.
    pub fn reset(&mut self) {
        if let Some((first, _)) = preset::PRESETS.first() {
            self.apply_preset(first).ok();
        }
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    // --- Read accessors ---

    pub fn raw_value(&self, channel: Channel) -> u8 {
        self.channel(channel).raw
    }

    pub fn display_value(&self, channel: Channel) -> u8 {
        self.channel(channel).display_value()
    }

    pub fn enabled(&self, channel: Channel) -> bool {
        self.channel(channel).enabled
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn selected_preset(&self) -> Option<&str> {
        self.selected_preset.as_deref()
    }

    // --- Derived views ---

    /// The composed RGB actually rendered, with each channel's contribution
    /// gated by its switch
    pub fn effective_color(&self) -> [f32; 3] {
        [
            self.red.effective(),
            self.green.effective(),
            self.blue.effective(),
        ]
    }

    /// `#RRGGBB` from the slider values. Deliberately ungated: a switched-off
    /// channel still shows its slider's digits.
    pub fn hex_string(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            self.red.raw, self.green.raw, self.blue.raw
        )
    }

    /// Black or white, whichever reads against the effective color.
    /// Luminance heuristic: (r*299 + g*587 + b*114) / 1000.
    pub fn contrast_text_color(&self) -> TextColor {
        let [r, g, b] = self.effective_color();
        let luminance = (r * 299.0 + g * 587.0 + b * 114.0) / 1000.0;
        if luminance < 0.5 {
            TextColor::White
        } else {
            TextColor::Black
        }
    }

    /// Pure single-channel color for tinting that channel's slider track.
    /// Follows the slider value, not the switch.
    pub fn channel_tint(&self, channel: Channel) -> [f32; 3] {
        let mut tint = [0.0; 3];
        tint[channel.index()] = self.channel(channel).raw as f32 / 255.0;
        tint
    }
}

/// Color state errors. Both are recoverable and leave state unchanged; the
/// caller reflects them in the UI (e.g. clears the hex field).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("Preset not found: {0}")]
    PresetNotFound(String),
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_raw_value_inverted_display() {
        let mut state = ColorState::new();
        for value in 0..=255 {
            state.set_raw_value(Channel::Red, value as f32);
            assert_eq!(state.raw_value(Channel::Red), value);
            assert_eq!(state.display_value(Channel::Red), 255 - value);
        }
    }

    #[test]
    fn test_set_raw_value_clamps() {
        let mut state = ColorState::new();
        state.set_raw_value(Channel::Green, 300.0);
        assert_eq!(state.raw_value(Channel::Green), 255);
        state.set_raw_value(Channel::Green, -10.0);
        assert_eq!(state.raw_value(Channel::Green), 0);
    }

    #[test]
    fn test_set_raw_value_truncates() {
        let mut state = ColorState::new();
        state.set_raw_value(Channel::Blue, 127.9);
        assert_eq!(state.raw_value(Channel::Blue), 127);
    }

    #[test]
    fn test_set_from_text_drives_slider_directly() {
        let mut state = ColorState::new();
        // The typed number lands on the slider, not the inverted display
        state.set_from_text(Channel::Red, "200");
        assert_eq!(state.raw_value(Channel::Red), 200);
        assert_eq!(state.display_value(Channel::Red), 55);
    }

    #[test]
    fn test_set_from_text_resets_to_zero_on_garbage() {
        let mut state = ColorState::new();
        state.set_raw_value(Channel::Red, 100.0);
        state.set_from_text(Channel::Red, "not a number");
        assert_eq!(state.raw_value(Channel::Red), 0);
        state.set_from_text(Channel::Red, "");
        assert_eq!(state.raw_value(Channel::Red), 0);
    }

    #[test]
    fn test_set_from_text_clamps() {
        let mut state = ColorState::new();
        state.set_from_text(Channel::Blue, "999");
        assert_eq!(state.raw_value(Channel::Blue), 255);
        state.set_from_text(Channel::Blue, "-3");
        assert_eq!(state.raw_value(Channel::Blue), 0);
    }

    #[test]
    fn test_set_enabled_keeps_raw() {
        let mut state = ColorState::new();
        state.set_raw_value(Channel::Green, 42.0);
        state.set_enabled(Channel::Green, true);
        state.set_enabled(Channel::Green, false);
        assert_eq!(state.raw_value(Channel::Green), 42);
    }

    #[test]
    fn test_apply_preset_white() {
        let mut state = ColorState::new();
        state.apply_preset("White").unwrap();
        for &channel in Channel::all() {
            assert_eq!(state.raw_value(channel), 255);
            assert!(state.enabled(channel));
        }
        assert_eq!(state.effective_color(), [1.0, 1.0, 1.0]);
        assert_eq!(state.selected_preset(), Some("White"));
    }

    #[test]
    fn test_apply_preset_rounds_components() {
        let mut state = ColorState::new();
        state.apply_preset("Orange").unwrap();
        assert_eq!(state.raw_value(Channel::Red), 255);
        // 0.647 * 255 = 164.985 rounds up
        assert_eq!(state.raw_value(Channel::Green), 165);
        assert_eq!(state.raw_value(Channel::Blue), 0);
        assert!(!state.enabled(Channel::Blue));
    }

    #[test]
    fn test_apply_preset_unknown_leaves_state_unchanged() {
        let mut state = ColorState::new();
        state.apply_preset("Red").unwrap();
        let before = state.clone();

        let err = state.apply_preset("Nonexistent").unwrap_err();
        assert_eq!(err, ColorError::PresetNotFound("Nonexistent".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_hex_red() {
        let mut state = ColorState::new();
        state.apply_hex("#FF0000").unwrap();
        assert_eq!(state.raw_value(Channel::Red), 255);
        assert_eq!(state.raw_value(Channel::Green), 0);
        assert_eq!(state.raw_value(Channel::Blue), 0);
        assert!(state.enabled(Channel::Red));
        assert!(!state.enabled(Channel::Green));
        assert!(!state.enabled(Channel::Blue));
        assert_eq!(state.hex_string(), "#FF0000");
    }

    #[test]
    fn test_apply_hex_without_prefix_and_lowercase() {
        let mut state = ColorState::new();
        state.apply_hex("1a2b3c").unwrap();
        assert_eq!(state.raw_value(Channel::Red), 0x1A);
        assert_eq!(state.raw_value(Channel::Green), 0x2B);
        assert_eq!(state.raw_value(Channel::Blue), 0x3C);
        assert_eq!(state.hex_string(), "#1A2B3C");
    }

    #[test]
    fn test_apply_hex_wrong_length_rejected() {
        let mut state = ColorState::new();
        state.apply_preset("Cyan").unwrap();
        let before = state.clone();

        assert!(matches!(
            state.apply_hex("ABC"),
            Err(ColorError::InvalidHex(_))
        ));
        assert!(matches!(
            state.apply_hex("#AABBCCDD"),
            Err(ColorError::InvalidHex(_))
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_hex_bad_pair_coalesces_to_zero() {
        let mut state = ColorState::new();
        state.apply_hex("FFZZ00").unwrap();
        assert_eq!(state.raw_value(Channel::Red), 255);
        assert_eq!(state.raw_value(Channel::Green), 0);
        assert!(!state.enabled(Channel::Green));
    }

    #[test]
    fn test_hex_string_uses_raw_not_effective() {
        let mut state = ColorState::new();
        state.apply_preset("Red").unwrap();
        state.set_enabled(Channel::Red, false);

        // Switched off: no contribution, but the digits stay
        assert_eq!(state.effective_color(), [0.0, 0.0, 0.0]);
        assert_eq!(state.hex_string(), "#FF0000");
    }

    #[test]
    fn test_randomize_ties_enabled_to_raw() {
        let mut state = ColorState::new();
        for _ in 0..32 {
            state.randomize();
            for &channel in Channel::all() {
                assert_eq!(state.enabled(channel), state.raw_value(channel) > 0);
            }
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = ColorState::new();
        state.randomize();
        state.set_alpha(0.3);

        state.reset();
        let once = state.clone();
        state.reset();
        assert_eq!(state, once);

        for &channel in Channel::all() {
            assert_eq!(state.raw_value(channel), 0);
            assert!(!state.enabled(channel));
        }
        assert_eq!(state.selected_preset(), Some("Black"));
    }

    #[test]
    fn test_contrast_text_color() {
        let mut state = ColorState::new();
        state.apply_preset("Black").unwrap();
        assert_eq!(state.contrast_text_color(), TextColor::White);
        state.apply_preset("White").unwrap();
        assert_eq!(state.contrast_text_color(), TextColor::Black);
        // Pure green is bright enough for black text
        state.apply_preset("Green").unwrap();
        assert_eq!(state.contrast_text_color(), TextColor::Black);
        // Pure blue is not
        state.apply_preset("Blue").unwrap();
        assert_eq!(state.contrast_text_color(), TextColor::White);
    }

    #[test]
    fn test_channel_tint_ignores_enabled() {
        let mut state = ColorState::new();
        state.set_raw_value(Channel::Green, 128.0);
        state.set_enabled(Channel::Green, false);
        let tint = state.channel_tint(Channel::Green);
        assert_eq!(tint[0], 0.0);
        assert!((tint[1] - 128.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(tint[2], 0.0);
    }

    #[test]
    fn test_set_alpha_clamps() {
        let mut state = ColorState::new();
        state.set_alpha(1.5);
        assert_eq!(state.alpha(), 1.0);
        state.set_alpha(-0.25);
        assert_eq!(state.alpha(), 0.0);
        state.set_alpha(0.5);
        assert_eq!(state.alpha(), 0.5);
    }

    #[test]
    fn test_default_state() {
        let state = ColorState::new();
        for &channel in Channel::all() {
            assert_eq!(state.raw_value(channel), 255);
            assert!(!state.enabled(channel));
        }
        assert_eq!(state.alpha(), 1.0);
        assert_eq!(state.selected_preset(), None);
        assert_eq!(state.hex_string(), "#FFFFFF");
        assert_eq!(state.effective_color(), [0.0, 0.0, 0.0]);
    }
}
