//! Channel definitions

/// One of the three color channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in display order
    pub fn all() -> &'static [Channel] {
        &[Channel::Red, Channel::Green, Channel::Blue]
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }

    /// Index into `[r, g, b]` component arrays
    pub fn index(&self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// State of a single channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelState {
    /// Slider position
    pub raw: u8,
    /// Whether the channel contributes to the composed color
    pub enabled: bool,
}

impl ChannelState {
    /// Value shown in the channel's text field, inverted relative to the
    /// slider. Derived, so the inversion cannot drift out of sync.
    pub fn display_value(&self) -> u8 {
        255 - self.raw
    }

    /// Enable-gated contribution in [0, 1]. A disabled channel contributes
    /// nothing regardless of its slider position.
    pub fn effective(&self) -> f32 {
        if self.enabled {
            self.raw as f32 / 255.0
        } else {
            0.0
        }
    }
}

impl Default for ChannelState {
    fn default() -> Self {
        // Sliders start at full scale with the channel switched off
        Self {
            raw: 255,
            enabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_inverts_raw() {
        for raw in [0u8, 1, 127, 254, 255] {
            let state = ChannelState { raw, enabled: true };
            assert_eq!(state.display_value(), 255 - raw);
        }
    }

    #[test]
    fn test_effective_gated_by_enabled() {
        let on = ChannelState {
            raw: 255,
            enabled: true,
        };
        assert_eq!(on.effective(), 1.0);

        let off = ChannelState {
            raw: 255,
            enabled: false,
        };
        assert_eq!(off.effective(), 0.0);
    }

    #[test]
    fn test_default_channel() {
        let state = ChannelState::default();
        assert_eq!(state.raw, 255);
        assert!(!state.enabled);
        assert_eq!(state.effective(), 0.0);
    }
}
