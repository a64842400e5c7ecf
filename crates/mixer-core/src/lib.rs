//! Color mixer core
//!
//! Pure color-mixing model: per-channel state, the preset table, hex
//! conversion, and the views derived from them. No UI dependencies.

pub mod channel;
pub mod preset;
pub mod state;

// Re-exports for convenience
pub use channel::{Channel, ChannelState};
pub use state::{ColorError, ColorState, TextColor};
