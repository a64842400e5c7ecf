//! Preset color table

/// Named presets in picker display order, components in [0, 1].
/// Process-wide constant; the picker shows exactly these names.
pub const PRESETS: &[(&str, [f32; 3])] = &[
    ("Black", [0.0, 0.0, 0.0]),
    ("Red", [1.0, 0.0, 0.0]),
    ("Orange", [1.0, 0.647, 0.0]),
    ("Yellow", [1.0, 1.0, 0.0]),
    ("Green", [0.0, 1.0, 0.0]),
    ("Cyan", [0.0, 1.0, 1.0]),
    ("Blue", [0.0, 0.0, 1.0]),
    ("Magenta", [1.0, 0.0, 1.0]),
    ("Purple", [0.5, 0.0, 0.5]),
    ("Brown", [0.7, 0.4, 0.3]),
    ("Pink", [1.0, 0.5, 0.75]),
    ("BluePurple", [0.25, 0.25, 1.0]),
    ("White", [1.0, 1.0, 1.0]),
];

/// Look up a preset's RGB components by name
pub fn components(name: &str) -> Option<[f32; 3]> {
    PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, rgb)| *rgb)
}

/// Preset names in display order
pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}
