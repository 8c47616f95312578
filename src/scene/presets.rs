use crate::foundation::error::{SnapError, SnapResult};
use crate::scene::style::{BackgroundSpec, GradientParams, GradientShape, SolidParams};

/// A named background ready to be dropped into a [`crate::StyleConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundPreset {
    /// Lookup key.
    pub slug: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Colors (two for gradients, one for solids).
    pub colors: &'static [&'static str],
    /// Gradient angle; `None` for solid presets.
    pub angle: Option<f64>,
}

impl BackgroundPreset {
    /// Materialize the preset as a [`BackgroundSpec`].
    pub fn spec(&self) -> BackgroundSpec {
        match self.angle {
            Some(angle) => BackgroundSpec::Gradient(GradientParams {
                colors: self.colors.iter().map(|c| (*c).to_owned()).collect(),
                angle,
                shape: GradientShape::Linear,
            }),
            None => BackgroundSpec::Solid(SolidParams {
                color: self.colors.first().copied().unwrap_or("#3498DB").to_owned(),
            }),
        }
    }
}

const fn gradient(
    slug: &'static str,
    name: &'static str,
    colors: &'static [&'static str],
    angle: f64,
) -> BackgroundPreset {
    BackgroundPreset {
        slug,
        name,
        colors,
        angle: Some(angle),
    }
}

const fn solid(slug: &'static str, name: &'static str, color: &'static [&'static str]) -> BackgroundPreset {
    BackgroundPreset {
        slug,
        name,
        colors: color,
        angle: None,
    }
}

/// Built-in gradient backgrounds.
pub const GRADIENT_PRESETS: [BackgroundPreset; 8] = [
    gradient("tropics", "Tropics", &["#43E97B", "#38F9D7"], 135.0),
    gradient("violet", "Violet", &["#7F00FF", "#E100FF"], 135.0),
    gradient("peach", "Peach", &["#FFE259", "#FFA751"], 135.0),
    gradient("telegram", "Telegram", &["#54A9EB", "#006FC8"], 135.0),
    gradient("sunset", "Sunset", &["#FF512F", "#DD2476"], 135.0),
    gradient("ocean", "Ocean", &["#2E3192", "#1BFFFF"], 135.0),
    gradient("fire", "Fire", &["#F12711", "#F5AF19"], 45.0),
    gradient("mint", "Mint", &["#00F260", "#0575E6"], 135.0),
];

/// Built-in solid backgrounds.
pub const SOLID_PRESETS: [BackgroundPreset; 6] = [
    solid("telegram_blue", "Telegram", &["#54A9EB"]),
    solid("peach_solid", "Peach", &["#FFB399"]),
    solid("lavender", "Lavender", &["#B19CD9"]),
    solid("mint_solid", "Mint", &["#77DD77"]),
    solid("coral", "Coral", &["#FF6B6B"]),
    solid("sky", "Sky", &["#AEC6CF"]),
];

/// Every preset, gradients first.
pub fn all_background_presets() -> impl Iterator<Item = &'static BackgroundPreset> {
    GRADIENT_PRESETS.iter().chain(SOLID_PRESETS.iter())
}

/// Look up a background preset by slug.
pub fn background_preset(slug: &str) -> SnapResult<&'static BackgroundPreset> {
    all_background_presets()
        .find(|p| p.slug == slug)
        .ok_or_else(|| SnapError::config(format!("unknown background preset \"{slug}\"")))
}

/// Standard social-media output size for the layered template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputSize {
    /// Lookup key.
    pub slug: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Square, portrait and landscape output sizes.
pub const OUTPUT_SIZES: [OutputSize; 3] = [
    OutputSize {
        slug: "square",
        name: "Square 1:1",
        width: 1080,
        height: 1080,
    },
    OutputSize {
        slug: "portrait",
        name: "Portrait 9:16",
        width: 1080,
        height: 1920,
    },
    OutputSize {
        slug: "landscape",
        name: "Landscape 16:9",
        width: 1920,
        height: 1080,
    },
];

/// Look up an output size by slug.
pub fn output_size(slug: &str) -> SnapResult<OutputSize> {
    OUTPUT_SIZES
        .iter()
        .copied()
        .find(|s| s.slug == slug)
        .ok_or_else(|| {
            SnapError::config(format!(
                "unknown output size \"{slug}\" (expected square, portrait or landscape)"
            ))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/presets.rs"]
mod tests;
