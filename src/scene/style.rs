use std::fmt;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{SnapError, SnapResult};

/// Caller-supplied description of one render: background, template and shared visual parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Background drawn under everything else.
    pub background: BackgroundSpec,
    /// Template the screenshot is embedded in.
    pub template: TemplateSpec,
    /// Shared parameters (padding, corner radius, shadow).
    #[serde(default)]
    pub common: CommonConfig,
}

impl StyleConfig {
    /// Build a config with default [`CommonConfig`].
    pub fn new(background: BackgroundSpec, template: TemplateSpec) -> Self {
        Self {
            background,
            template,
            common: CommonConfig::default(),
        }
    }

    /// Return the config with `common.padding` replaced.
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.common.padding = padding;
        self
    }

    /// Parse a JSON style config.
    pub fn from_json_str(s: &str) -> SnapResult<Self> {
        serde_json::from_str(s).map_err(|e| SnapError::config(format!("invalid style json: {e}")))
    }

    /// Load a JSON style config from disk.
    pub fn from_path(path: &Path) -> SnapResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read style config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

/// Background specification, tagged by `kind`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BackgroundSpec {
    /// Linear or radial gradient over two or more colors.
    Gradient(GradientParams),
    /// Single opaque color.
    Solid(SolidParams),
    /// Blurred, color-adjusted derivative of the source screenshot.
    Blur(BlurParams),
}

/// Gradient background parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientParams {
    /// Hex colors, at least two, placed at evenly spaced stops.
    pub colors: Vec<String>,
    /// Direction in degrees, `[0, 360)`.
    #[serde(default = "default_angle")]
    pub angle: f64,
    /// Linear or radial.
    #[serde(default)]
    pub shape: GradientShape,
}

/// Gradient geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientShape {
    /// Along an axis through the canvas center.
    #[default]
    Linear,
    /// Outward from the canvas center.
    Radial,
}

/// Solid background parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidParams {
    /// `#RGB` or `#RRGGBB`.
    pub color: String,
}

/// Blur background parameters. The source image is the screenshot being decorated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlurParams {
    /// Gaussian sigma in pixels, `[1, 1000]`.
    #[serde(default = "default_blur_amount")]
    pub blur_amount: f64,
    /// Brightness offset, `[-1, 1]`; RGB is multiplied by `1 + brightness`.
    #[serde(default = "default_brightness")]
    pub brightness: f64,
    /// Saturation factor, `[0, 2]`.
    #[serde(default = "default_saturation")]
    pub saturation: f64,
}

impl Default for BlurParams {
    fn default() -> Self {
        Self {
            blur_amount: default_blur_amount(),
            brightness: default_brightness(),
            saturation: default_saturation(),
        }
    }
}

/// Template kinds (closed set).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    /// macOS-style window frame.
    MacWindow,
    /// Phone mockup with Island cutout.
    Iphone,
    /// Stack of translucent cards behind the screenshot.
    Layered,
}

impl TemplateKind {
    /// Stable slug (`mac-window`, `iphone`, `layered`).
    pub fn slug(self) -> &'static str {
        match self {
            Self::MacWindow => "mac-window",
            Self::Iphone => "iphone",
            Self::Layered => "layered",
        }
    }

    /// Parse a slug.
    pub fn from_slug(slug: &str) -> SnapResult<Self> {
        match slug {
            "mac-window" => Ok(Self::MacWindow),
            "iphone" => Ok(Self::Iphone),
            "layered" => Ok(Self::Layered),
            other => Err(SnapError::config(format!(
                "unknown template kind \"{other}\" (expected mac-window, iphone or layered)"
            ))),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Template specification, tagged by `kind`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TemplateSpec {
    /// macOS-style window.
    MacWindow(MacWindowParams),
    /// Phone mockup.
    Iphone(PhoneParams),
    /// Layered stack.
    Layered(LayeredParams),
}

impl TemplateSpec {
    /// Tag of this spec.
    pub fn kind(&self) -> TemplateKind {
        match self {
            Self::MacWindow(_) => TemplateKind::MacWindow,
            Self::Iphone(_) => TemplateKind::Iphone,
            Self::Layered(_) => TemplateKind::Layered,
        }
    }

    /// Spec with default params for `kind`.
    pub fn default_for(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::MacWindow => Self::MacWindow(MacWindowParams::default()),
            TemplateKind::Iphone => Self::Iphone(PhoneParams::default()),
            TemplateKind::Layered => Self::Layered(LayeredParams::default()),
        }
    }
}

/// Mac-window template parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacWindowParams {
    /// Traffic-light buttons are drawn unless this is `Some(false)`.
    #[serde(default)]
    pub window_buttons: Option<bool>,
}

/// Phone-mockup template parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneParams {
    /// Frame finish.
    #[serde(default)]
    pub device_color: DeviceColor,
}

/// Phone frame finish.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceColor {
    /// Grey titanium.
    #[default]
    Titanium,
    /// Near-black.
    Black,
    /// Warm natural titanium.
    Natural,
}

/// Layered-stack template parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayeredParams {
    /// Output width in pixels (default 1080).
    #[serde(default)]
    pub output_width: Option<u32>,
    /// Output height in pixels (default 1080).
    #[serde(default)]
    pub output_height: Option<u32>,
    /// Upward shift per back layer in pixels (default 25).
    #[serde(default)]
    pub offset_step: Option<u32>,
}

/// Parameters shared by every template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonConfig {
    /// Canvas margin around the frame in pixels.
    #[serde(default = "default_padding")]
    pub padding: u32,
    /// Corner radius of the layered template's main layer.
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
    /// Drop shadow under frames.
    #[serde(default)]
    pub shadow: ShadowConfig,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            corner_radius: default_corner_radius(),
            shadow: ShadowConfig::default(),
        }
    }
}

/// Drop shadow parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowConfig {
    /// Gaussian sigma in pixels.
    #[serde(default = "default_shadow_blur")]
    pub blur: f64,
    /// Horizontal offset in pixels.
    #[serde(default)]
    pub offset_x: f64,
    /// Vertical offset in pixels.
    #[serde(default = "default_shadow_offset_y")]
    pub offset_y: f64,
    /// Shadow tint (`#RRGGBB`, `rgba(...)`). Only RGB is used; each template applies its own opacity.
    #[serde(default = "default_shadow_color")]
    pub color: String,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            blur: default_shadow_blur(),
            offset_x: 0.0,
            offset_y: default_shadow_offset_y(),
            color: default_shadow_color(),
        }
    }
}

fn default_angle() -> f64 {
    135.0
}

fn default_blur_amount() -> f64 {
    70.0
}

fn default_brightness() -> f64 {
    -0.2
}

fn default_saturation() -> f64 {
    1.2
}

fn default_padding() -> u32 {
    60
}

fn default_corner_radius() -> f64 {
    12.0
}

fn default_shadow_blur() -> f64 {
    30.0
}

fn default_shadow_offset_y() -> f64 {
    10.0
}

fn default_shadow_color() -> String {
    "rgba(0, 0, 0, 0.3)".to_owned()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/style.rs"]
mod tests;
