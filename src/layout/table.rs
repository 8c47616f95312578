//! Per-template geometry constants.
//!
//! Every number the planners and renderers use lives here, one table per template, so the
//! planners stay pure arithmetic over these tables.

use crate::foundation::core::Rgba8;
use crate::scene::style::DeviceColor;

/// Mac-window frame constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MacWindowTable {
    /// Title bar height.
    pub title_bar_height: f64,
    /// Window inset around the screenshot.
    pub window_padding: f64,
    /// Outer window corner radius.
    pub window_radius: f64,
    /// Traffic-light radius.
    pub button_radius: f64,
    /// Gap between adjacent traffic lights.
    pub button_spacing: f64,
    /// Distance from the window's left edge to the first light's center.
    pub button_inset: f64,
    /// Screenshot corner radius.
    pub screen_radius: f64,
    /// Extra vertical shadow offset on top of the shared shadow config.
    pub shadow_offset_boost: f64,
    /// Shadow opacity.
    pub shadow_opacity: f32,
    /// Window body fill.
    pub body: Rgba8,
    /// Title bar gradient, top to bottom.
    pub title_bar: [Rgba8; 2],
    /// Opacity of the white highlight line along the title bar top.
    pub highlight_opacity: f32,
    /// Close, minimize, zoom.
    pub buttons: [Rgba8; 3],
    /// Inner radial glint per button, center to edge.
    pub button_glints: [[Rgba8; 2]; 3],
}

/// Phone-mockup constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhoneTable {
    /// Screen width; independent of the input size.
    pub screen_width: f64,
    /// Screen height divided by screen width.
    pub screen_aspect: f64,
    /// Frame thickness around the screen.
    pub bezel: f64,
    /// Outer frame corner radius.
    pub device_radius: f64,
    /// Screen corner radius.
    pub screen_radius: f64,
    /// Island pill width.
    pub island_width: f64,
    /// Island pill height.
    pub island_height: f64,
    /// Gap between the screen top and the pill.
    pub island_top: f64,
    /// Camera dot radius.
    pub camera_radius: f64,
    /// Shadow opacity.
    pub shadow_opacity: f32,
    /// Screen fill under the screenshot.
    pub screen_fill: Rgba8,
    /// Island pill fill.
    pub island_fill: Rgba8,
    /// Camera lens fill.
    pub camera_fill: Rgba8,
}

impl PhoneTable {
    /// Screen height, `round(screen_width * screen_aspect)`.
    pub fn screen_height(&self) -> f64 {
        (self.screen_width * self.screen_aspect).round()
    }

    /// Frame width including both bezels.
    pub fn frame_width(&self) -> f64 {
        self.screen_width + 2.0 * self.bezel
    }

    /// Frame height including both bezels.
    pub fn frame_height(&self) -> f64 {
        self.screen_height() + 2.0 * self.bezel
    }
}

/// Frame finish: `(base, highlight)`.
pub fn device_palette(color: DeviceColor) -> (Rgba8, Rgba8) {
    match color {
        DeviceColor::Titanium => (Rgba8::rgb(0x5F, 0x60, 0x63), Rgba8::rgb(0x7F, 0x80, 0x83)),
        DeviceColor::Black => (Rgba8::rgb(0x1D, 0x1D, 0x1F), Rgba8::rgb(0x2D, 0x2D, 0x2F)),
        DeviceColor::Natural => (Rgba8::rgb(0xB8, 0xB5, 0xAE), Rgba8::rgb(0xC8, 0xC5, 0xBE)),
    }
}

/// One back card of the layered stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackLayer {
    /// Distance from the main layer; the upward shift is `offset_step * index`.
    pub index: u32,
    /// Width relative to the main rect.
    pub width_factor: f64,
    /// Height relative to the main rect.
    pub height_factor: f64,
    /// Card opacity.
    pub opacity: f32,
}

/// Layered-stack constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayeredTable {
    /// Default output width.
    pub default_width: u32,
    /// Default output height.
    pub default_height: u32,
    /// Largest accepted output width or height.
    pub max_output_side: u32,
    /// Fraction of the canvas the main layer may occupy, per axis.
    pub main_fraction: f64,
    /// Default upward shift per back layer.
    pub default_offset_step: u32,
    /// Back cards, farthest first.
    pub back_layers: [BackLayer; 3],
    /// Back card corner radius.
    pub back_radius: f64,
    /// Back card shadow blur.
    pub back_shadow_blur: f64,
    /// Back card shadow vertical offset.
    pub back_shadow_dy: f64,
    /// Back card shadow opacity.
    pub back_shadow_opacity: f32,
}

/// Mac-window table.
pub const MAC_WINDOW: MacWindowTable = MacWindowTable {
    title_bar_height: 52.0,
    window_padding: 24.0,
    window_radius: 20.0,
    button_radius: 7.0,
    button_spacing: 9.0,
    button_inset: 20.0,
    screen_radius: 8.0,
    shadow_offset_boost: 5.0,
    shadow_opacity: 0.25,
    body: Rgba8::rgb(0xF6, 0xF6, 0xF6),
    title_bar: [Rgba8::rgb(0xEB, 0xEB, 0xEB), Rgba8::rgb(0xD5, 0xD5, 0xD5)],
    highlight_opacity: 0.6,
    buttons: [
        Rgba8::rgb(0xFF, 0x5F, 0x57),
        Rgba8::rgb(0xFF, 0xBD, 0x2E),
        Rgba8::rgb(0x28, 0xC9, 0x40),
    ],
    button_glints: [
        [Rgba8::rgb(0xFF, 0x6B, 0x68), Rgba8::rgb(0xFF, 0x5F, 0x56)],
        [Rgba8::rgb(0xFF, 0xC9, 0x41), Rgba8::rgb(0xFF, 0xBD, 0x2E)],
        [Rgba8::rgb(0x2D, 0xD1, 0x4C), Rgba8::rgb(0x27, 0xC9, 0x3F)],
    ],
};

/// Phone-mockup table.
pub const PHONE: PhoneTable = PhoneTable {
    screen_width: 650.0,
    screen_aspect: 2.16,
    bezel: 16.0,
    device_radius: 60.0,
    screen_radius: 52.0,
    island_width: 120.0,
    island_height: 37.0,
    island_top: 12.0,
    camera_radius: 5.0,
    shadow_opacity: 0.2,
    screen_fill: Rgba8::BLACK,
    island_fill: Rgba8::rgb(0x0A, 0x0A, 0x0A),
    camera_fill: Rgba8::rgb(0x1A, 0x1A, 0x1A),
};

/// Layered-stack table.
pub const LAYERED: LayeredTable = LayeredTable {
    default_width: 1080,
    default_height: 1080,
    max_output_side: 4096,
    main_fraction: 0.8,
    default_offset_step: 25,
    back_layers: [
        BackLayer {
            index: 3,
            width_factor: 0.94,
            height_factor: 0.91,
            opacity: 0.1,
        },
        BackLayer {
            index: 2,
            width_factor: 0.96,
            height_factor: 0.94,
            opacity: 0.2,
        },
        BackLayer {
            index: 1,
            width_factor: 0.98,
            height_factor: 0.97,
            opacity: 0.3,
        },
    ],
    back_radius: 20.0,
    back_shadow_blur: 15.0,
    back_shadow_dy: 10.0,
    back_shadow_opacity: 0.3,
};
