//! snapframe turns raw screenshots into decorated marketing images.
//!
//! A caller hands over encoded screenshot bytes plus a [`StyleConfig`] and gets back one opaque
//! PNG: the screenshot embedded in a device mockup (macOS window or phone) or a layered stack,
//! drawn over a generated background (gradient, solid color, or a blurred copy of the source).
//!
//! # Pipeline overview
//!
//! 1. **Decode**: bytes -> premultiplied [`RasterLayer`]
//! 2. **Plan**: template + padding + input size -> [`GeometryPlan`]
//! 3. **Paint**: background, frame overlays, shadows, fitted and masked screenshot
//! 4. **Compose**: ordered [`LayerEntry`] list -> final canvas
//! 5. **Encode**: PNG bytes in a [`RenderResult`]
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs produce byte-identical PNGs, independent of thread count.
//! - **Stateless**: no caches or sessions; every render owns its intermediate layers.
//! - **Premultiplied RGBA8** end-to-end until encoding.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod background;
mod effects;
mod foundation;
mod layout;
mod overlay;
mod render;
mod scene;

pub use assets::color::{parse_color, parse_hex_color};
pub use assets::decode::{decode_image, encode_png};
pub use assets::validate::{ImageInfo, InputLimits, readable_size, validate_input, validate_input_with};
pub use background::generate_background;
pub use effects::composite::{PremulRgba8, dest_in, dest_out, over};
pub use foundation::core::{Canvas, Point, RasterLayer, Rect, Rgba8, Vec2};
pub use foundation::error::{SnapError, SnapResult};
pub use layout::fit::{contain, contain_size, cover};
pub use layout::geometry::{
    BackCard, GeometryPlan, LayeredPlan, MacWindowPlan, PhonePlan, plan_geometry,
};
pub use layout::table::{
    BackLayer, LAYERED, LayeredTable, MAC_WINDOW, MacWindowTable, PHONE, PhoneTable,
    device_palette,
};
pub use overlay::builder::{OverlayBuilder, cutout_mask};
pub use overlay::paint::{ColorStop, Paint};
pub use overlay::shadow::{MAX_SHADOW_BLUR, ShadowLayer, ShadowStyle, drop_shadow};
pub use overlay::shape::{CornerRadii, Shape};
pub use render::compositor::{BlendMode, LayerEntry, compose};
pub use render::pipeline::{RenderResult, process_screenshot, render_raster};
pub use render::templates::{
    LayeredStackRenderer, MacWindowRenderer, PhoneMockupRenderer, TemplateRenderer, renderer_for,
};
pub use scene::presets::{
    BackgroundPreset, GRADIENT_PRESETS, OUTPUT_SIZES, OutputSize, SOLID_PRESETS,
    all_background_presets, background_preset, output_size,
};
pub use scene::style::{
    BackgroundSpec, BlurParams, CommonConfig, DeviceColor, GradientParams, GradientShape,
    LayeredParams, MacWindowParams, PhoneParams, ShadowConfig, SolidParams, StyleConfig,
    TemplateKind, TemplateSpec,
};
