//! Procedural canvas backgrounds.
//!
//! Every generator returns an opaque layer of exactly the requested size. Gradients share their
//! sampling code with overlay paints so a background and a frame gradient render identically.

use rayon::prelude::*;

use crate::assets::color::parse_hex_color;
use crate::effects::blur::gaussian_blur_rgba8_premul;
use crate::effects::color::{color_matrix_rgba8_premul_in_place, modulate_matrix};
use crate::effects::composite::over;
use crate::foundation::core::{Point, RasterLayer, Rect, Rgba8, Vec2};
use crate::foundation::error::{SnapError, SnapResult};
use crate::layout::fit::cover;
use crate::overlay::paint::Paint;
use crate::scene::presets::background_preset;
use crate::scene::style::{BackgroundSpec, BlurParams, GradientParams, GradientShape};

impl BackgroundSpec {
    /// Background of the named preset (see [`crate::all_background_presets`]).
    pub fn from_preset(slug: &str) -> SnapResult<Self> {
        Ok(background_preset(slug)?.spec())
    }
}

/// Render `spec` into an opaque `width x height` layer.
///
/// `source` is the image a blur background is derived from; other kinds ignore it.
#[tracing::instrument(skip(spec, source), fields(kind = spec_kind(spec)))]
pub fn generate_background(
    spec: &BackgroundSpec,
    width: u32,
    height: u32,
    source: Option<&RasterLayer>,
) -> SnapResult<RasterLayer> {
    if width == 0 || height == 0 {
        return Err(SnapError::config(format!(
            "background dimensions must be > 0 (got {width}x{height})"
        )));
    }
    match spec {
        BackgroundSpec::Gradient(params) => gradient(params, width, height),
        BackgroundSpec::Solid(params) => {
            let color = parse_hex_color(&params.color)?;
            RasterLayer::filled(width, height, color.with_alpha(255))
        }
        BackgroundSpec::Blur(params) => {
            let source = source
                .ok_or_else(|| SnapError::config("blur background requires a source image"))?;
            blurred(params, source, width, height)
        }
    }
}

fn spec_kind(spec: &BackgroundSpec) -> &'static str {
    match spec {
        BackgroundSpec::Gradient(_) => "gradient",
        BackgroundSpec::Solid(_) => "solid",
        BackgroundSpec::Blur(_) => "blur",
    }
}

fn gradient(params: &GradientParams, width: u32, height: u32) -> SnapResult<RasterLayer> {
    if params.colors.len() < 2 {
        return Err(SnapError::config(format!(
            "gradient needs at least 2 colors (got {})",
            params.colors.len()
        )));
    }
    if !params.angle.is_finite() {
        return Err(SnapError::config("gradient angle must be finite"));
    }
    let colors = params
        .colors
        .iter()
        .map(|c| parse_hex_color(c).map(|c| c.with_alpha(255)))
        .collect::<SnapResult<Vec<_>>>()?;

    let paint = match params.shape {
        GradientShape::Linear => Paint::angled(params.angle.rem_euclid(360.0), &colors),
        GradientShape::Radial => {
            Paint::radial(Point::new(0.5, 0.5), Vec2::new(0.5, 0.5), &colors)
        }
    };
    let bounds = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));

    let mut layer = RasterLayer::transparent(width, height)?;
    layer
        .data
        .par_chunks_exact_mut(width as usize * 4)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let c = paint.sample_px(bounds, x as u32, y as u32);
                px.copy_from_slice(&c.to_premul());
            }
        });
    Ok(layer)
}

fn blurred(
    params: &BlurParams,
    source: &RasterLayer,
    width: u32,
    height: u32,
) -> SnapResult<RasterLayer> {
    if !(1.0..=1000.0).contains(&params.blur_amount) {
        return Err(SnapError::config(format!(
            "blurAmount must be in [1, 1000] (got {})",
            params.blur_amount
        )));
    }
    if !(-1.0..=1.0).contains(&params.brightness) {
        return Err(SnapError::config(format!(
            "brightness must be in [-1, 1] (got {})",
            params.brightness
        )));
    }
    if !(0.0..=2.0).contains(&params.saturation) {
        return Err(SnapError::config(format!(
            "saturation must be in [0, 2] (got {})",
            params.saturation
        )));
    }

    let fitted = cover(source, width, height)?;
    let mut data = gaussian_blur_rgba8_premul(&fitted.data, width, height, params.blur_amount as f32)?;
    let m = modulate_matrix(1.0 + params.brightness as f32, params.saturation as f32);
    color_matrix_rgba8_premul_in_place(&mut data, &m);

    // Translucent sources are flattened onto black.
    let black = Rgba8::BLACK.to_premul();
    for px in data.chunks_exact_mut(4) {
        if px[3] != 255 {
            let out = over(black, [px[0], px[1], px[2], px[3]], 1.0);
            px.copy_from_slice(&out);
        }
    }
    RasterLayer::from_premul(width, height, data)
}

#[cfg(test)]
#[path = "../../tests/unit/background/mod.rs"]
mod tests;
