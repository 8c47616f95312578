use crate::assets::color::parse_color;
use crate::effects::blur::{gaussian_blur_rgba8_premul, kernel_radius};
use crate::foundation::core::{RasterLayer, Rgba8, Vec2};
use crate::foundation::error::{SnapError, SnapResult};
use crate::foundation::math::{mul_div255_u8, unit_to_u8};
use crate::scene::style::ShadowConfig;

/// Largest accepted shadow blur (sigma) in pixels.
pub const MAX_SHADOW_BLUR: f64 = 50.0;

/// Drop shadow parameters after config parsing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowStyle {
    /// Gaussian sigma in pixels.
    pub blur: f64,
    /// Offset of the shadow from its source shape.
    pub offset: Vec2,
    /// Tint; only RGB is used.
    pub color: Rgba8,
    /// Peak shadow opacity.
    pub opacity: f32,
}

impl ShadowStyle {
    /// Resolve the shared shadow config for a template that applies `opacity`.
    pub fn from_config(cfg: &ShadowConfig, opacity: f32) -> SnapResult<Self> {
        check_blur(cfg.blur)?;
        if !cfg.offset_x.is_finite() || !cfg.offset_y.is_finite() {
            return Err(SnapError::config("shadow offset must be finite"));
        }
        Ok(Self {
            blur: cfg.blur,
            offset: Vec2::new(cfg.offset_x, cfg.offset_y),
            color: parse_color(&cfg.color)?,
            opacity,
        })
    }

    /// Same style with a different offset.
    pub fn with_offset(self, dx: f64, dy: f64) -> Self {
        Self {
            offset: Vec2::new(dx, dy),
            ..self
        }
    }
}

/// Blurred shadow raster plus its placement relative to the source layer's origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadowLayer {
    /// Premultiplied shadow pixels.
    pub layer: RasterLayer,
    /// Horizontal placement relative to the source layer.
    pub dx: i32,
    /// Vertical placement relative to the source layer.
    pub dy: i32,
}

/// Shadow of `source`'s alpha silhouette.
///
/// The result is padded by the blur radius on every side so the falloff is never clipped.
#[tracing::instrument(skip(source), fields(w = source.width, h = source.height))]
pub fn drop_shadow(source: &RasterLayer, style: &ShadowStyle) -> SnapResult<ShadowLayer> {
    if source.width == 0 || source.height == 0 {
        return Err(SnapError::config("shadow source layer is empty"));
    }
    check_blur(style.blur)?;
    let sigma = style.blur as f32;
    let margin = if sigma > 0.0 { kernel_radius(sigma) } else { 0 };
    let pad = margin
        .checked_mul(2)
        .ok_or_else(|| SnapError::config("shadow margin overflow"))?;
    let w = source
        .width
        .checked_add(pad)
        .ok_or_else(|| SnapError::config("shadow layer width overflow"))?;
    let h = source
        .height
        .checked_add(pad)
        .ok_or_else(|| SnapError::config("shadow layer height overflow"))?;

    let tint = Rgba8::rgb(style.color.r, style.color.g, style.color.b);
    let op = u16::from(unit_to_u8(style.opacity));
    let mut silhouette = RasterLayer::transparent(w, h)?;
    let src_w = source.width as usize;
    let dst_w = w as usize;
    for (y, row) in source.data.chunks_exact(src_w * 4).enumerate() {
        let dst_row = (y + margin as usize) * dst_w + margin as usize;
        for (x, px) in row.chunks_exact(4).enumerate() {
            let a = mul_div255_u8(u16::from(px[3]), op);
            if a == 0 {
                continue;
            }
            let idx = (dst_row + x) * 4;
            silhouette.data[idx..idx + 4].copy_from_slice(&tint.with_alpha(a).to_premul());
        }
    }

    let data = gaussian_blur_rgba8_premul(&silhouette.data, w, h, sigma)?;
    Ok(ShadowLayer {
        layer: RasterLayer::from_premul(w, h, data)?,
        dx: style.offset.x.round() as i32 - margin as i32,
        dy: style.offset.y.round() as i32 - margin as i32,
    })
}

fn check_blur(blur: f64) -> SnapResult<()> {
    if !(0.0..=MAX_SHADOW_BLUR).contains(&blur) {
        return Err(SnapError::config(format!(
            "shadow blur must be in [0, {MAX_SHADOW_BLUR}] (got {blur})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/shadow.rs"]
mod tests;
