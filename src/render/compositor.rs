use crate::effects::composite::{dest_in, over};
use crate::foundation::core::RasterLayer;
use crate::foundation::error::SnapResult;

/// How a [`LayerEntry`] combines with what is below it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Premultiplied source-over.
    #[default]
    Over,
    /// Destination-in: keep the destination only where the layer is opaque.
    ///
    /// Pixels outside the layer's placement are cleared.
    Mask,
}

/// One positioned layer in a composition.
#[derive(Clone, Copy, Debug)]
pub struct LayerEntry<'a> {
    /// Pixels to apply.
    pub layer: &'a RasterLayer,
    /// Left edge in destination pixels; may be negative.
    pub left: i32,
    /// Top edge in destination pixels; may be negative.
    pub top: i32,
    /// Blend mode.
    pub blend: BlendMode,
    /// Extra opacity multiplier.
    pub opacity: f32,
}

impl<'a> LayerEntry<'a> {
    /// Opaque source-over entry at `(left, top)`.
    pub fn over(layer: &'a RasterLayer, left: i32, top: i32) -> Self {
        Self {
            layer,
            left,
            top,
            blend: BlendMode::Over,
            opacity: 1.0,
        }
    }

    /// Mask entry at `(left, top)`.
    pub fn mask(layer: &'a RasterLayer, left: i32, top: i32) -> Self {
        Self {
            blend: BlendMode::Mask,
            ..Self::over(layer, left, top)
        }
    }

    /// Same entry with `opacity`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }
}

/// Apply `entries` to `base` in order. Out-of-bounds parts are clipped.
pub fn compose(mut base: RasterLayer, entries: &[LayerEntry<'_>]) -> SnapResult<RasterLayer> {
    if base.width == 0 || base.height == 0 {
        return Ok(base);
    }
    for entry in entries {
        match entry.blend {
            BlendMode::Over => apply_over(&mut base, entry),
            BlendMode::Mask => apply_mask(&mut base, entry),
        }
    }
    tracing::debug!(layers = entries.len(), "composed");
    Ok(base)
}

/// Destination span covered by a layer placed at `offset` with extent `len`.
fn span(offset: i32, len: u32, dst_len: u32) -> Option<(u32, u32)> {
    let start = i64::from(offset).max(0);
    let end = (i64::from(offset) + i64::from(len)).min(i64::from(dst_len));
    (start < end).then_some((start as u32, end as u32))
}

fn apply_over(dst: &mut RasterLayer, entry: &LayerEntry<'_>) {
    let src = entry.layer;
    let (Some((x0, x1)), Some((y0, y1))) = (
        span(entry.left, src.width, dst.width),
        span(entry.top, src.height, dst.height),
    ) else {
        return;
    };

    let dst_w = dst.width as usize;
    let src_w = src.width as usize;
    for y in y0..y1 {
        let sy = (i64::from(y) - i64::from(entry.top)) as usize;
        for x in x0..x1 {
            let sx = (i64::from(x) - i64::from(entry.left)) as usize;
            let si = (sy * src_w + sx) * 4;
            let di = (y as usize * dst_w + x as usize) * 4;
            let s = [src.data[si], src.data[si + 1], src.data[si + 2], src.data[si + 3]];
            if s[3] == 0 {
                continue;
            }
            let d = [dst.data[di], dst.data[di + 1], dst.data[di + 2], dst.data[di + 3]];
            dst.data[di..di + 4].copy_from_slice(&over(d, s, entry.opacity));
        }
    }
}

fn apply_mask(dst: &mut RasterLayer, entry: &LayerEntry<'_>) {
    let src = entry.layer;
    let xs = span(entry.left, src.width, dst.width);
    let ys = span(entry.top, src.height, dst.height);
    let dst_w = dst.width as usize;
    let src_w = src.width as usize;

    for (y, row) in dst.data.chunks_exact_mut(dst_w * 4).enumerate() {
        let y = y as u32;
        let row_span = match (xs, ys) {
            (Some(xs), Some((y0, y1))) if y >= y0 && y < y1 => Some(xs),
            _ => None,
        };
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let x = x as u32;
            let mask_alpha = match row_span {
                Some((x0, x1)) if x >= x0 && x < x1 => {
                    let sx = (i64::from(x) - i64::from(entry.left)) as usize;
                    let sy = (i64::from(y) - i64::from(entry.top)) as usize;
                    src.data[(sy * src_w + sx) * 4 + 3]
                }
                _ => 0,
            };
            let out = dest_in([px[0], px[1], px[2], px[3]], mask_alpha, entry.opacity);
            px.copy_from_slice(&out);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
