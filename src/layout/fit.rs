use image::imageops::{self, FilterType};

use crate::foundation::core::RasterLayer;
use crate::foundation::error::{SnapError, SnapResult};

/// Scale `image` uniformly until it covers `width x height`, then crop the center.
///
/// An opaque source yields an opaque result.
pub fn cover(image: &RasterLayer, width: u32, height: u32) -> SnapResult<RasterLayer> {
    check_target("cover", image, width, height)?;
    let (sw, sh) = (f64::from(image.width), f64::from(image.height));
    let scale = (f64::from(width) / sw).max(f64::from(height) / sh);
    let scaled_w = ((sw * scale).round() as u32).max(width);
    let scaled_h = ((sh * scale).round() as u32).max(height);

    let scaled = resize(image, scaled_w, scaled_h)?;
    let left = (scaled_w - width) / 2;
    let top = (scaled_h - height) / 2;
    crop(&scaled, left, top, width, height)
}

/// Scale `image` uniformly to fit inside `width x height`, centered on transparent padding.
pub fn contain(image: &RasterLayer, width: u32, height: u32) -> SnapResult<RasterLayer> {
    check_target("contain", image, width, height)?;
    let (fw, fh) = contain_size(image.width, image.height, width, height);
    let fitted = resize(image, fw, fh)?;

    let mut out = RasterLayer::transparent(width, height)?;
    let left = ((width - fw) / 2) as usize;
    let top = ((height - fh) / 2) as usize;
    let row_bytes = fw as usize * 4;
    for (y, src_row) in fitted.data.chunks_exact(row_bytes).enumerate() {
        let start = ((top + y) * width as usize + left) * 4;
        out.data[start..start + row_bytes].copy_from_slice(src_row);
    }
    Ok(out)
}

/// Size of `src` scaled uniformly to fit inside `box_w x box_h`; never zero.
pub fn contain_size(src_w: u32, src_h: u32, box_w: u32, box_h: u32) -> (u32, u32) {
    if src_w == 0 || src_h == 0 {
        return (box_w.max(1), box_h.max(1));
    }
    let scale =
        (f64::from(box_w) / f64::from(src_w)).min(f64::from(box_h) / f64::from(src_h));
    let w = (f64::from(src_w) * scale).round() as u32;
    let h = (f64::from(src_h) * scale).round() as u32;
    (w.clamp(1, box_w.max(1)), h.clamp(1, box_h.max(1)))
}

fn check_target(op: &str, image: &RasterLayer, width: u32, height: u32) -> SnapResult<()> {
    if width == 0 || height == 0 {
        return Err(SnapError::config(format!(
            "{op} target must be non-empty (got {width}x{height})"
        )));
    }
    if image.width == 0 || image.height == 0 {
        return Err(SnapError::config(format!("{op} source image is empty")));
    }
    Ok(())
}

/// Lanczos3 resample of premultiplied pixels.
fn resize(image: &RasterLayer, width: u32, height: u32) -> SnapResult<RasterLayer> {
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }
    let src = image::RgbaImage::from_raw(image.width, image.height, image.data.clone())
        .ok_or_else(|| SnapError::config("raster buffer does not match its dimensions"))?;
    let mut data = imageops::resize(&src, width, height, FilterType::Lanczos3).into_raw();
    // Lanczos ringing can push color above alpha.
    for px in data.chunks_exact_mut(4) {
        let a = px[3];
        px[0] = px[0].min(a);
        px[1] = px[1].min(a);
        px[2] = px[2].min(a);
    }
    RasterLayer::from_premul(width, height, data)
}

fn crop(image: &RasterLayer, left: u32, top: u32, width: u32, height: u32) -> SnapResult<RasterLayer> {
    let src_stride = image.width as usize * 4;
    let row_bytes = width as usize * 4;
    let mut data = Vec::with_capacity(row_bytes * height as usize);
    for y in top..top + height {
        let start = y as usize * src_stride + left as usize * 4;
        data.extend_from_slice(&image.data[start..start + row_bytes]);
    }
    RasterLayer::from_premul(width, height, data)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
