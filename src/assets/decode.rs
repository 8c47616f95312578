use std::io::Cursor;

use anyhow::Context;

use crate::foundation::core::RasterLayer;
use crate::foundation::error::{SnapError, SnapResult};

/// Decode encoded image bytes (PNG/JPEG/WebP) into a premultiplied [`RasterLayer`].
pub fn decode_image(bytes: &[u8]) -> SnapResult<RasterLayer> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| SnapError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(SnapError::decode("image has zero width or height"));
    }
    RasterLayer::from_straight(width, height, rgba.into_raw())
}

/// Encode a layer as PNG bytes (straight-alpha RGBA8).
pub fn encode_png(layer: &RasterLayer) -> SnapResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(layer.width, layer.height, layer.to_straight())
        .context("wrap raster for png encoding")?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
