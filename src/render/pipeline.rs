use std::time::Instant;

use crate::assets::decode::{decode_image, encode_png};
use crate::foundation::core::RasterLayer;
use crate::foundation::error::{SnapError, SnapResult};
use crate::render::templates::renderer_for;
use crate::scene::style::StyleConfig;

/// Encoded output of one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderResult {
    /// PNG bytes.
    pub buffer: Vec<u8>,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Wall time spent in [`process_screenshot`].
    pub processing_time_ms: u64,
}

/// Decode `bytes`, render them with `style` and encode the result as PNG.
///
/// Pipeline:
/// 1. [`crate::decode_image`]
/// 2. [`render_raster`]
/// 3. [`crate::encode_png`]
///
/// Stateless; concurrent calls share nothing.
#[tracing::instrument(skip_all, fields(bytes = bytes.len(), template = %style.template.kind()))]
pub fn process_screenshot(bytes: &[u8], style: &StyleConfig) -> SnapResult<RenderResult> {
    let started = Instant::now();
    let outcome = decode_image(bytes)
        .and_then(|screenshot| render_raster(&screenshot, style))
        .and_then(|layer| {
            let buffer = encode_png(&layer)?;
            Ok((layer.width, layer.height, buffer))
        });

    match outcome {
        Ok((width, height, buffer)) => {
            let processing_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            tracing::info!(width, height, processing_time_ms, "screenshot processed");
            Ok(RenderResult {
                buffer,
                width,
                height,
                processing_time_ms,
            })
        }
        Err(err) => {
            tracing::error!(error = %err, user_error = err.is_user_error(), "screenshot processing failed");
            Err(err)
        }
    }
}

/// Render an already decoded, premultiplied screenshot to a premultiplied canvas.
pub fn render_raster(screenshot: &RasterLayer, style: &StyleConfig) -> SnapResult<RasterLayer> {
    let renderer = renderer_for(&style.template);
    let kind = renderer.kind();
    let out = renderer
        .render(screenshot, &style.background, &style.common)
        .map_err(|e| SnapError::render(kind, e))?;
    tracing::debug!(
        template = %kind,
        width = out.width,
        height = out.height,
        "template rendered"
    );
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
