use std::io::Cursor;

use crate::foundation::error::{SnapError, SnapResult};

/// Input limits enforced before an image reaches the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputLimits {
    /// Maximum encoded size in bytes.
    pub max_bytes: usize,
    /// Maximum width in pixels.
    pub max_width: u32,
    /// Maximum height in pixels.
    pub max_height: u32,
    /// Minimum width in pixels.
    pub min_width: u32,
    /// Minimum height in pixels.
    pub min_height: u32,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_width: 3840,
            max_height: 2160,
            min_width: 100,
            min_height: 100,
        }
    }
}

/// Metadata of an accepted input image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    /// Detected container format.
    pub format: image::ImageFormat,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Encoded size in bytes.
    pub byte_len: usize,
}

const ALLOWED_FORMATS: [image::ImageFormat; 3] = [
    image::ImageFormat::Png,
    image::ImageFormat::Jpeg,
    image::ImageFormat::WebP,
];

/// Validate encoded input bytes against the default [`InputLimits`].
pub fn validate_input(bytes: &[u8]) -> SnapResult<ImageInfo> {
    validate_input_with(bytes, InputLimits::default())
}

/// Validate encoded input bytes against `limits`.
///
/// Only the header is read; pixel data is not decoded here.
#[tracing::instrument(skip(bytes), fields(byte_len = bytes.len()))]
pub fn validate_input_with(bytes: &[u8], limits: InputLimits) -> SnapResult<ImageInfo> {
    if bytes.len() > limits.max_bytes {
        return Err(SnapError::rejected(format!(
            "file is too large ({}). Maximum size: {}.",
            readable_size(bytes.len()),
            readable_size(limits.max_bytes)
        )));
    }

    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| SnapError::decode(format!("could not read image header: {e}")))?;
    let format = reader.format().ok_or_else(|| {
        SnapError::decode("the file is damaged or has an unsupported format")
    })?;
    if !ALLOWED_FORMATS.contains(&format) {
        return Err(SnapError::rejected(format!(
            "unsupported format {format:?}. Supported: PNG, JPEG, WebP."
        )));
    }

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| SnapError::decode(format!("could not read image dimensions: {e}")))?;

    if width > limits.max_width || height > limits.max_height {
        return Err(SnapError::rejected(format!(
            "resolution {width}x{height} is too large. Maximum: {}x{}.",
            limits.max_width, limits.max_height
        )));
    }
    if width < limits.min_width || height < limits.min_height {
        return Err(SnapError::rejected(format!(
            "resolution {width}x{height} is too small. Minimum: {}x{}.",
            limits.min_width, limits.min_height
        )));
    }

    tracing::debug!(?format, width, height, "input accepted");
    Ok(ImageInfo {
        format,
        width,
        height,
        byte_len: bytes.len(),
    })
}

/// Human-readable byte count (`B`, `KB`, `MB`).
pub fn readable_size(bytes: usize) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    if bytes < 1024 * 1024 {
        return format!("{:.2} KB", bytes as f64 / 1024.0);
    }
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/validate.rs"]
mod tests;
