use crate::effects::composite::{dest_out, over};
use crate::foundation::core::{RasterLayer, Rgba8};
use crate::foundation::error::SnapResult;
use crate::overlay::paint::Paint;
use crate::overlay::shape::{Shape, coverage};

/// Accumulates filled shapes and cutouts into one premultiplied layer.
///
/// Shapes are painted in call order with source-over. Cutouts multiply the accumulated alpha by
/// `1 - coverage`; they operate on pixels only, so later fills can paint over a hole again.
#[derive(Debug)]
pub struct OverlayBuilder {
    layer: RasterLayer,
}

impl OverlayBuilder {
    /// Start from a transparent `width x height` layer.
    pub fn new(width: u32, height: u32) -> SnapResult<Self> {
        Ok(Self {
            layer: RasterLayer::transparent(width, height)?,
        })
    }

    /// Paint `shape` with `paint`.
    pub fn fill(&mut self, shape: &Shape, paint: &Paint) -> SnapResult<&mut Self> {
        self.fill_with_opacity(shape, paint, 1.0)
    }

    /// Paint `shape` with `paint`, scaled by `opacity`.
    pub fn fill_with_opacity(
        &mut self,
        shape: &Shape,
        paint: &Paint,
        opacity: f32,
    ) -> SnapResult<&mut Self> {
        let (w, h) = (self.layer.width, self.layer.height);
        let cov = coverage(w, h, shape)?;
        let bounds = shape.bounds();
        let solid = match paint {
            Paint::Solid(c) => Some(c.to_premul()),
            _ => None,
        };

        for (i, (&c, dst)) in cov
            .iter()
            .zip(self.layer.data.chunks_exact_mut(4))
            .enumerate()
        {
            if c == 0 {
                continue;
            }
            let src = match solid {
                Some(px) => px,
                None => {
                    let x = (i % w as usize) as u32;
                    let y = (i / w as usize) as u32;
                    paint.sample_px(bounds, x, y).to_premul()
                }
            };
            let cov_opacity = opacity * f32::from(c) / 255.0;
            let out = over([dst[0], dst[1], dst[2], dst[3]], src, cov_opacity);
            dst.copy_from_slice(&out);
        }
        Ok(self)
    }

    /// Subtract `shape` from the accumulated alpha.
    pub fn cutout(&mut self, shape: &Shape) -> SnapResult<&mut Self> {
        let cov = coverage(self.layer.width, self.layer.height, shape)?;
        for (&c, dst) in cov.iter().zip(self.layer.data.chunks_exact_mut(4)) {
            if c == 0 {
                continue;
            }
            let out = dest_out([dst[0], dst[1], dst[2], dst[3]], c);
            dst.copy_from_slice(&out);
        }
        Ok(self)
    }

    /// Take the finished layer.
    pub fn finish(self) -> RasterLayer {
        self.layer
    }
}

/// White `base` shape with every cutout subtracted, for use as a destination-in mask.
pub fn cutout_mask(
    width: u32,
    height: u32,
    base: &Shape,
    cutouts: &[Shape],
) -> SnapResult<RasterLayer> {
    let mut builder = OverlayBuilder::new(width, height)?;
    builder.fill(base, &Paint::Solid(Rgba8::WHITE))?;
    for hole in cutouts {
        builder.cutout(hole)?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/builder.rs"]
mod tests;
