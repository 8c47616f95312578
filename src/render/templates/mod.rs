//! Template renderers.
//!
//! Each renderer runs the same pipeline: plan geometry, generate the background, build overlays,
//! fit the screenshot, mask it, then compose bottom to top.

use crate::foundation::core::{RasterLayer, Rgba8};
use crate::foundation::error::SnapResult;
use crate::layout::geometry::GeometryPlan;
use crate::overlay::builder::OverlayBuilder;
use crate::overlay::paint::Paint;
use crate::overlay::shadow::{ShadowStyle, drop_shadow};
use crate::overlay::shape::Shape;
use crate::scene::style::{BackgroundSpec, CommonConfig, TemplateKind, TemplateSpec};

pub(crate) mod layered;
pub(crate) mod mac_window;
pub(crate) mod phone;

pub use layered::LayeredStackRenderer;
pub use mac_window::MacWindowRenderer;
pub use phone::PhoneMockupRenderer;

/// A template that embeds a screenshot into a decorated canvas.
pub trait TemplateRenderer {
    /// Which template this is.
    fn kind(&self) -> TemplateKind;

    /// Geometry for a screenshot of `input_width x input_height`.
    fn plan(&self, padding: u32, input_width: u32, input_height: u32) -> SnapResult<GeometryPlan>;

    /// Render `screenshot` (premultiplied) over `background`.
    fn render(
        &self,
        screenshot: &RasterLayer,
        background: &BackgroundSpec,
        common: &CommonConfig,
    ) -> SnapResult<RasterLayer>;
}

/// Renderer for `spec`.
pub fn renderer_for(spec: &TemplateSpec) -> Box<dyn TemplateRenderer + Send + Sync> {
    match spec {
        TemplateSpec::MacWindow(p) => Box::new(MacWindowRenderer::new(*p)),
        TemplateSpec::Iphone(p) => Box::new(PhoneMockupRenderer::new(*p)),
        TemplateSpec::Layered(p) => Box::new(LayeredStackRenderer::new(*p)),
    }
}

/// A layer with its destination offset.
pub(crate) struct Placed {
    pub(crate) layer: RasterLayer,
    pub(crate) left: i32,
    pub(crate) top: i32,
}

/// Render `shape` on its own pixel-aligned layer, returning it with its canvas offset.
pub(crate) fn isolate(shape: &Shape, paint: &Paint) -> SnapResult<Placed> {
    let b = shape.bounds();
    let left = b.x0.floor();
    let top = b.y0.floor();
    let w = ((b.x1.ceil() - left) as u32).max(1);
    let h = ((b.y1.ceil() - top) as u32).max(1);
    let mut builder = OverlayBuilder::new(w, h)?;
    builder.fill(&shape.translated(-left, -top), paint)?;
    Ok(Placed {
        layer: builder.finish(),
        left: left as i32,
        top: top as i32,
    })
}

/// Drop shadow of `shape` positioned on the canvas.
pub(crate) fn shape_shadow(shape: &Shape, style: &ShadowStyle) -> SnapResult<Placed> {
    let silhouette = isolate(shape, &Paint::Solid(Rgba8::WHITE))?;
    let shadow = drop_shadow(&silhouette.layer, style)?;
    Ok(Placed {
        layer: shadow.layer,
        left: silhouette.left + shadow.dx,
        top: silhouette.top + shadow.dy,
    })
}
