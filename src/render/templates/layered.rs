use crate::background::generate_background;
use crate::foundation::core::{RasterLayer, Rect, Rgba8, Vec2};
use crate::foundation::error::{SnapError, SnapResult};
use crate::layout::fit::contain;
use crate::layout::geometry::{GeometryPlan, plan_geometry};
use crate::layout::table::LAYERED;
use crate::overlay::builder::cutout_mask;
use crate::overlay::paint::Paint;
use crate::overlay::shadow::ShadowStyle;
use crate::overlay::shape::Shape;
use crate::render::compositor::{LayerEntry, compose};
use crate::render::templates::{Placed, TemplateRenderer, isolate, shape_shadow};
use crate::scene::style::{BackgroundSpec, CommonConfig, LayeredParams, TemplateKind, TemplateSpec};

/// Screenshot in front of three smaller, translucent cards shifted upward.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayeredStackRenderer {
    params: LayeredParams,
}

impl LayeredStackRenderer {
    /// Renderer with `params`.
    pub fn new(params: LayeredParams) -> Self {
        Self { params }
    }
}

impl TemplateRenderer for LayeredStackRenderer {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Layered
    }

    fn plan(&self, padding: u32, input_width: u32, input_height: u32) -> SnapResult<GeometryPlan> {
        plan_geometry(
            &TemplateSpec::Layered(self.params),
            padding,
            input_width,
            input_height,
        )
    }

    #[tracing::instrument(skip_all, fields(w = screenshot.width, h = screenshot.height))]
    fn render(
        &self,
        screenshot: &RasterLayer,
        background: &BackgroundSpec,
        common: &CommonConfig,
    ) -> SnapResult<RasterLayer> {
        let GeometryPlan::Layered(plan) =
            self.plan(common.padding, screenshot.width, screenshot.height)?
        else {
            return Err(SnapError::config("layered planner returned a foreign plan"));
        };
        let canvas = plan.canvas;
        let base = generate_background(background, canvas.width, canvas.height, Some(screenshot))?;

        let card_shadow = ShadowStyle {
            blur: LAYERED.back_shadow_blur,
            offset: Vec2::new(0.0, LAYERED.back_shadow_dy),
            color: Rgba8::BLACK,
            opacity: LAYERED.back_shadow_opacity,
        };
        let mut cards: Vec<(Placed, Placed, f32)> = Vec::with_capacity(plan.back.len());
        for card in &plan.back {
            let shape = Shape::rounded(card.rect, LAYERED.back_radius);
            let shadow = shape_shadow(&shape, &card_shadow)?;
            let body = isolate(&shape, &Paint::Solid(Rgba8::WHITE))?;
            cards.push((shadow, body, card.opacity));
        }

        let mw = plan.main.width().round() as u32;
        let mh = plan.main.height().round() as u32;
        let radius = if common.corner_radius.is_finite() {
            common.corner_radius.max(0.0)
        } else {
            return Err(SnapError::config("cornerRadius must be finite"));
        };
        let main_shape = Shape::rounded(Rect::new(0.0, 0.0, f64::from(mw), f64::from(mh)), radius);
        let backing = isolate(
            &main_shape.translated(plan.main.x0, plan.main.y0),
            &Paint::Solid(Rgba8::WHITE),
        )?;
        let fitted = contain(screenshot, mw, mh)?;
        let mask = cutout_mask(mw, mh, &main_shape, &[])?;
        let main = compose(fitted, &[LayerEntry::mask(&mask, 0, 0)])?;

        let mut entries = Vec::with_capacity(cards.len() * 2 + 2);
        for (shadow, body, opacity) in &cards {
            entries.push(LayerEntry::over(&shadow.layer, shadow.left, shadow.top).with_opacity(*opacity));
            entries.push(LayerEntry::over(&body.layer, body.left, body.top).with_opacity(*opacity));
        }
        entries.push(LayerEntry::over(&backing.layer, backing.left, backing.top));
        entries.push(LayerEntry::over(&main, plan.main.x0 as i32, plan.main.y0 as i32));
        compose(base, &entries)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/templates/layered.rs"]
mod tests;
