use crate::background::generate_background;
use crate::foundation::core::{Point, RasterLayer, Rect};
use crate::foundation::error::{SnapError, SnapResult};
use crate::layout::fit::cover;
use crate::layout::geometry::{GeometryPlan, PhonePlan, plan_geometry};
use crate::layout::table::{PHONE, device_palette};
use crate::overlay::builder::{OverlayBuilder, cutout_mask};
use crate::overlay::paint::Paint;
use crate::overlay::shadow::ShadowStyle;
use crate::overlay::shape::Shape;
use crate::render::compositor::{LayerEntry, compose};
use crate::render::templates::{TemplateRenderer, isolate, shape_shadow};
use crate::scene::style::{BackgroundSpec, CommonConfig, PhoneParams, TemplateKind, TemplateSpec};

/// Phone mockup with a metal frame and an Island cutout. The screen size is fixed; the
/// screenshot is cover-fitted into it.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhoneMockupRenderer {
    params: PhoneParams,
}

impl PhoneMockupRenderer {
    /// Renderer with `params`.
    pub fn new(params: PhoneParams) -> Self {
        Self { params }
    }

    fn frame(&self, plan: &PhonePlan) -> SnapResult<RasterLayer> {
        let (base, highlight) = device_palette(self.params.device_color);
        let metal = Paint::linear(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            &[highlight, base, highlight],
        );
        let mut frame = OverlayBuilder::new(plan.canvas.width, plan.canvas.height)?;
        frame
            .fill(&Shape::rounded(plan.frame, plan.device_radius), &metal)?
            .fill(
                &Shape::rounded(plan.screen, plan.screen_radius),
                &Paint::Solid(PHONE.screen_fill),
            )?
            .fill(&Shape::Pill(plan.island), &Paint::Solid(PHONE.island_fill))?;
        Ok(frame.finish())
    }

    /// Screen-shaped mask minus the Island, in screen-local coordinates.
    ///
    /// The camera dot sits inside the pill's trailing cap, so the pill cutout covers it.
    fn screen_mask(plan: &PhonePlan, width: u32, height: u32) -> SnapResult<RasterLayer> {
        cutout_mask(
            width,
            height,
            &Shape::rounded(
                Rect::new(0.0, 0.0, f64::from(width), f64::from(height)),
                plan.screen_radius,
            ),
            &[Shape::Pill(plan.island).translated(-plan.screen.x0, -plan.screen.y0)],
        )
    }
}

impl TemplateRenderer for PhoneMockupRenderer {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Iphone
    }

    fn plan(&self, padding: u32, input_width: u32, input_height: u32) -> SnapResult<GeometryPlan> {
        plan_geometry(
            &TemplateSpec::Iphone(self.params),
            padding,
            input_width,
            input_height,
        )
    }

    #[tracing::instrument(skip_all, fields(device = ?self.params.device_color))]
    fn render(
        &self,
        screenshot: &RasterLayer,
        background: &BackgroundSpec,
        common: &CommonConfig,
    ) -> SnapResult<RasterLayer> {
        let GeometryPlan::Phone(plan) =
            self.plan(common.padding, screenshot.width, screenshot.height)?
        else {
            return Err(SnapError::config("phone planner returned a foreign plan"));
        };
        let canvas = plan.canvas;
        let base = generate_background(background, canvas.width, canvas.height, Some(screenshot))?;

        let style = ShadowStyle::from_config(&common.shadow, PHONE.shadow_opacity)?;
        let shadow = shape_shadow(&Shape::rounded(plan.frame, plan.device_radius), &style)?;
        let frame = self.frame(&plan)?;

        let sw = plan.screen.width().round() as u32;
        let sh = plan.screen.height().round() as u32;
        let fitted = cover(screenshot, sw, sh)?;
        let mask = Self::screen_mask(&plan, sw, sh)?;
        let screen = compose(fitted, &[LayerEntry::mask(&mask, 0, 0)])?;

        let lens = isolate(
            &Shape::circle(plan.camera.x, plan.camera.y, plan.camera_radius),
            &Paint::Solid(PHONE.camera_fill),
        )?;

        compose(
            base,
            &[
                LayerEntry::over(&shadow.layer, shadow.left, shadow.top),
                LayerEntry::over(&frame, 0, 0),
                LayerEntry::over(&screen, plan.screen.x0 as i32, plan.screen.y0 as i32),
                LayerEntry::over(&lens.layer, lens.left, lens.top),
            ],
        )
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/templates/phone.rs"]
mod tests;
