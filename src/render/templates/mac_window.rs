use crate::background::generate_background;
use crate::foundation::core::{Point, RasterLayer, Rect, Rgba8, Vec2};
use crate::foundation::error::{SnapError, SnapResult};
use crate::layout::geometry::{GeometryPlan, MacWindowPlan, plan_geometry};
use crate::layout::table::MAC_WINDOW;
use crate::overlay::builder::{OverlayBuilder, cutout_mask};
use crate::overlay::paint::Paint;
use crate::overlay::shadow::ShadowStyle;
use crate::overlay::shape::{CornerRadii, Shape};
use crate::render::compositor::{LayerEntry, compose};
use crate::render::templates::{TemplateRenderer, shape_shadow};
use crate::scene::style::{BackgroundSpec, CommonConfig, MacWindowParams, TemplateKind, TemplateSpec};

/// macOS-style window: title bar, traffic lights, screenshot at native size.
#[derive(Clone, Copy, Debug, Default)]
pub struct MacWindowRenderer {
    params: MacWindowParams,
}

impl MacWindowRenderer {
    /// Renderer with `params`.
    pub fn new(params: MacWindowParams) -> Self {
        Self { params }
    }

    fn buttons_visible(&self) -> bool {
        self.params.window_buttons != Some(false)
    }

    fn frame(&self, plan: &MacWindowPlan) -> SnapResult<RasterLayer> {
        let t = &MAC_WINDOW;
        let mut frame = OverlayBuilder::new(plan.canvas.width, plan.canvas.height)?;
        frame.fill(
            &Shape::rounded(plan.window, plan.window_radius),
            &Paint::Solid(t.body),
        )?;
        frame.fill(
            &Shape::RoundedRect {
                rect: plan.title_bar,
                radii: CornerRadii::top(plan.window_radius),
            },
            &Paint::vertical(&t.title_bar),
        )?;

        let hy = plan.window.y0 + 1.0;
        frame.fill_with_opacity(
            &Shape::Pill(Rect::new(
                plan.window.x0 + plan.window_radius,
                hy,
                plan.window.x1 - plan.window_radius,
                hy + 1.0,
            )),
            &Paint::Solid(Rgba8::WHITE),
            t.highlight_opacity,
        )?;

        if self.buttons_visible() {
            for ((center, base), glint) in plan.buttons.iter().zip(t.buttons).zip(t.button_glints) {
                frame.fill(
                    &Shape::circle(center.x, center.y, plan.button_radius),
                    &Paint::Solid(base),
                )?;
                frame.fill(
                    &Shape::circle(center.x, center.y - 0.5, plan.button_radius - 1.0),
                    &Paint::radial(Point::new(0.5, 0.3), Vec2::new(0.5, 0.5), &glint),
                )?;
            }
        }

        // Screenshot backing.
        frame.fill(
            &Shape::rounded(plan.screen, plan.screen_radius),
            &Paint::Solid(Rgba8::WHITE),
        )?;
        Ok(frame.finish())
    }
}

impl TemplateRenderer for MacWindowRenderer {
    fn kind(&self) -> TemplateKind {
        TemplateKind::MacWindow
    }

    fn plan(&self, padding: u32, input_width: u32, input_height: u32) -> SnapResult<GeometryPlan> {
        plan_geometry(
            &TemplateSpec::MacWindow(self.params),
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
        let GeometryPlan::MacWindow(plan) =
            self.plan(common.padding, screenshot.width, screenshot.height)?
        else {
            return Err(SnapError::config("mac-window planner returned a foreign plan"));
        };
        let canvas = plan.canvas;
        let base = generate_background(background, canvas.width, canvas.height, Some(screenshot))?;

        let style = ShadowStyle::from_config(&common.shadow, MAC_WINDOW.shadow_opacity)?;
        let style = style.with_offset(
            style.offset.x,
            style.offset.y + MAC_WINDOW.shadow_offset_boost,
        );
        let shadow = shape_shadow(&Shape::rounded(plan.window, plan.window_radius), &style)?;
        let frame = self.frame(&plan)?;

        let (sw, sh) = (screenshot.width, screenshot.height);
        let mask = cutout_mask(
            sw,
            sh,
            &Shape::rounded(
                Rect::new(0.0, 0.0, f64::from(sw), f64::from(sh)),
                plan.screen_radius,
            ),
            &[],
        )?;
        let rounded = compose(screenshot.clone(), &[LayerEntry::mask(&mask, 0, 0)])?;

        compose(
            base,
            &[
                LayerEntry::over(&shadow.layer, shadow.left, shadow.top),
                LayerEntry::over(&frame, 0, 0),
                LayerEntry::over(&rounded, plan.screen.x0 as i32, plan.screen.y0 as i32),
            ],
        )
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/templates/mac_window.rs"]
mod tests;
