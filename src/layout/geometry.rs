use serde::Serialize;

use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::{SnapError, SnapResult};
use crate::layout::fit::contain_size;
use crate::layout::table::{LAYERED, MAC_WINDOW, PHONE};
use crate::scene::style::{LayeredParams, TemplateKind, TemplateSpec};

/// Resolved geometry of one render, in canvas pixel coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum GeometryPlan {
    /// macOS-style window.
    MacWindow(MacWindowPlan),
    /// Phone mockup.
    Phone(PhonePlan),
    /// Layered stack.
    Layered(LayeredPlan),
}

/// Mac-window geometry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacWindowPlan {
    /// Output canvas.
    pub canvas: Canvas,
    /// Outer window bounds.
    pub window: Rect,
    /// Title bar, the top strip of the window.
    pub title_bar: Rect,
    /// Screenshot region; same size as the input.
    pub screen: Rect,
    /// Traffic-light centers (close, minimize, zoom).
    pub buttons: [Point; 3],
    /// Window corner radius.
    pub window_radius: f64,
    /// Screenshot corner radius.
    pub screen_radius: f64,
    /// Traffic-light radius.
    pub button_radius: f64,
}

/// Phone-mockup geometry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhonePlan {
    /// Output canvas.
    pub canvas: Canvas,
    /// Outer device frame.
    pub frame: Rect,
    /// Display area inside the bezel.
    pub screen: Rect,
    /// Island pill.
    pub island: Rect,
    /// Camera dot center, inside the pill's trailing cap.
    pub camera: Point,
    /// Frame corner radius.
    pub device_radius: f64,
    /// Screen corner radius.
    pub screen_radius: f64,
    /// Camera dot radius.
    pub camera_radius: f64,
}

/// Layered-stack geometry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayeredPlan {
    /// Output canvas.
    pub canvas: Canvas,
    /// Contain-fitted screenshot region, centered.
    pub main: Rect,
    /// Back cards, farthest first.
    pub back: Vec<BackCard>,
    /// Upward shift per back layer after clamping.
    pub offset_step: f64,
}

/// One planned back card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackCard {
    /// Card bounds.
    pub rect: Rect,
    /// Card opacity.
    pub opacity: f32,
}

impl GeometryPlan {
    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        match self {
            Self::MacWindow(p) => p.canvas,
            Self::Phone(p) => p.canvas,
            Self::Layered(p) => p.canvas,
        }
    }

    /// Template this plan belongs to.
    pub fn kind(&self) -> TemplateKind {
        match self {
            Self::MacWindow(_) => TemplateKind::MacWindow,
            Self::Phone(_) => TemplateKind::Iphone,
            Self::Layered(_) => TemplateKind::Layered,
        }
    }

    /// Every planned sub-rectangle.
    pub fn rects(&self) -> Vec<Rect> {
        match self {
            Self::MacWindow(p) => {
                let mut out = vec![p.window, p.title_bar, p.screen];
                out.extend(p.buttons.iter().map(|c| circle_bounds(*c, p.button_radius)));
                out
            }
            Self::Phone(p) => vec![
                p.frame,
                p.screen,
                p.island,
                circle_bounds(p.camera, p.camera_radius),
            ],
            Self::Layered(p) => {
                let mut out: Vec<Rect> = p.back.iter().map(|c| c.rect).collect();
                out.push(p.main);
                out
            }
        }
    }
}

/// Plan the geometry for `template` around an `input_width x input_height` screenshot.
#[tracing::instrument(skip(template), fields(kind = %template.kind()))]
pub fn plan_geometry(
    template: &TemplateSpec,
    padding: u32,
    input_width: u32,
    input_height: u32,
) -> SnapResult<GeometryPlan> {
    if input_width == 0 || input_height == 0 {
        return Err(SnapError::config(format!(
            "input image must be non-empty (got {input_width}x{input_height})"
        )));
    }
    let plan = match template {
        TemplateSpec::MacWindow(_) => {
            GeometryPlan::MacWindow(plan_mac_window(padding, input_width, input_height)?)
        }
        TemplateSpec::Iphone(_) => GeometryPlan::Phone(plan_phone(padding)?),
        TemplateSpec::Layered(params) => {
            GeometryPlan::Layered(plan_layered(params, input_width, input_height)?)
        }
    };
    tracing::debug!(
        width = plan.canvas().width,
        height = plan.canvas().height,
        "geometry planned"
    );
    Ok(plan)
}

fn plan_mac_window(padding: u32, input_width: u32, input_height: u32) -> SnapResult<MacWindowPlan> {
    let t = &MAC_WINDOW;
    let p = f64::from(padding);
    let (iw, ih) = (f64::from(input_width), f64::from(input_height));
    let window_w = iw + 2.0 * t.window_padding;
    let window_h = ih + t.title_bar_height + 2.0 * t.window_padding;
    let canvas = canvas_for(window_w + 2.0 * p, window_h + 2.0 * p)?;

    let window = Rect::new(p, p, p + window_w, p + window_h);
    let title_bar = Rect::new(window.x0, window.y0, window.x1, window.y0 + t.title_bar_height);
    let sx = window.x0 + t.window_padding;
    let sy = window.y0 + t.title_bar_height + t.window_padding;
    let screen = Rect::new(sx, sy, sx + iw, sy + ih);

    let pitch = 2.0 * t.button_radius + t.button_spacing;
    let by = window.y0 + t.title_bar_height / 2.0;
    let buttons = [0.0, 1.0, 2.0].map(|i| Point::new(window.x0 + t.button_inset + i * pitch, by));

    Ok(MacWindowPlan {
        canvas,
        window,
        title_bar,
        screen,
        buttons,
        window_radius: t.window_radius,
        screen_radius: t.screen_radius,
        button_radius: t.button_radius,
    })
}

fn plan_phone(padding: u32) -> SnapResult<PhonePlan> {
    let t = &PHONE;
    let p = f64::from(padding);
    let (fw, fh) = (t.frame_width(), t.frame_height());
    let canvas = canvas_for(fw + 2.0 * p, fh + 2.0 * p)?;

    let frame = Rect::new(p, p, p + fw, p + fh);
    let screen = Rect::new(
        frame.x0 + t.bezel,
        frame.y0 + t.bezel,
        frame.x1 - t.bezel,
        frame.y1 - t.bezel,
    );
    let ix = screen.x0 + (screen.width() - t.island_width) / 2.0;
    let iy = screen.y0 + t.island_top;
    let island = Rect::new(ix, iy, ix + t.island_width, iy + t.island_height);
    let cap = t.island_height / 2.0;
    let camera = Point::new(island.x1 - cap, island.y0 + cap);

    Ok(PhonePlan {
        canvas,
        frame,
        screen,
        island,
        camera,
        device_radius: t.device_radius,
        screen_radius: t.screen_radius,
        camera_radius: t.camera_radius,
    })
}

fn plan_layered(
    params: &LayeredParams,
    input_width: u32,
    input_height: u32,
) -> SnapResult<LayeredPlan> {
    let t = &LAYERED;
    let width = params.output_width.unwrap_or(t.default_width);
    let height = params.output_height.unwrap_or(t.default_height);
    if width > t.max_output_side || height > t.max_output_side {
        return Err(SnapError::config(format!(
            "layered output {width}x{height} exceeds {0}x{0}",
            t.max_output_side
        )));
    }
    let canvas = canvas_for(f64::from(width), f64::from(height))?;

    let box_w = (f64::from(width) * t.main_fraction).round() as u32;
    let box_h = (f64::from(height) * t.main_fraction).round() as u32;
    let (mw, mh) = contain_size(input_width, input_height, box_w.max(1), box_h.max(1));
    let (mw, mh) = (f64::from(mw), f64::from(mh));
    let cx = (f64::from(width) / 2.0).round();
    let cy = (f64::from(height) / 2.0).round();
    let main = centered(cx, cy, mw, mh);

    let requested = f64::from(params.offset_step.unwrap_or(t.default_offset_step));
    let farthest = t.back_layers.iter().map(|l| l.index).max().unwrap_or(1).max(1);
    let farthest_top = t
        .back_layers
        .iter()
        .filter(|l| l.index == farthest)
        .map(|l| centered(cx, cy, mw * l.width_factor, mh * l.height_factor).y0)
        .fold(f64::INFINITY, f64::min);
    let offset_step = requested
        .min((farthest_top / f64::from(farthest)).floor())
        .max(0.0);

    let back = t
        .back_layers
        .iter()
        .map(|l| {
            let r = centered(cx, cy, mw * l.width_factor, mh * l.height_factor);
            let shift = offset_step * f64::from(l.index);
            BackCard {
                rect: Rect::new(r.x0, r.y0 - shift, r.x1, r.y1 - shift),
                opacity: l.opacity,
            }
        })
        .collect();

    Ok(LayeredPlan {
        canvas,
        main,
        back,
        offset_step,
    })
}

/// Whole-pixel rect of `w x h` (rounded) centered on `(cx, cy)`.
fn centered(cx: f64, cy: f64, w: f64, h: f64) -> Rect {
    let (w, h) = (w.round(), h.round());
    let x0 = (cx - w / 2.0).round();
    let y0 = (cy - h / 2.0).round();
    Rect::new(x0, y0, x0 + w, y0 + h)
}

fn circle_bounds(c: Point, r: f64) -> Rect {
    Rect::new(c.x - r, c.y - r, c.x + r, c.y + r)
}

fn canvas_for(width: f64, height: f64) -> SnapResult<Canvas> {
    let max = f64::from(u16::MAX);
    if !(width.is_finite() && height.is_finite()) || width > max || height > max {
        return Err(SnapError::config(format!(
            "canvas {width}x{height} exceeds the {max}px limit"
        )));
    }
    Canvas::new(width.round() as u32, height.round() as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
