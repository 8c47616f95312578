use vello_cpu::kurbo::Shape as _;

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{SnapError, SnapResult};

const PATH_TOLERANCE: f64 = 0.1;

/// Per-corner radii of a rounded rectangle, clockwise from the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CornerRadii {
    /// Top-left radius.
    pub top_left: f64,
    /// Top-right radius.
    pub top_right: f64,
    /// Bottom-right radius.
    pub bottom_right: f64,
    /// Bottom-left radius.
    pub bottom_left: f64,
}

impl CornerRadii {
    /// Same radius on every corner.
    pub const fn uniform(r: f64) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    /// Rounded top corners, square bottom corners.
    pub const fn top(r: f64) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: 0.0,
            bottom_left: 0.0,
        }
    }
}

/// Parameterized vector shape in layer pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Rectangle with rounded corners.
    RoundedRect {
        /// Outer bounds.
        rect: Rect,
        /// Corner radii.
        radii: CornerRadii,
    },
    /// Rounded rectangle whose radius is half its height.
    Pill(Rect),
    /// Ellipse inscribed in the rectangle.
    Ellipse(Rect),
    /// Circle.
    Circle {
        /// Center point.
        center: Point,
        /// Radius in pixels.
        radius: f64,
    },
}

impl Shape {
    /// Rounded rectangle with a uniform radius.
    pub fn rounded(rect: Rect, radius: f64) -> Self {
        Self::RoundedRect {
            rect,
            radii: CornerRadii::uniform(radius),
        }
    }

    /// Circle from center coordinates.
    pub fn circle(cx: f64, cy: f64, radius: f64) -> Self {
        Self::Circle {
            center: Point::new(cx, cy),
            radius,
        }
    }

    /// Axis-aligned bounding box.
    pub fn bounds(&self) -> Rect {
        match *self {
            Self::Rect(r) | Self::Pill(r) | Self::Ellipse(r) => r,
            Self::RoundedRect { rect, .. } => rect,
            Self::Circle { center, radius } => Rect::new(
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
        }
    }

    /// Same shape moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let mv = |r: Rect| Rect::new(r.x0 + dx, r.y0 + dy, r.x1 + dx, r.y1 + dy);
        match *self {
            Self::Rect(r) => Self::Rect(mv(r)),
            Self::RoundedRect { rect, radii } => Self::RoundedRect {
                rect: mv(rect),
                radii,
            },
            Self::Pill(r) => Self::Pill(mv(r)),
            Self::Ellipse(r) => Self::Ellipse(mv(r)),
            Self::Circle { center, radius } => Self::Circle {
                center: Point::new(center.x + dx, center.y + dy),
                radius,
            },
        }
    }

    fn to_cpu_path(self) -> vello_cpu::kurbo::BezPath {
        use vello_cpu::kurbo;

        let cpu_rect = |r: Rect| kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1);
        match self {
            Self::Rect(r) => cpu_rect(r).to_path(PATH_TOLERANCE),
            Self::RoundedRect { rect, radii } => {
                let max_r = rect.width().min(rect.height()).max(0.0) / 2.0;
                let clamp = |v: f64| v.clamp(0.0, max_r);
                kurbo::RoundedRect::from_rect(
                    cpu_rect(rect),
                    kurbo::RoundedRectRadii::new(
                        clamp(radii.top_left),
                        clamp(radii.top_right),
                        clamp(radii.bottom_right),
                        clamp(radii.bottom_left),
                    ),
                )
                .to_path(PATH_TOLERANCE)
            }
            Self::Pill(r) => {
                let radius = r.height().min(r.width()).max(0.0) / 2.0;
                kurbo::RoundedRect::from_rect(cpu_rect(r), radius).to_path(PATH_TOLERANCE)
            }
            Self::Ellipse(r) => {
                let c = r.center();
                kurbo::Ellipse::new(
                    (c.x, c.y),
                    (r.width().max(0.0) / 2.0, r.height().max(0.0) / 2.0),
                    0.0,
                )
                .to_path(PATH_TOLERANCE)
            }
            Self::Circle { center, radius } => {
                kurbo::Circle::new((center.x, center.y), radius.max(0.0)).to_path(PATH_TOLERANCE)
            }
        }
    }
}

/// Rasterize `shape` into a `width x height` anti-aliased coverage mask (one byte per pixel).
pub(crate) fn coverage(width: u32, height: u32, shape: &Shape) -> SnapResult<Vec<u8>> {
    let w: u16 = width
        .try_into()
        .map_err(|_| SnapError::config(format!("overlay width exceeds u16: {width}")))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| SnapError::config(format!("overlay height exceeds u16: {height}")))?;
    if w == 0 || h == 0 {
        return Ok(Vec::new());
    }

    let path = shape.to_cpu_path();
    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
    ctx.fill_path(&path);
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    Ok(pixmap
        .data_as_u8_slice()
        .chunks_exact(4)
        .map(|px| px[3])
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/shape.rs"]
mod tests;
