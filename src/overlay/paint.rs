use crate::foundation::core::{Point, Rect, Rgba8, Vec2};
use crate::foundation::math::lerp_u8;

/// Gradient color stop at `offset` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient, `[0, 1]`.
    pub offset: f64,
    /// Straight-alpha color at this stop.
    pub color: Rgba8,
}

/// Fill for a [`crate::Shape`].
///
/// Gradient geometry is expressed in unit coordinates relative to the filled region's bounding
/// box (`(0, 0)` top-left, `(1, 1)` bottom-right), like SVG `objectBoundingBox` gradients.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Single color.
    Solid(Rgba8),
    /// Linear gradient from `start` to `end`, padded outside the axis.
    Linear {
        /// Unit-space start point (offset 0).
        start: Point,
        /// Unit-space end point (offset 1).
        end: Point,
        /// Stops sorted by offset.
        stops: Vec<ColorStop>,
    },
    /// Radial gradient around `center`.
    Radial {
        /// Unit-space center (offset 0).
        center: Point,
        /// Unit-space radii; offset 1 lies on this ellipse.
        radius: Vec2,
        /// Stops sorted by offset.
        stops: Vec<ColorStop>,
    },
}

impl Paint {
    /// Linear gradient with `colors` at evenly spaced stops (`index / (n - 1)`).
    pub fn linear(start: Point, end: Point, colors: &[Rgba8]) -> Self {
        Self::Linear {
            start,
            end,
            stops: evenly_spaced(colors),
        }
    }

    /// Linear gradient for a direction of `angle` degrees.
    ///
    /// The first stop sits on the unit box's inscribed circle at `angle - 90` degrees (clockwise
    /// from +x, y down), the last stop diametrically opposite. `0` runs top to bottom.
    pub fn angled(angle: f64, colors: &[Rgba8]) -> Self {
        let theta = (angle - 90.0).to_radians();
        let (sin, cos) = theta.sin_cos();
        let start = Point::new(0.5 + 0.5 * cos, 0.5 + 0.5 * sin);
        let end = Point::new(1.0 - start.x, 1.0 - start.y);
        Self::linear(start, end, colors)
    }

    /// Top-to-bottom linear gradient.
    pub fn vertical(colors: &[Rgba8]) -> Self {
        Self::linear(Point::new(0.0, 0.0), Point::new(0.0, 1.0), colors)
    }

    /// Radial gradient with `colors` at evenly spaced stops.
    pub fn radial(center: Point, radius: Vec2, colors: &[Rgba8]) -> Self {
        Self::Radial {
            center,
            radius,
            stops: evenly_spaced(colors),
        }
    }

    /// Color at unit coordinates `(u, v)` inside the bounding box.
    pub fn sample(&self, u: f64, v: f64) -> Rgba8 {
        match self {
            Self::Solid(c) => *c,
            Self::Linear { start, end, stops } => {
                let axis = *end - *start;
                let len2 = axis.hypot2();
                let t = if len2 <= f64::EPSILON {
                    0.0
                } else {
                    (Point::new(u, v) - *start).dot(axis) / len2
                };
                sample_stops(stops, t)
            }
            Self::Radial {
                center,
                radius,
                stops,
            } => {
                let rx = radius.x.max(f64::EPSILON);
                let ry = radius.y.max(f64::EPSILON);
                let dx = (u - center.x) / rx;
                let dy = (v - center.y) / ry;
                sample_stops(stops, (dx * dx + dy * dy).sqrt())
            }
        }
    }

    /// Sample the paint for pixel `(x, y)` of a region with bounds `bounds` (pixel centers).
    pub(crate) fn sample_px(&self, bounds: Rect, x: u32, y: u32) -> Rgba8 {
        if let Self::Solid(c) = self {
            return *c;
        }
        let bw = bounds.width().max(f64::EPSILON);
        let bh = bounds.height().max(f64::EPSILON);
        let u = (f64::from(x) + 0.5 - bounds.x0) / bw;
        let v = (f64::from(y) + 0.5 - bounds.y0) / bh;
        self.sample(u, v)
    }
}

/// Stops at `index / (n - 1)`; a single color becomes a one-stop ramp.
pub(crate) fn evenly_spaced(colors: &[Rgba8]) -> Vec<ColorStop> {
    let n = colors.len();
    colors
        .iter()
        .enumerate()
        .map(|(i, &color)| ColorStop {
            offset: if n > 1 {
                i as f64 / (n - 1) as f64
            } else {
                0.0
            },
            color,
        })
        .collect()
}

/// Interpolate between stops at `t`, padding before the first and after the last stop.
pub(crate) fn sample_stops(stops: &[ColorStop], t: f64) -> Rgba8 {
    let Some(first) = stops.first() else {
        return Rgba8::TRANSPARENT;
    };
    let t = if t.is_finite() { t } else { 0.0 };
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let local = if span <= f64::EPSILON {
                1.0
            } else {
                (t - a.offset) / span
            };
            return Rgba8 {
                r: lerp_u8(a.color.r, b.color.r, local),
                g: lerp_u8(a.color.g, b.color.g, local),
                b: lerp_u8(a.color.b, b.color.b, local),
                a: lerp_u8(a.color.a, b.color.a, local),
            };
        }
    }
    stops[stops.len() - 1].color
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/paint.rs"]
mod tests;
