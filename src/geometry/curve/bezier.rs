use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

use super::{Curve, CurveDomain};

/// A cubic Bézier segment in the section plane.
///
/// Evaluated over `t` in `[0, 1]` with the Bernstein basis:
/// `P(t) = (1-t)³p0 + 3(1-t)²t p1 + 3(1-t)t² p2 + t³p3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    p0: Point2,
    p1: Point2,
    p2: Point2,
    p3: Point2,
}

impl CubicBezier {
    /// Creates a new cubic segment from its four control points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Creates a straight segment from `a` to `b`, with the interior control
    /// points placed at the chord thirds so that `x(t)` stays linear in `t`.
    #[must_use]
    pub fn from_line(a: Point2, b: Point2) -> Self {
        let third = (b - a) / 3.0;
        Self {
            p0: a,
            p1: a + third,
            p2: a + third * 2.0,
            p3: b,
        }
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.p0
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.p3
    }
}

impl Curve for CubicBezier {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        let CurveDomain { t_min, t_max } = self.domain();
        if t < t_min - TOLERANCE || t > t_max + TOLERANCE {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: t_min,
                max: t_max,
            }
            .into());
        }
        let t = t.clamp(t_min, t_max);

        let u = 1.0 - t;
        let w0 = u * u * u;
        let w1 = 3.0 * u * u * t;
        let w2 = 3.0 * u * t * t;
        let w3 = t * t * t;

        Ok(Point2::from(
            self.p0.coords * w0 + self.p1.coords * w1 + self.p2.coords * w2 + self.p3.coords * w3,
        ))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }
}
