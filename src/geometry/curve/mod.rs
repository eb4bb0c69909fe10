mod bezier;

pub use bezier::CubicBezier;

use crate::error::Result;
use crate::math::Point2;

/// Number of uniform sub-steps for the chordal arc-length approximation.
///
/// A larger count is always safe; a smaller one risks underestimating the
/// length of high-curvature segments.
const ARC_LENGTH_STEPS: usize = 100;

/// Maximum bisection iterations when inverting `x(t)`.
const MAX_INVERSION_ITERS: usize = 64;

/// Bisection stops once the parameter bracket is narrower than this.
const INVERSION_BRACKET: f64 = 1e-12;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for parametric boundary curves in the section plane.
///
/// Inversion and arc length are provided in terms of [`Curve::evaluate`], so a
/// curve type only supplies its evaluation rule and domain.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 2D point.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is outside the curve domain.
    fn evaluate(&self, t: f64) -> Result<Point2>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Approximates the arc length between parameters `t0` and `t1` by summing
    /// straight-line distances over 100 uniform sub-steps.
    ///
    /// Returns 0 when `t0 == t1`; the result is never shorter than the
    /// straight chord between the two endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if either parameter is outside the curve domain.
    fn length_between(&self, t0: f64, t1: f64) -> Result<f64> {
        let mut prev = self.evaluate(t0)?;
        let mut length = 0.0;
        for k in 1..=ARC_LENGTH_STEPS {
            #[allow(clippy::cast_precision_loss)]
            let t = t0 + (t1 - t0) * (k as f64 / ARC_LENGTH_STEPS as f64);
            let next = self.evaluate(t)?;
            length += nalgebra::distance(&prev, &next);
            prev = next;
        }
        Ok(length)
    }

    /// Inverts the curve for a target x-coordinate, assuming `x(t)` is
    /// monotonic over the domain.
    ///
    /// Uses bisection rather than a closed form because `x(t)` does not invert
    /// analytically for every curve family. A target slightly outside the
    /// endpoint x-range is clamped to the nearest endpoint parameter: guide
    /// sampling legitimately overshoots by floating-point margins, so this is
    /// soft behavior, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if curve evaluation itself fails.
    fn parameter_for_x(&self, x: f64) -> Result<f64> {
        let CurveDomain { t_min, t_max } = self.domain();
        let x_start = self.evaluate(t_min)?.x;
        let x_end = self.evaluate(t_max)?.x;
        let increasing = x_end >= x_start;

        if increasing {
            if x <= x_start {
                return Ok(t_min);
            }
            if x >= x_end {
                return Ok(t_max);
            }
        } else {
            if x >= x_start {
                return Ok(t_min);
            }
            if x <= x_end {
                return Ok(t_max);
            }
        }

        let mut lo = t_min;
        let mut hi = t_max;
        for _ in 0..MAX_INVERSION_ITERS {
            let mid = 0.5 * (lo + hi);
            let x_mid = self.evaluate(mid)?.x;
            if (x_mid < x) == increasing {
                lo = mid;
            } else {
                hi = mid;
            }
            if hi - lo < INVERSION_BRACKET {
                break;
            }
        }
        Ok(0.5 * (lo + hi))
    }
}
