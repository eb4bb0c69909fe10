use crate::error::Result;
use crate::geometry::curve::Curve;
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::Point2;

/// Default number of interior samples: t = k/100 for k in 1..=99.
const DEFAULT_STEPS: usize = 99;

/// Deepest deviation of a curve from its reference chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcavityReport {
    /// Maximum perpendicular distance from the curve to the chord.
    /// Always non-negative.
    pub depth: f64,
    /// Curve parameter at the deepest point, normalized by the curve's total
    /// arc length. Only meaningful for curves with nonzero arc length; a
    /// zero-length curve yields a non-finite value.
    pub location: f64,
}

/// Scans a curve against a reference chord for its maximal deviation.
///
/// Only meaningful for curves that bow toward the chord on one side (a
/// concave bottom). A convex bottom curve yields a geometrically meaningless
/// but non-erroring result; the sign convention is not corrected here.
#[derive(Debug, Clone, Copy)]
pub struct ConcavityAnalyzer {
    steps: usize,
}

impl Default for ConcavityAnalyzer {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
        }
    }
}

impl ConcavityAnalyzer {
    /// Creates an analyzer sampling `steps` interior points, at
    /// `t = k / (steps + 1)` for `k` in `1..=steps`.
    #[must_use]
    pub fn new(steps: usize) -> Self {
        Self { steps }
    }

    /// Finds the deepest point of `curve` relative to the chord from
    /// `chord_a` to `chord_b`.
    ///
    /// The scan runs from low to high `t`; on a tie the first sample wins, so
    /// the result is deterministic. The winning x-coordinate is inverted back
    /// to a curve parameter and divided by the total arc length to give the
    /// report's `location`.
    ///
    /// # Errors
    ///
    /// Returns an error if the chord is degenerate (`chord_a == chord_b`) or
    /// if curve evaluation fails.
    pub fn analyze(
        &self,
        curve: &impl Curve,
        chord_a: &Point2,
        chord_b: &Point2,
    ) -> Result<ConcavityReport> {
        #[allow(clippy::cast_precision_loss)]
        let dt = 1.0 / (self.steps as f64 + 1.0);

        let mut max_dist = 0.0;
        let mut max_x = chord_a.x;
        for k in 1..=self.steps {
            #[allow(clippy::cast_precision_loss)]
            let t = k as f64 * dt;
            let sample = curve.evaluate(t)?;
            let dist = point_to_segment_dist(&sample, chord_a, chord_b)?;
            if dist > max_dist {
                max_dist = dist;
                max_x = sample.x;
            }
        }

        let t_at_max = curve.parameter_for_x(max_x)?;
        let total_length = curve.length_between(0.0, 1.0)?;
        Ok(ConcavityReport {
            depth: max_dist,
            location: t_at_max / total_length,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{CubicBezier, CurveDomain};

    /// Curve at a bitwise-constant offset below the x-axis, so every sample
    /// of a scan against the axis chord ties exactly.
    struct ConstantOffsetCurve {
        offset: f64,
    }

    impl Curve for ConstantOffsetCurve {
        fn evaluate(&self, t: f64) -> Result<Point2> {
            Ok(Point2::new(t, self.offset))
        }

        fn domain(&self) -> CurveDomain {
            CurveDomain::new(0.0, 1.0)
        }
    }

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn flat_bottom_has_no_depth() {
        // Bottom curve collinear with its own chord.
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        let curve = CubicBezier::from_line(a, b);
        let report = ConcavityAnalyzer::default().analyze(&curve, &a, &b).unwrap();
        assert!(report.depth.abs() < 1e-12, "depth={}", report.depth);
    }

    #[test]
    fn symmetric_bowl_depth_and_location() {
        // Symmetric cubic dipping below the chord: y(0.5) = 3/8 * (p1.y + p2.y),
        // so interior control points at -4d/3 give a peak depth of d.
        let d = 0.01;
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        let curve = CubicBezier::new(
            a,
            p(1.0 / 3.0, -4.0 * d / 3.0),
            p(2.0 / 3.0, -4.0 * d / 3.0),
            b,
        );
        let report = ConcavityAnalyzer::default().analyze(&curve, &a, &b).unwrap();
        assert!((report.depth - d).abs() < 1e-4, "depth={}", report.depth);
        // Arc length is ~1 for a shallow bowl over a unit chord, so the
        // normalized location sits near the middle.
        assert!(
            (report.location - 0.5).abs() < 0.01,
            "location={}",
            report.location
        );
    }

    #[test]
    fn first_sample_wins_on_flat_maximum() {
        // Every interior sample ties at exactly 0.5, so the reported x must
        // come from the first one, at t = 0.01.
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        let offset = ConstantOffsetCurve { offset: -0.5 };
        let report = ConcavityAnalyzer::default()
            .analyze(&offset, &a, &b)
            .unwrap();
        assert!((report.depth - 0.5).abs() < 1e-12, "depth={}", report.depth);
        // Arc length is exactly 1, so location is the first sample's t.
        assert!(
            (report.location - 0.01).abs() < 1e-9,
            "location={}",
            report.location
        );
    }

    #[test]
    fn zero_length_curve_yields_non_finite_location() {
        // Collapsed bottom curve against a valid chord: depth is still the
        // offset, but there is no arc length to normalize the location by.
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        let point_curve = CubicBezier::new(
            p(0.5, 0.3),
            p(0.5, 0.3),
            p(0.5, 0.3),
            p(0.5, 0.3),
        );
        let report = ConcavityAnalyzer::default()
            .analyze(&point_curve, &a, &b)
            .unwrap();
        assert!((report.depth - 0.3).abs() < 1e-12, "depth={}", report.depth);
        assert!(
            !report.location.is_finite(),
            "location={}",
            report.location
        );
    }

    #[test]
    fn degenerate_chord_is_an_error() {
        let a = p(1.0, 1.0);
        let curve = CubicBezier::from_line(p(0.0, 0.0), p(2.0, 0.0));
        let result = ConcavityAnalyzer::default().analyze(&curve, &a, &a);
        assert!(result.is_err());
    }
}
