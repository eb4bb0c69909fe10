use crate::error::Result;
use crate::geometry::curve::Curve;
use crate::geometry::profile::{CrossSectionProfile, CurveRole};
use crate::math::Point2;

/// A guide-point target, expressed as a fraction of the section half-width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideTarget {
    pub fraction: f64,
}

impl GuideTarget {
    /// Creates a new target at the given fraction of the half-width.
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        Self { fraction }
    }
}

/// Samples guide points along the deck/rail boundary at fixed fractions of
/// the section half-width, for manual downstream calibration.
#[derive(Debug, Clone)]
pub struct GuideSampler {
    targets: Vec<GuideTarget>,
}

impl GuideSampler {
    /// Creates a sampler for the given ordered targets.
    #[must_use]
    pub fn new(targets: Vec<GuideTarget>) -> Self {
        Self { targets }
    }

    /// Returns the configured targets, in sampling order.
    #[must_use]
    pub fn targets(&self) -> &[GuideTarget] {
        &self.targets
    }

    /// Computes one guide point per target, in target order.
    ///
    /// Each target x is `half_width * fraction`. Targets at or outboard of the
    /// deck-mid point's x are inverted on the rail-tangent curve, the rest on
    /// the deck curve; the two families meet at the deck-mid point by
    /// construction of the upstream cross-section, so this crossover follows
    /// the surface description. The reported y is `thickness - curve_y`, the
    /// height down from the top of the board at that width.
    ///
    /// # Errors
    ///
    /// Returns an error if curve evaluation fails.
    pub fn sample(
        &self,
        profile: &CrossSectionProfile,
        half_width: f64,
        thickness: f64,
    ) -> Result<Vec<Point2>> {
        let mut points = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            let target_x = half_width * target.fraction;
            let role = if target_x >= profile.deck_mid.x {
                CurveRole::RailTangent
            } else {
                CurveRole::Deck
            };
            let curve = profile.curve(role);
            let t = curve.parameter_for_x(target_x)?;
            let y = curve.evaluate(t)?.y;
            points.push(Point2::new(target_x, thickness - y));
        }
        Ok(points)
    }
}
