use tracing::debug;

use crate::error::Result;
use crate::geometry::profile::CrossSectionProfile;
use crate::math::Point2;
use crate::operations::concavity::ConcavityAnalyzer;
use crate::operations::guides::{GuideSampler, GuideTarget};

/// Read-only view of a loaded hull model.
///
/// The single consistent unit system is the implementor's responsibility; the
/// sweep performs no unit conversion. Longitudinal coordinates are measured
/// from the tail datum.
pub trait HullModel {
    /// Total straight length of the hull.
    fn total_length(&self) -> f64;

    /// Full section width at the given longitudinal coordinate.
    fn width_at(&self, coordinate: f64) -> f64;

    /// Bottom elevation at the given longitudinal coordinate and lateral
    /// offset from the centerline.
    fn bottom_elevation_at(&self, coordinate: f64, lateral_offset: f64) -> f64;

    /// Section thickness at the given longitudinal coordinate.
    fn thickness_at(&self, coordinate: f64) -> f64;

    /// Interpolated cross-section profile at the given longitudinal
    /// coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if a profile cannot be assembled at the coordinate.
    fn cross_section_at(&self, coordinate: f64) -> Result<CrossSectionProfile>;
}

/// Measurements for one longitudinal station.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRecord {
    /// Signed station position, relative to the hull's mid-length.
    pub position: f64,
    /// Full section width.
    pub width: f64,
    /// Section thickness.
    pub thickness: f64,
    /// Vee height: y of the tucked-rail boundary point.
    pub vee_height: f64,
    /// Maximum bottom-curve deviation from the centerline→tucked-rail chord.
    pub concave_depth: f64,
    /// Normalized location of the deepest point along the bottom curve.
    pub concave_factor: f64,
    /// Y difference between the edge-tangent and tucked-rail points.
    pub edge_tangent_height: f64,
    /// Bottom elevation on the centerline.
    pub bottom_elevation: f64,
    /// One guide point per configured target, in target order.
    pub guide_points: Vec<Point2>,
}

/// Aligned measurement table produced by a sweep: one record per configured
/// station, in configuration order.
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub records: Vec<SampleRecord>,
    pub guide_targets: Vec<GuideTarget>,
}

/// Runs single-slice analysis across a fixed set of longitudinal stations.
#[derive(Debug, Clone)]
pub struct ProfileSweep {
    positions: Vec<f64>,
    analyzer: ConcavityAnalyzer,
    sampler: GuideSampler,
}

impl ProfileSweep {
    /// Creates a sweep over the given station fractions and guide targets.
    ///
    /// Station fractions are in `[-1, 1]` relative to the hull's mid-length;
    /// their order (nose-to-tail or the reverse) is the caller's choice and is
    /// preserved in the result.
    #[must_use]
    pub fn new(positions: Vec<f64>, guide_targets: Vec<GuideTarget>) -> Self {
        Self {
            positions,
            analyzer: ConcavityAnalyzer::default(),
            sampler: GuideSampler::new(guide_targets),
        }
    }

    /// The stock measurement template: 11 stations from nose to tail and
    /// guide fractions 0.80, 0.60 and 0.30 of the half-width.
    #[must_use]
    pub fn default_template() -> Self {
        Self::new(
            vec![
                0.9999, 0.92, 0.78, 0.60, 0.32, 0.0, -0.32, -0.60, -0.78, -0.92, -0.9999,
            ],
            vec![
                GuideTarget::new(0.80),
                GuideTarget::new(0.60),
                GuideTarget::new(0.30),
            ],
        )
    }

    /// Returns the configured station fractions.
    #[must_use]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Analyzes the hull at every configured station and assembles the
    /// result table, one record per station in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if a cross-section cannot be built, its reference
    /// chord is degenerate, or a curve query fails.
    pub fn run(&self, hull: &impl HullModel) -> Result<SweepResult> {
        let half_length = hull.total_length() / 2.0;
        let mut records = Vec::with_capacity(self.positions.len());

        for &fraction in &self.positions {
            let station = half_length * fraction;
            let coordinate = half_length + station;

            let width = hull.width_at(coordinate);
            let thickness = hull.thickness_at(coordinate);
            let bottom_elevation = hull.bottom_elevation_at(coordinate, 0.0);
            let profile = hull.cross_section_at(coordinate)?;

            let concavity = self.analyzer.analyze(
                &profile.bottom,
                &profile.centerline,
                &profile.tucked_rail,
            )?;
            let guide_points = self.sampler.sample(&profile, width / 2.0, thickness)?;

            debug!(
                station,
                width,
                thickness,
                depth = concavity.depth,
                "analyzed cross-section"
            );

            records.push(SampleRecord {
                position: station,
                width,
                thickness,
                vee_height: profile.tucked_rail.y,
                concave_depth: concavity.depth,
                concave_factor: concavity.location,
                edge_tangent_height: profile.edge_tangent.y - profile.tucked_rail.y,
                bottom_elevation,
                guide_points,
            });
        }

        Ok(SweepResult {
            records,
            guide_targets: self.sampler.targets().to_vec(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::CubicBezier;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    /// Hull stub returning the same cross-section everywhere.
    struct UniformHull {
        length: f64,
        width: f64,
        thickness: f64,
        concave: f64,
    }

    impl UniformHull {
        fn profile(&self) -> CrossSectionProfile {
            let half_width = self.width / 2.0;
            let centerline = p(0.0, 0.0);
            let tucked_rail = p(half_width, 0.0);
            // Symmetric bowl below the chord with peak depth `concave`.
            let bottom = CubicBezier::new(
                centerline,
                p(half_width / 3.0, -4.0 * self.concave / 3.0),
                p(2.0 * half_width / 3.0, -4.0 * self.concave / 3.0),
                tucked_rail,
            );
            let edge_tangent = p(half_width + 0.5, 2.0);
            let deck_mid = p(half_width * 0.55, self.thickness - 1.0);
            CrossSectionProfile {
                centerline,
                tucked_rail,
                edge_tangent,
                deck_mid,
                bottom,
                rail_tangent: CubicBezier::from_line(edge_tangent, deck_mid),
                deck: CubicBezier::from_line(deck_mid, p(0.0, self.thickness - 1.0)),
            }
        }
    }

    impl HullModel for UniformHull {
        fn total_length(&self) -> f64 {
            self.length
        }

        fn width_at(&self, _coordinate: f64) -> f64 {
            self.width
        }

        fn bottom_elevation_at(&self, _coordinate: f64, _lateral_offset: f64) -> f64 {
            0.0
        }

        fn thickness_at(&self, _coordinate: f64) -> f64 {
            self.thickness
        }

        fn cross_section_at(&self, _coordinate: f64) -> Result<CrossSectionProfile> {
            Ok(self.profile())
        }
    }

    #[test]
    fn flat_bottomed_hull_reports_no_concave() {
        let hull = UniformHull {
            length: 1800.0,
            width: 480.0,
            thickness: 60.0,
            concave: 0.0,
        };
        let sweep = ProfileSweep::new(vec![0.0], vec![GuideTarget::new(0.3)]);
        let result = sweep.run(&hull).unwrap();
        assert_eq!(result.records.len(), 1);
        assert!(
            result.records[0].concave_depth.abs() < 1e-9,
            "depth={}",
            result.records[0].concave_depth
        );
    }

    #[test]
    fn uniform_hull_yields_identical_records_except_position() {
        let hull = UniformHull {
            length: 1800.0,
            width: 480.0,
            thickness: 60.0,
            concave: 3.0,
        };
        let sweep = ProfileSweep::new(
            vec![0.6, 0.0, -0.6],
            vec![GuideTarget::new(0.8), GuideTarget::new(0.3)],
        );
        let result = sweep.run(&hull).unwrap();
        assert_eq!(result.records.len(), 3);

        let positions: Vec<f64> = result.records.iter().map(|r| r.position).collect();
        let expected = [540.0, 0.0, -540.0];
        for (got, want) in positions.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "positions={positions:?}");
        }

        let first = &result.records[0];
        for record in &result.records[1..] {
            assert_eq!(record.width, first.width);
            assert_eq!(record.thickness, first.thickness);
            assert_eq!(record.vee_height, first.vee_height);
            assert_eq!(record.concave_depth, first.concave_depth);
            assert_eq!(record.concave_factor, first.concave_factor);
            assert_eq!(record.edge_tangent_height, first.edge_tangent_height);
            assert_eq!(record.bottom_elevation, first.bottom_elevation);
            assert_eq!(record.guide_points, first.guide_points);
        }
    }

    #[test]
    fn record_fields_come_from_the_profile() {
        let hull = UniformHull {
            length: 2000.0,
            width: 500.0,
            thickness: 64.0,
            concave: 2.0,
        };
        let sweep = ProfileSweep::new(vec![0.0], vec![GuideTarget::new(0.3)]);
        let record = sweep.run(&hull).unwrap().records.remove(0);
        let profile = hull.profile();

        assert_eq!(record.vee_height, profile.tucked_rail.y);
        assert_eq!(
            record.edge_tangent_height,
            profile.edge_tangent.y - profile.tucked_rail.y
        );
        assert!(
            (record.concave_depth - 2.0).abs() < 1e-3,
            "depth={}",
            record.concave_depth
        );
        assert_eq!(record.guide_points.len(), 1);
    }

    #[test]
    fn default_template_shape() {
        let sweep = ProfileSweep::default_template();
        assert_eq!(sweep.positions().len(), 11);
        assert_eq!(sweep.positions()[0], 0.9999);
        assert_eq!(sweep.positions()[10], -0.9999);
    }
}
