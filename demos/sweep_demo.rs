//! Runs the stock measurement template against a synthetic hull and prints
//! the resulting table.
//!
//! ```text
//! cargo run --example sweep_demo
//! ```

use hullscan::geometry::curve::CubicBezier;
use hullscan::geometry::profile::CrossSectionProfile;
use hullscan::math::Point2;
use hullscan::operations::sweep::{HullModel, ProfileSweep};
use hullscan::Result;

/// Synthetic shortboard-ish hull, all values in millimetres.
struct DemoHull {
    length: f64,
    max_width: f64,
    max_thickness: f64,
}

impl DemoHull {
    /// Fraction of the mid-length, -1 at the tail datum, +1 at the nose.
    fn fraction(&self, coordinate: f64) -> f64 {
        let half = self.length / 2.0;
        ((coordinate - half) / half).clamp(-1.0, 1.0)
    }
}

impl HullModel for DemoHull {
    fn total_length(&self) -> f64 {
        self.length
    }

    fn width_at(&self, coordinate: f64) -> f64 {
        let f = self.fraction(coordinate);
        self.max_width * (1.0 - 0.9 * f * f).sqrt()
    }

    fn bottom_elevation_at(&self, coordinate: f64, _lateral_offset: f64) -> f64 {
        let f = self.fraction(coordinate);
        // Gentle rocker: lifts toward nose and tail.
        25.0 * f * f
    }

    fn thickness_at(&self, coordinate: f64) -> f64 {
        let f = self.fraction(coordinate);
        self.max_thickness * (0.35 + 0.65 * (1.0 - f * f).sqrt())
    }

    fn cross_section_at(&self, coordinate: f64) -> Result<CrossSectionProfile> {
        let half_width = self.width_at(coordinate) / 2.0;
        let thickness = self.thickness_at(coordinate);

        let centerline = Point2::new(0.0, 0.0);
        let tucked_rail = Point2::new(half_width, 1.5);
        let edge_tangent = Point2::new(half_width + 2.0, 8.0);
        let deck_mid = Point2::new(half_width * 0.55, thickness - 4.0);

        // Slight single concave in the bottom, deepest mid-chord.
        let dip = -2.5;
        let bottom = CubicBezier::new(
            centerline,
            Point2::new(half_width / 3.0, dip),
            Point2::new(2.0 * half_width / 3.0, dip + 0.5),
            tucked_rail,
        );
        let rail_tangent = CubicBezier::from_line(edge_tangent, deck_mid);
        let deck = CubicBezier::new(
            deck_mid,
            Point2::new(half_width * 0.35, thickness),
            Point2::new(half_width * 0.15, thickness),
            Point2::new(0.0, thickness),
        );

        Ok(CrossSectionProfile {
            centerline,
            tucked_rail,
            edge_tangent,
            deck_mid,
            bottom,
            rail_tangent,
            deck,
        })
    }
}

fn print_row(label: &str, values: impl Iterator<Item = f64>) {
    print!("{label:>16}");
    for v in values {
        print!(" {v:>8.1}");
    }
    println!();
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hullscan=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let hull = DemoHull {
        length: 1830.0,
        max_width: 470.0,
        max_thickness: 60.0,
    };

    let sweep = ProfileSweep::default_template();
    let result = sweep.run(&hull)?;
    let records = &result.records;

    print_row("position", records.iter().map(|r| r.position));
    print_row("width", records.iter().map(|r| r.width));
    print_row("thickness", records.iter().map(|r| r.thickness));
    print_row("vee", records.iter().map(|r| r.vee_height));
    print_row("concave", records.iter().map(|r| r.concave_depth));
    print_row("edge height", records.iter().map(|r| r.edge_tangent_height));
    print_row("bottom line", records.iter().map(|r| r.bottom_elevation));

    for (i, target) in result.guide_targets.iter().enumerate() {
        let x_label = format!("guide x{} ({:.2})", i + 1, target.fraction);
        let y_label = format!("guide y{} ({:.2})", i + 1, target.fraction);
        print_row(&x_label, records.iter().map(|r| r.guide_points[i].x));
        print_row(&y_label, records.iter().map(|r| r.guide_points[i].y));
    }

    Ok(())
}
