use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// Returns the minimum distance from point `p` to the line segment from `a` to `b`.
///
/// The point is projected onto the infinite line through `a` and `b`; when the
/// projection parameter falls outside `[0, 1]` the closest point is the nearer
/// segment endpoint.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateChord`] when `a` and `b` coincide. A
/// zero-length reference segment indicates malformed cross-section data, not a
/// recoverable runtime condition.
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> Result<f64> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        return Err(GeometryError::DegenerateChord { x: a.x, y: a.y }.into());
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let u = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    let u = u.clamp(0.0, 1.0);

    let closest_x = a.x + u * dx;
    let closest_y = a.y + u * dy;

    Ok(((p.x - closest_x).powi(2) + (p.y - closest_y).powi(2)).sqrt())
}
