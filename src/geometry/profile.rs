use std::fmt;

use crate::error::{ProfileError, Result};
use crate::geometry::curve::CubicBezier;
use crate::math::Point2;

/// Role of a curve segment within a cross-section profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveRole {
    /// Bottom curve, from the centerline out to the tucked rail.
    Bottom,
    /// Rail curve between the edge tangent and the deck-mid point.
    RailTangent,
    /// Deck curve inboard of the deck-mid point.
    Deck,
}

impl fmt::Display for CurveRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bottom => write!(f, "bottom"),
            Self::RailTangent => write!(f, "rail-tangent"),
            Self::Deck => write!(f, "deck"),
        }
    }
}

/// Index mapping from a raw section spline to profile roles.
///
/// Which spline point is the tucked rail (and so on) is a convention of the
/// upstream cross-section template, not a property of the geometry, so the
/// mapping is injected here rather than hardcoded. The default matches the
/// stock template: boundary points 0–3 are centerline, tucked rail, edge
/// tangent and deck mid; curves 0, 2 and 3 are bottom, rail-tangent and deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplineLayout {
    pub centerline: usize,
    pub tucked_rail: usize,
    pub edge_tangent: usize,
    pub deck_mid: usize,
    pub bottom_curve: usize,
    pub rail_tangent_curve: usize,
    pub deck_curve: usize,
}

impl Default for SplineLayout {
    fn default() -> Self {
        Self {
            centerline: 0,
            tucked_rail: 1,
            edge_tangent: 2,
            deck_mid: 3,
            bottom_curve: 0,
            rail_tangent_curve: 2,
            deck_curve: 3,
        }
    }
}

/// One transverse slice of the hull: named boundary points and the curve
/// segments between them.
///
/// The centerline→tucked-rail chord is the zero-concavity baseline for the
/// bottom curve; the rail-tangent and deck curves meet at the deck-mid point
/// by construction of the upstream cross-section.
#[derive(Debug, Clone)]
pub struct CrossSectionProfile {
    pub centerline: Point2,
    pub tucked_rail: Point2,
    pub edge_tangent: Point2,
    pub deck_mid: Point2,
    pub bottom: CubicBezier,
    pub rail_tangent: CubicBezier,
    pub deck: CubicBezier,
}

impl CrossSectionProfile {
    /// Builds a profile from a raw section spline using the given layout.
    ///
    /// `points` are the spline's boundary (control-point endpoint) positions
    /// and `curves` its segments, both in spline order.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if any layout index is outside the supplied
    /// spline.
    pub fn from_spline(
        points: &[Point2],
        curves: &[CubicBezier],
        layout: &SplineLayout,
    ) -> Result<Self> {
        let point = |role: &'static str, index: usize| -> Result<Point2> {
            points.get(index).copied().ok_or_else(|| {
                ProfileError::BoundaryPointOutOfRange {
                    role,
                    index,
                    count: points.len(),
                }
                .into()
            })
        };
        let curve = |role: &'static str, index: usize| -> Result<CubicBezier> {
            curves.get(index).copied().ok_or_else(|| {
                ProfileError::CurveOutOfRange {
                    role,
                    index,
                    count: curves.len(),
                }
                .into()
            })
        };

        Ok(Self {
            centerline: point("centerline", layout.centerline)?,
            tucked_rail: point("tucked rail", layout.tucked_rail)?,
            edge_tangent: point("edge tangent", layout.edge_tangent)?,
            deck_mid: point("deck mid", layout.deck_mid)?,
            bottom: curve("bottom", layout.bottom_curve)?,
            rail_tangent: curve("rail-tangent", layout.rail_tangent_curve)?,
            deck: curve("deck", layout.deck_curve)?,
        })
    }

    /// Returns the curve segment for the given role.
    #[must_use]
    pub fn curve(&self, role: CurveRole) -> &CubicBezier {
        match role {
            CurveRole::Bottom => &self.bottom,
            CurveRole::RailTangent => &self.rail_tangent,
            CurveRole::Deck => &self.deck,
        }
    }
}
