use thiserror::Error;

/// Top-level error type for the hullscan analysis engine.
#[derive(Debug, Error)]
pub enum HullscanError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Errors related to curve evaluation and chord measurements.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate reference chord: both endpoints at ({x}, {y})")]
    DegenerateChord { x: f64, y: f64 },
}

/// Errors related to cross-section profile construction.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(
        "boundary point index {index} for the {role} point is out of range (spline has {count} points)"
    )]
    BoundaryPointOutOfRange {
        role: &'static str,
        index: usize,
        count: usize,
    },

    #[error("curve index {index} for the {role} segment is out of range (spline has {count} curves)")]
    CurveOutOfRange {
        role: &'static str,
        index: usize,
        count: usize,
    },
}

/// Convenience type alias for results using [`HullscanError`].
pub type Result<T> = std::result::Result<T, HullscanError>;
