use thiserror::Error;

/// Top-level error type for outline computation.
#[derive(Debug, Error)]
pub enum OutlinerError {
    #[error(transparent)]
    Outline(#[from] OutlineError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Curve(#[from] CurveError),
}

/// Errors raised while computing a silhouette outline.
#[derive(Debug, Error, PartialEq)]
pub enum OutlineError {
    #[error("missing input: {0}")]
    MissingInput(String),

    #[error("insufficient points: need at least 3 distinct points, found {found}")]
    InsufficientPoints { found: usize },

    #[error("degenerate projection: all screen points are collinear")]
    DegenerateProjection,

    /// `index` is the input vertex index when raised by the outline
    /// computation, or the slice position when raised by sphere re-projection.
    #[error("point {index} coincides with the eye point")]
    ZeroDistanceToEye { index: usize },
}

/// Errors related to geometric inputs and projections.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("invalid point: {0}")]
    InvalidPoint(String),

    #[error("point lies at or behind the camera")]
    BehindCamera,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to curve assembly and the curve host.
#[derive(Debug, Error, PartialEq)]
pub enum CurveError {
    #[error("a curve needs at least 2 points, found {found}")]
    TooFewPoints { found: usize },

    #[error("curve host failed: {0}")]
    Host(String),
}

/// Convenience type alias for results using [`OutlinerError`].
pub type Result<T> = std::result::Result<T, OutlinerError>;
