use thiserror::Error;

/// Reasons a set of control points cannot describe a Bézier curve or surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BezierError {
    #[error("a Bézier curve needs at least one control point")]
    NoControlPoints,

    #[error("expected {expected} control points, found {found}")]
    PointCount { expected: usize, found: usize },

    #[error("a Bézier surface needs at least one row of control points")]
    EmptyGrid,

    #[error("row {row} of the control grid is empty")]
    EmptyRow { row: usize },

    #[error("row {row} of the control grid has {found} points, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, BezierError>;
