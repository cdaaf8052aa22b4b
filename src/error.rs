use thiserror::Error;

/// Errors reported by the checked geometry constructors.
///
/// The unchecked kernel never fails: degenerate input is signaled through
/// sentinel values or propagates as non-finite numbers. Only the `try_*`
/// functions and [`Polygon::new`](crate::geometry::Polygon::new) produce these.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("planes do not meet at a single point")]
    SingularPlanes,

    #[error("line is parallel to the plane")]
    ParallelLine,
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
