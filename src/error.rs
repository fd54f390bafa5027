use thiserror::Error;

/// Top-level error type for the polychain crate.
#[derive(Debug, Error)]
pub enum PolychainError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to resolving points in a store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("point not found: {0}")]
    PointNotFound(String),
}

/// Convenience type alias for results using [`PolychainError`].
pub type Result<T> = std::result::Result<T, PolychainError>;
