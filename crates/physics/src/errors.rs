#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ColliderError {
    #[error("Attempted to create a circle with a negative or NaN radius {0}")]
    NegativeRadius(f64),

    #[error("Attempted to create an AABB with negative or NaN half extents ({0}, {1})")]
    NegativeHalfExtents(f64, f64),

    #[error("Attempted to create an AABB whose first corner is not below and left of the second")]
    InvalidDims,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Collider error: {}", _0)]
    Collider(#[from] ColliderError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
