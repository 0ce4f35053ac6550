use tilecast_physics::V2;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CameraError {
    #[error("A camera needs at least one column")]
    ZeroColumns,

    #[error("Field of view must be finite and between 0 and 2pi radians, got {0}")]
    InvalidFieldOfView(f64),

    #[error("Camera direction must be finite and non-zero, got {0:?}")]
    InvalidDirection(V2),

    #[error("Unable to parse camera config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = CameraError> = std::result::Result<T, E>;
