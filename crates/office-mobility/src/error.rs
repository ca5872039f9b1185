use office_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("walk speed must be finite and positive, got {0}")]
    InvalidSpeed(f32),

    #[error("path has {len} node(s); nothing to walk")]
    PathTooShort { len: usize },

    #[error("path search failed: {0}")]
    Routing(#[from] SpatialError),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
