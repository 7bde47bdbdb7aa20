use stargaze_core::AstroError;
use thiserror::Error;

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    #[error("Invalid coordinate: {source}")]
    InvalidCoordinate {
        #[from]
        source: AstroError,
    },
}
