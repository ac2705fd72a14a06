use thiserror::Error;

/// Lookup errors
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Dataset corruption: {0}")]
    DatasetCorruption(#[from] geotz_data::DatasetError),

    #[error(transparent)]
    InvalidCoordinate(#[from] geotz_core::CoreError),
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;
