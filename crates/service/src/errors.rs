use thiserror::Error;

/// Storage failures. A record that simply is not there is expressed as
/// `Option::None` by the stores, not as an error.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage read error: {0}")]
    StorageRead(String),
    #[error("storage write error: {0}")]
    StorageWrite(String),
}
