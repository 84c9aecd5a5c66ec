use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Failed to encode query string: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}
