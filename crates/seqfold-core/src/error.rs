use thiserror::Error;

/// Canonical result for seqfold.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The operation needs at least one element (sum, product, min/max, random).
    #[error("{op} requires a non-empty sequence")]
    EmptyInput { op: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
