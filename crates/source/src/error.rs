use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Operation not supported by this source: {0}")]
    Unsupported(&'static str),
    #[error("Failed to count records: {0}")]
    Count(String),
    #[error("Failed to fetch records: {0}")]
    Fetch(String),
}
