use defscope_api::CollectError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Malformed candidate: {0}")]
    MalformedCandidate(String),
    #[error("Conflicting definitions: `{existing}` already captured, `{incoming}` also matched")]
    ConflictingDefinition { existing: String, incoming: String },
    #[error("Definition collection failed: {0}")]
    Collect(#[from] CollectError),
    #[error("Not a declaration: {0}")]
    UnknownDeclaration(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
