#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("definition has no source span: {0}")]
    MissingSpan(String),
    #[error("span {start}..{end} is outside the source of {path}")]
    SpanOutOfBounds {
        path: String,
        start: usize,
        end: usize,
    },
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CollectResult<T> = std::result::Result<T, CollectError>;
