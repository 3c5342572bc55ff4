use thiserror::Error;

#[derive(Debug, Error)]
pub enum DraftEngineError {
    #[error("unknown pokemon type: {0}")]
    UnknownType(String),

    #[error("unknown draft status: {0}")]
    UnknownDraftStatus(String),

    #[error("unknown draft order type: {0}")]
    UnknownDraftOrderType(String),

    #[error("malformed draft snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DraftEngineError>;
