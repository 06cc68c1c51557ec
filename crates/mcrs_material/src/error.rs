use mcrs_protocol::BlockId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("family {0} produced no variants")]
    EmptyFamily(&'static str),
    #[error("unknown family {0}")]
    UnknownFamily(String),
    #[error("family {0} is already registered")]
    DuplicateFamily(String),
    #[error("block id {block_id} is already used by {family}")]
    DuplicateBlockId { block_id: BlockId, family: String },
    #[error("family {family} has no variant with data value {code}")]
    UnknownCode { family: String, code: u8 },
    #[error("failed to read content overrides: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed content overrides: {0}")]
    Json(#[from] serde_json::Error),
}
