use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
