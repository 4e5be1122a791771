use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("invalid json: {0}")]
    InvalidJson(String),
    #[error("message must be a json object")]
    NotAnObject,
}

impl From<serde_json::Error> for MessageError {
    fn from(err: serde_json::Error) -> Self {
        MessageError::InvalidJson(err.to_string())
    }
}
