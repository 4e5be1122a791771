use rosbridge_messages::MessageError;
use thiserror::Error;

/// Failure to read a primitive from JSON text or a JSON value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid json: {0}")]
    InvalidJson(String),
    #[error("primitive must be a json object")]
    NotAnObject,
    #[error("field `{field}` must be an integer")]
    NotAnInteger { field: &'static str },
    #[error("field `{field}` is out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
}

impl From<MessageError> for ParseError {
    fn from(err: MessageError) -> Self {
        match err {
            MessageError::InvalidJson(msg) => ParseError::InvalidJson(msg),
            MessageError::NotAnObject => ParseError::NotAnObject,
        }
    }
}
