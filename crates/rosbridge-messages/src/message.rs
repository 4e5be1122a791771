use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::MessageError;

/// A JSON object paired with a message type.
///
/// The type is the empty string when the message is untyped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    json: Map<String, Value>,
    message_type: String,
}

impl Message {
    pub const EMPTY_MESSAGE_TYPE: &'static str = "";

    /// An empty, untyped message (`{}`).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_object(json: Map<String, Value>) -> Self {
        Self::with_type(json, Self::EMPTY_MESSAGE_TYPE)
    }

    pub fn with_type(json: Map<String, Value>, message_type: impl Into<String>) -> Self {
        Self {
            json,
            message_type: message_type.into(),
        }
    }

    /// Wraps an arbitrary JSON value, rejecting anything but an object.
    pub fn from_json_value(value: Value) -> Result<Self, MessageError> {
        match value {
            Value::Object(json) => Ok(Self::from_json_object(json)),
            _ => Err(MessageError::NotAnObject),
        }
    }

    /// Parses JSON text into an untyped message.
    pub fn parse(text: &str) -> Result<Self, MessageError> {
        let value: Value = serde_json::from_str(text).map_err(|err| {
            log::debug!("rejecting message text: {err}");
            MessageError::from(err)
        })?;
        Self::from_json_value(value)
    }

    pub fn parse_with_type(
        text: &str,
        message_type: impl Into<String>,
    ) -> Result<Self, MessageError> {
        let mut message = Self::parse(text)?;
        message.message_type = message_type.into();
        Ok(message)
    }

    pub fn json_object(&self) -> &Map<String, Value> {
        &self.json
    }

    pub fn into_json_object(self) -> Map<String, Value> {
        self.json
    }

    pub fn to_json_value(&self) -> Value {
        Value::Object(self.json.clone())
    }

    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    pub fn set_message_type(&mut self, message_type: impl Into<String>) {
        self.message_type = message_type.into();
    }

    /// Compact JSON text of the object. The type is not part of the text.
    pub fn to_json_string(&self) -> String {
        // Serializing a map of `Value`s cannot fail.
        serde_json::to_string(&self.json).unwrap_or_else(|_| "{}".to_string())
    }
}

impl FromStr for Message {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_keeps_field_order() {
        let m = Message::parse(r#"{"b":1,"a":2}"#).unwrap();
        let keys: Vec<&str> = m.json_object().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(m.to_json_string(), r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn non_object_documents_are_rejected() {
        assert_eq!(Message::parse("42"), Err(MessageError::NotAnObject));
        assert_eq!(Message::parse("[1,2]"), Err(MessageError::NotAnObject));
        assert_eq!(
            Message::from_json_value(json!(null)),
            Err(MessageError::NotAnObject)
        );
    }

    #[test]
    fn invalid_text_carries_the_parser_message() {
        match Message::parse("{\"a\":") {
            Err(MessageError::InvalidJson(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected InvalidJson, got {other:?}"),
        }
    }
}
