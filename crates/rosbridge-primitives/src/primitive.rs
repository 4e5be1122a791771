use rosbridge_messages::Message;
use serde_json::{Map, Value};

use crate::error::ParseError;

/// A value type with a JSON object representation and a type tag.
///
/// Implementors provide the object codec; text and [`Message`] handling are
/// shared.
pub trait Primitive: Sized {
    /// Type tag carried by [`Primitive::to_message`].
    const TYPE: &'static str;

    fn to_json_object(&self) -> Map<String, Value>;

    /// Reads the primitive from its object form. Missing fields take their
    /// defaults.
    fn from_json_object(object: &Map<String, Value>) -> Result<Self, ParseError>;

    fn to_json_value(&self) -> Value {
        Value::Object(self.to_json_object())
    }

    fn from_json_value(value: &Value) -> Result<Self, ParseError> {
        let object = value.as_object().ok_or(ParseError::NotAnObject)?;
        Self::from_json_object(object)
    }

    fn to_json_string(&self) -> String {
        self.to_message().to_json_string()
    }

    fn to_message(&self) -> Message {
        Message::with_type(self.to_json_object(), Self::TYPE)
    }

    /// Reads the primitive from a message. The message type is not checked.
    fn from_message(message: &Message) -> Result<Self, ParseError> {
        Self::from_json_object(message.json_object())
    }

    fn parse(text: &str) -> Result<Self, ParseError> {
        let message = Message::parse(text)?;
        Self::from_message(&message)
    }
}
