//! rosbridge-messages - generic JSON message wrapper.
//!
//! Every payload exchanged over a rosbridge connection is a JSON object. A
//! [`Message`] keeps that object together with an optional message type
//! string (for example `"std_msgs/String"` or `"time"`).

mod error;
mod message;

pub use error::MessageError;
pub use message::Message;
