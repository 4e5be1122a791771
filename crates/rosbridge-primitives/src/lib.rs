//! rosbridge-primitives - primitive value types embedded in rosbridge
//! messages.
//!
//! A primitive is a small value that renders itself as a JSON object tagged
//! with a type name (see [`Primitive`]). [`Time`] is the `time` primitive:
//! integer seconds and nanoseconds since the Unix epoch.
//!
//! ```
//! use rosbridge_primitives::{Primitive, Time};
//!
//! let t = Time::parse(r#"{"secs": 12, "nsecs": 500}"#).unwrap();
//! assert_eq!(t, Time::new(12, 500));
//! assert_eq!(t.to_json_string(), r#"{"secs":12,"nsecs":500}"#);
//! ```

mod error;
mod primitive;
mod time;

pub use error::ParseError;
pub use primitive::Primitive;
pub use time::Time;

pub use rosbridge_messages::Message;
