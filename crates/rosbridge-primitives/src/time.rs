//! The `time` primitive.
//!
//! Wire form: `{"secs": <int>, "nsecs": <int>}`. Both fields are optional on
//! input and always written on output.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::ParseError;
use crate::primitive::Primitive;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A point in time as seconds and nanoseconds since the Unix epoch.
///
/// Values are not normalized: `nanoseconds` is expected to stay within
/// `0..1_000_000_000` but constructors accept anything.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Time {
    secs: i32,
    nsecs: i32,
}

impl Time {
    pub const FIELD_SECS: &'static str = "secs";
    pub const FIELD_NSECS: &'static str = "nsecs";

    pub const fn new(secs: i32, nsecs: i32) -> Self {
        Self { secs, nsecs }
    }

    pub const fn from_seconds(secs: i32) -> Self {
        Self::new(secs, 0)
    }

    pub const fn seconds(&self) -> i32 {
        self.secs
    }

    pub const fn nanoseconds(&self) -> i32 {
        self.nsecs
    }

    /// Current system time relative to the Unix epoch.
    pub fn now() -> Self {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => Self::from(elapsed),
            Err(err) => {
                log::warn!(
                    "system clock reads {:?} before the unix epoch, using zero time",
                    err.duration()
                );
                Self::default()
            }
        }
    }

    /// Splits a nanosecond count into seconds and a remainder.
    ///
    /// Both parts truncate toward zero, so negative counts give negative
    /// parts. Seconds saturate at the `i32` bounds.
    pub fn from_elapsed_nanoseconds(nanos: i64) -> Self {
        let secs = nanos / NANOS_PER_SEC;
        let nsecs = (nanos % NANOS_PER_SEC) as i32;
        Self::new(saturate_secs(secs), nsecs)
    }

    /// Floating-point split matching timestamps written by older clients.
    ///
    /// Loses exactness once `nanos` exceeds 2^53. Prefer
    /// [`Time::from_elapsed_nanoseconds`] unless reproducing legacy data.
    pub fn from_elapsed_nanoseconds_f64(nanos: i64) -> Self {
        let conversion = nanos as f64 / NANOS_PER_SEC as f64;
        let secs = conversion as i32;
        let nsecs = ((conversion - f64::from(secs)) * NANOS_PER_SEC as f64) as i32;
        Self::new(secs, nsecs)
    }

    pub fn to_nanoseconds(&self) -> i64 {
        i64::from(self.secs) * NANOS_PER_SEC + i64::from(self.nsecs)
    }

    /// Calendar instant for this time. Out-of-range nanoseconds carry into
    /// the seconds.
    #[cfg(feature = "chrono")]
    pub fn to_date(&self) -> chrono::DateTime<chrono::Utc> {
        chrono::DateTime::from_timestamp_nanos(self.to_nanoseconds())
    }
}

fn saturate_secs(secs: i64) -> i32 {
    i32::try_from(secs).unwrap_or(if secs < 0 { i32::MIN } else { i32::MAX })
}

fn read_field(object: &Map<String, Value>, field: &'static str) -> Result<i32, ParseError> {
    let Some(value) = object.get(field) else {
        log::trace!("time field `{field}` absent, defaulting to 0");
        return Ok(0);
    };
    let Value::Number(number) = value else {
        return Err(ParseError::NotAnInteger { field });
    };
    match number.as_i64() {
        Some(n) => i32::try_from(n).map_err(|_| ParseError::OutOfRange {
            field,
            value: n.to_string(),
        }),
        None if number.is_u64() => Err(ParseError::OutOfRange {
            field,
            value: number.to_string(),
        }),
        None => Err(ParseError::NotAnInteger { field }),
    }
}

impl Primitive for Time {
    const TYPE: &'static str = "time";

    fn to_json_object(&self) -> Map<String, Value> {
        let mut m = Map::new();
        m.insert(Self::FIELD_SECS.into(), Value::Number(Number::from(self.secs)));
        m.insert(Self::FIELD_NSECS.into(), Value::Number(Number::from(self.nsecs)));
        m
    }

    fn from_json_object(object: &Map<String, Value>) -> Result<Self, ParseError> {
        let secs = read_field(object, Self::FIELD_SECS)?;
        let nsecs = read_field(object, Self::FIELD_NSECS)?;
        Ok(Self::new(secs, nsecs))
    }
}

impl From<Duration> for Time {
    /// Treats the duration as time elapsed since the epoch.
    fn from(elapsed: Duration) -> Self {
        let nanos = i64::try_from(elapsed.as_nanos()).unwrap_or(i64::MAX);
        Self::from_elapsed_nanoseconds(nanos)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.secs, self.nsecs)
    }
}
