//! Handing dates and date-times to and from storage layers.
//!
//! Storage drivers deal in a small set of loosely-typed values. A civil
//! value can be read from text, bytes, a timestamp, or nothing at all, and
//! is always written back as a UTC timestamp.

use std::convert::TryFrom;
use std::error::Error as ErrorTrait;
use std::fmt;

use log::debug;

use crate::cal::datetime::{Date, DateTime};
use crate::cal::encode::utf8;
use crate::cal::offset::OffsetDateTime;
use crate::cal::parse::{self, parse_date_time};


/// A loosely-typed value, as read from or written to a storage driver.
#[derive(PartialEq, Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(OffsetDateTime),
}

impl Value {

    /// The name of this kind of value, for error messages.
    pub fn kind(&self) -> &'static str {
        match *self {
            Value::Null          => "null",
            Value::Bool(_)       => "bool",
            Value::Int(_)        => "int",
            Value::Float(_)      => "float",
            Value::Text(_)       => "text",
            Value::Bytes(_)      => "bytes",
            Value::Timestamp(_)  => "timestamp",
        }
    }
}


impl DateTime {

    /// Reads a date-time from a storage value. Text and bytes are parsed,
    /// a timestamp keeps its wall clock, and null is the zero date-time.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civil::{DateTime, Value};
    ///
    /// let then = DateTime::scan(&Value::Text("2056-11-13 12:34:56.000".into())).unwrap();
    /// assert_eq!(then, DateTime::from_fields(2056, 11, 13, 12, 34, 56));
    ///
    /// assert!(DateTime::scan(&Value::Null).unwrap().is_zero());
    /// assert!(DateTime::scan(&Value::Int(7)).is_err());
    /// ```
    pub fn scan(source: &Value) -> Result<Self, ScanError> {
        match *source {
            Value::Text(ref text)       => parse_date_time(text).map_err(ScanError::Parse),
            Value::Bytes(ref bytes)     => utf8(bytes).and_then(parse_date_time).map_err(ScanError::Parse),
            Value::Timestamp(instant)   => Ok(Self::from_offset(&instant)),
            Value::Null                 => Ok(Self::default()),
            ref other => {
                debug!("Refusing to scan a {} value as a date-time", other.kind());
                Err(ScanError::Unsupported(other.kind()))
            },
        }
    }

    /// Returns the storage value for this date-time: a timestamp in UTC at
    /// the same wall clock.
    pub fn value(&self) -> Value {
        Value::Timestamp(OffsetDateTime::utc(*self))
    }
}

impl Date {

    /// Reads a date from a storage value, in the same way as
    /// `DateTime::scan`, keeping only the date.
    pub fn scan(source: &Value) -> Result<Self, ScanError> {
        DateTime::scan(source).map(|dt| dt.date())
    }

    /// Returns the storage value for this date: a timestamp in UTC at
    /// midnight.
    pub fn value(&self) -> Value {
        self.midnight().value()
    }
}

impl TryFrom<&Value> for DateTime {
    type Error = ScanError;

    fn try_from(source: &Value) -> Result<Self, Self::Error> {
        Self::scan(source)
    }
}

impl TryFrom<&Value> for Date {
    type Error = ScanError;

    fn try_from(source: &Value) -> Result<Self, Self::Error> {
        Self::scan(source)
    }
}

impl From<DateTime> for Value {
    fn from(dt: DateTime) -> Self {
        dt.value()
    }
}

impl From<Date> for Value {
    fn from(date: Date) -> Self {
        date.value()
    }
}


/// An error reading a civil value from a storage value.
#[derive(PartialEq, Debug, Clone)]
pub enum ScanError {

    /// The text or bytes could not be parsed.
    Parse(parse::Error),

    /// The value is of a kind that has no date in it.
    Unsupported(&'static str),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ScanError::Parse(ref e)        => write!(f, "{}", e),
            ScanError::Unsupported(kind)   => write!(f, "cannot convert {} value to a civil date", kind),
        }
    }
}

impl ErrorTrait for ScanError {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match *self {
            ScanError::Parse(ref e)     => Some(e),
            ScanError::Unsupported(_)   => None,
        }
    }
}
