//! Text, JSON, and binary encodings of civil dates and date-times.
//!
//! Text is the canonical ISO form. JSON is that text in double quotes.
//! Binary is the encoding of the same wall clock as an instant in UTC, so
//! it can be read by anything that reads `OffsetDateTime` bytes.

use std::str;

use crate::cal::datetime::{Date, DateTime};
use crate::cal::fmt::ISO;
use crate::cal::offset::{OffsetDateTime, BinaryError};
use crate::cal::parse::{parse_date_time, Error, Malformed};


/// Reads bytes as UTF-8 text for the parser.
pub(crate) fn utf8(bytes: &[u8]) -> Result<&str, Error> {
    str::from_utf8(bytes).map_err(|_| Error::Format(Malformed::NotUtf8))
}

/// Strips the double quotes from around a JSON string.
fn unquote(json: &[u8]) -> Result<&str, Error> {
    let json = utf8(json)?.trim();
    if json.len() >= 2 && json.starts_with('"') && json.ends_with('"') {
        Ok(&json[1 .. json.len() - 1])
    }
    else {
        Err(Error::Format(Malformed::Unquoted))
    }
}


impl DateTime {

    /// Returns the canonical text form, `YYYY-MM-DDTHH:MM:SS`.
    pub fn to_text(&self) -> String {
        self.iso().to_string()
    }

    /// Reads a date-time from any text the parser accepts.
    pub fn from_text(text: &[u8]) -> Result<Self, Error> {
        parse_date_time(utf8(text)?)
    }

    /// Returns the canonical text form as a JSON string.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civil::DateTime;
    ///
    /// let then = DateTime::from_fields(2056, 9, 30, 1, 2, 3);
    /// assert_eq!(then.to_json(), r#""2056-09-30T01:02:03""#);
    /// ```
    pub fn to_json(&self) -> String {
        format!("\"{}\"", self.iso())
    }

    /// Reads a date-time from a JSON string holding any text the parser
    /// accepts.
    pub fn from_json(json: &[u8]) -> Result<Self, Error> {
        parse_date_time(unquote(json)?)
    }

    /// Encodes this date-time as a UTC instant in the binary layout of
    /// `OffsetDateTime::to_binary`.
    pub fn to_binary(&self) -> Result<Vec<u8>, BinaryError> {
        OffsetDateTime::utc(*self).to_binary()
    }

    /// Decodes an instant in binary form, keeping its wall clock and
    /// dropping its offset.
    pub fn from_binary(data: &[u8]) -> Result<Self, BinaryError> {
        OffsetDateTime::from_binary(data).map(|instant| instant.local())
    }
}


impl Date {

    /// Returns the canonical text form, `YYYY-MM-DD`.
    pub fn to_text(&self) -> String {
        self.iso().to_string()
    }

    /// Reads a date from any text the parser accepts.
    pub fn from_text(text: &[u8]) -> Result<Self, Error> {
        parse_date_time(utf8(text)?).map(|dt| dt.date())
    }

    /// Returns the canonical text form as a JSON string.
    pub fn to_json(&self) -> String {
        format!("\"{}\"", self.iso())
    }

    /// Reads a date from a JSON string holding any text the parser accepts.
    pub fn from_json(json: &[u8]) -> Result<Self, Error> {
        parse_date_time(unquote(json)?).map(|dt| dt.date())
    }

    /// Encodes midnight at the start of this date as a UTC instant.
    pub fn to_binary(&self) -> Result<Vec<u8>, BinaryError> {
        self.midnight().to_binary()
    }

    /// Decodes an instant in binary form, keeping the date of its wall
    /// clock.
    pub fn from_binary(data: &[u8]) -> Result<Self, BinaryError> {
        DateTime::from_binary(data).map(|dt| dt.date())
    }
}
