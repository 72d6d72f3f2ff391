//! Date-times with a fixed UTC offset, and their binary encoding.
//!
//! An `OffsetDateTime` is the one zoned value in this library: it pins a
//! wall-clock date-time to an instant by pairing it with an offset from
//! UTC. The civil types convert to and from it by keeping the wall clock
//! and dropping the offset.

use std::error::Error as ErrorTrait;
use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::calendar::{Month, Weekday, Error as DateTimeError};
use crate::cal::datetime::DateTime;
use crate::cal::fmt::ISO;


/// Number of seconds between **midnight, 1st January, year 1** and the Unix
/// epoch. The binary encoding counts from the former.
const UNIX_TO_INTERNAL: i64 = 62_135_596_800;

/// The encoding version for offsets that are a whole number of minutes.
const BINARY_VERSION_V1: u8 = 1;

/// The encoding version for offsets with a seconds component.
const BINARY_VERSION_V2: u8 = 2;


#[derive(PartialEq, Eq, Hash, Copy, Clone)]
pub struct Offset {
    offset_seconds: Option<i32>,
}

impl Offset {

    /// Returns the UTC offset itself. This is distinct from a fixed offset
    /// of zero seconds, in the same way that “Z” is distinct from “+00”.
    pub fn utc() -> Self {
        Self { offset_seconds: None }
    }

    pub fn of_seconds(seconds: i32) -> Result<Self, Error> {
        if (-86400 ..= 86400).contains(&seconds) {
            Ok(Self { offset_seconds: Some(seconds) })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    pub fn of_hours_and_minutes(hours: i8, minutes: i8) -> Result<Self, Error> {
        if (hours.is_positive() && minutes.is_negative())
        || (hours.is_negative() && minutes.is_positive()) {
            Err(Error::SignMismatch)
        }
        else if hours <= -24 || hours >= 24 || minutes <= -60 || minutes >= 60 {
            Err(Error::OutOfRange)
        }
        else {
            let hours = hours as i32;
            let minutes = minutes as i32;
            Self::of_seconds(hours * (60 * 60) + minutes * 60)
        }
    }

    /// Pins the given wall-clock date-time to this offset.
    pub fn transform_date(self, local: DateTime) -> OffsetDateTime {
        OffsetDateTime {
            local,
            offset: self,
        }
    }

    pub fn is_utc(self) -> bool {
        self.offset_seconds.is_none()
    }

    pub fn is_negative(self) -> bool {
        self.total_seconds() < 0
    }

    /// The whole offset in seconds, with UTC counting as zero.
    pub fn total_seconds(self) -> i32 {
        self.offset_seconds.unwrap_or(0)
    }

    pub fn hours(self) -> i8 {
        (self.total_seconds() / 60 / 60) as i8
    }

    pub fn minutes(self) -> i8 {
        (self.total_seconds() / 60 % 60) as i8
    }

    pub fn seconds(self) -> i8 {
        (self.total_seconds() % 60) as i8
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Offset({})", self.iso())
    }
}

#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {
    OutOfRange,
    SignMismatch,
    Date(DateTimeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::OutOfRange    => write!(f, "offset field out of range"),
            Error::SignMismatch  => write!(f, "sign mismatch"),
            Error::Date(_)       => write!(f, "datetime field out of range"),
        }
    }
}

impl ErrorTrait for Error {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        if let Error::Date(ref e) = *self {
            Some(e)
        }
        else {
            None
        }
    }
}


/// A wall-clock date-time at a fixed offset from UTC, which together pick
/// out an exact instant.
#[derive(PartialEq, Eq, Hash, Copy, Clone)]
pub struct OffsetDateTime {
    local: DateTime,
    offset: Offset,
}

impl OffsetDateTime {

    /// Returns the given date-time as an instant in UTC.
    pub fn utc(local: DateTime) -> Self {
        Offset::utc().transform_date(local)
    }

    /// Returns the instant that is the given number of seconds after the
    /// Unix epoch, seen from the given offset.
    pub fn at(seconds_since_1970_epoch: i64, offset: Offset) -> Self {
        let local = DateTime::at(seconds_since_1970_epoch.saturating_add(offset.total_seconds() as i64));
        offset.transform_date(local)
    }

    /// Returns the wall-clock date-time at this offset.
    pub fn local(&self) -> DateTime {
        self.local
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Returns the number of seconds elapsed since the Unix epoch, which,
    /// unlike for a civil date-time, depends on the offset.
    pub fn unix(&self) -> i64 {
        self.local.unix().saturating_sub(self.offset.total_seconds() as i64)
    }

    /// Encodes this instant in the binary layout of Go’s `time.Time`, so the
    /// bytes can be exchanged with anything that reads that format.
    ///
    /// The layout is a version byte, then the seconds since the start of
    /// year 1 in UTC as a big-endian `i64`, then the nanoseconds as an
    /// `i32` (always zero here), then the offset in minutes as an `i16`,
    /// with −1 standing for UTC. Offsets with a seconds component use
    /// version 2, which appends those seconds as a single signed byte.
    pub fn to_binary(&self) -> Result<Vec<u8>, BinaryError> {
        let mut version = BINARY_VERSION_V1;
        let mut offset_seconds = 0_i8;

        let offset_minutes = match self.offset.offset_seconds {
            None => -1_i16,
            Some(offset) => {
                if offset % 60 != 0 {
                    version = BINARY_VERSION_V2;
                    offset_seconds = (offset % 60) as i8;
                }

                let minutes = offset / 60;
                if minutes < i16::MIN as i32 || minutes == -1 || minutes > i16::MAX as i32 {
                    return Err(BinaryError::UnexpectedOffset(offset));
                }
                minutes as i16
            },
        };

        let seconds = self.unix().saturating_add(UNIX_TO_INTERNAL);

        let mut buf = Vec::with_capacity(16);
        buf.push(version);
        buf.extend_from_slice(&seconds.to_be_bytes());
        buf.extend_from_slice(&0_i32.to_be_bytes());
        buf.extend_from_slice(&offset_minutes.to_be_bytes());
        if version == BINARY_VERSION_V2 {
            buf.push(offset_seconds as u8);
        }

        Ok(buf)
    }

    /// Decodes an instant from the binary layout written by `to_binary`.
    /// Nanoseconds are read but dropped.
    ///
    /// The format can carry offsets of up to ±32767 minutes, but only those
    /// within a day either side of UTC are accepted, the same range as
    /// `Offset::of_seconds`. Anything wider is an `UnexpectedOffset`.
    pub fn from_binary(data: &[u8]) -> Result<Self, BinaryError> {
        let version = match data.first() {
            Some(v) => *v,
            None    => return Err(BinaryError::NoData),
        };

        let expected_len = match version {
            BINARY_VERSION_V1 => 15,
            BINARY_VERSION_V2 => 16,
            other => return Err(BinaryError::UnsupportedVersion(other)),
        };

        if data.len() != expected_len {
            return Err(BinaryError::InvalidLength(data.len()));
        }

        let mut seconds = [0_u8; 8];
        seconds.copy_from_slice(&data[1 .. 9]);
        let seconds = i64::from_be_bytes(seconds);

        let offset_minutes = i16::from_be_bytes([data[13], data[14]]);
        let mut offset = offset_minutes as i32 * 60;
        if version == BINARY_VERSION_V2 {
            offset += data[15] as i8 as i32;
        }

        let offset = if offset == -60 {
            Offset::utc()
        }
        else {
            Offset::of_seconds(offset).map_err(|_| BinaryError::UnexpectedOffset(offset))?
        };

        Ok(Self::at(seconds.saturating_sub(UNIX_TO_INTERNAL), offset))
    }
}

impl DatePiece for OffsetDateTime {
    fn year(&self) -> i64 { self.local.year() }
    fn month(&self) -> Month { self.local.month() }
    fn day(&self) -> i8 { self.local.day() }
    fn yearday(&self) -> i16 { self.local.yearday() }
    fn weekday(&self) -> Weekday { self.local.weekday() }
}

impl TimePiece for OffsetDateTime {
    fn hour(&self) -> i8 { self.local.hour() }
    fn minute(&self) -> i8 { self.local.minute() }
    fn second(&self) -> i8 { self.local.second() }
}

impl fmt::Debug for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OffsetDateTime({})", self.iso())
    }
}


/// An error encoding or decoding the binary form of an instant.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum BinaryError {

    /// There were no bytes to decode.
    NoData,

    /// The first byte names a version of the format that isn’t supported.
    UnsupportedVersion(u8),

    /// The number of bytes doesn’t match what the version requires.
    InvalidLength(usize),

    /// The offset, in seconds, can’t be written in the format, or the
    /// offset read from it is too large.
    UnexpectedOffset(i32),
}

impl fmt::Display for BinaryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BinaryError::NoData                 => write!(f, "binary date-time: no data"),
            BinaryError::UnsupportedVersion(v)  => write!(f, "binary date-time: unsupported version {}", v),
            BinaryError::InvalidLength(len)     => write!(f, "binary date-time: invalid length {}", len),
            BinaryError::UnexpectedOffset(secs) => write!(f, "binary date-time: unexpected zone offset of {} seconds", secs),
        }
    }
}

impl ErrorTrait for BinaryError {
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fixed_seconds() {
        assert!(Offset::of_seconds(1234).is_ok());
    }

    #[test]
    fn fixed_seconds_out_of_range() {
        assert!(Offset::of_seconds(100_000).is_err());
    }

    #[test]
    fn fixed_hm_negative() {
        assert!(Offset::of_hours_and_minutes(-3, -45).is_ok());
    }

    #[test]
    fn fixed_hm_err() {
        assert!(Offset::of_hours_and_minutes(8, 60).is_err());
    }

    #[test]
    fn fixed_hm_signs() {
        assert_eq!(Offset::of_hours_and_minutes(-4, 30), Err(Error::SignMismatch));
    }

    #[test]
    fn debug_offset_date_time() {
        let offset = Offset::of_seconds(25 * 60 + 21).unwrap();
        let then = DateTime::from_fields(2009, 2, 13, 23, 31, 30);

        let debugged = format!("{:?}", offset.transform_date(then));
        assert_eq!(debugged, "OffsetDateTime(2009-02-13T23:31:30+00:25:21)");
    }

    #[test]
    fn unix_depends_on_offset() {
        let brisbane = Offset::of_hours_and_minutes(10, 0).unwrap();
        let then = brisbane.transform_date(DateTime::from_fields(1970, 1, 1, 10, 0, 0));
        assert_eq!(then.unix(), 0);
        assert_eq!(OffsetDateTime::at(0, brisbane), then);
    }

    #[test]
    fn epoch_in_utc() {
        let epoch = OffsetDateTime::utc(DateTime::at(0));
        assert_eq!(epoch.to_binary(), Ok(vec![
            1,
            0x00, 0x00, 0x00, 0x0E, 0x77, 0x91, 0xF7, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0xFF, 0xFF,
        ]));
    }

    #[test]
    fn fixed_offset_round_trip() {
        let offset = Offset::of_hours_and_minutes(-5, -30).unwrap();
        let then = offset.transform_date(DateTime::from_fields(2056, 9, 30, 1, 2, 3));
        let bytes = then.to_binary().unwrap();

        assert_eq!(bytes.len(), 15);
        assert_eq!(&bytes[13 ..], &(-330_i16).to_be_bytes());
        assert_eq!(OffsetDateTime::from_binary(&bytes), Ok(then));
    }

    #[test]
    fn zero_offset_is_not_utc() {
        let then = Offset::of_seconds(0).unwrap().transform_date(DateTime::at(0));
        let bytes = then.to_binary().unwrap();
        assert_eq!(&bytes[13 ..], &[0, 0]);
        assert_eq!(OffsetDateTime::from_binary(&bytes).unwrap().offset(), Offset::of_seconds(0).unwrap());
    }

    #[test]
    fn seconds_offset_uses_version_two() {
        let offset = Offset::of_seconds(-25 * 60 - 21).unwrap();
        let then = offset.transform_date(DateTime::from_fields(1916, 10, 1, 2, 0, 0));
        let bytes = then.to_binary().unwrap();

        assert_eq!(bytes[0], 2);
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes[15] as i8, -21);
        assert_eq!(OffsetDateTime::from_binary(&bytes), Ok(then));
    }

    #[test]
    fn minus_one_minute_is_unrepresentable() {
        let then = Offset::of_seconds(-60).unwrap().transform_date(DateTime::at(0));
        assert_eq!(then.to_binary(), Err(BinaryError::UnexpectedOffset(-60)));
    }

    #[test]
    fn offsets_wider_than_a_day_are_refused() {
        let mut bytes = OffsetDateTime::utc(DateTime::at(0)).to_binary().unwrap();
        bytes[13 ..].copy_from_slice(&1500_i16.to_be_bytes());
        assert_eq!(OffsetDateTime::from_binary(&bytes), Err(BinaryError::UnexpectedOffset(90_000)));

        bytes[13 ..].copy_from_slice(&1440_i16.to_be_bytes());
        assert_eq!(OffsetDateTime::from_binary(&bytes).unwrap().offset(), Offset::of_seconds(86_400).unwrap());
    }

    #[test]
    fn decode_errors() {
        assert_eq!(OffsetDateTime::from_binary(&[]), Err(BinaryError::NoData));
        assert_eq!(OffsetDateTime::from_binary(b"xxxx"), Err(BinaryError::UnsupportedVersion(b'x')));
        assert_eq!(OffsetDateTime::from_binary(&[1, 0, 0]), Err(BinaryError::InvalidLength(3)));
    }
}
