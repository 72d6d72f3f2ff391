//! Reading dates and date-times from the many shapes of ISO-style text.
//!
//! The reader accepts a date in one of four shapes, told apart by the
//! separator character and the lengths of the digit runs:
//!
//! - calendar dates with separators, `2095-09-30`, `2095.09.30` or `2095/09/30`;
//! - ordinal dates with a separator, `2195-060`;
//! - compact calendar dates, `20950930`;
//! - compact ordinal dates, `2195060`.
//!
//! A time of day can follow after a `T` or a single space, either with
//! colons (`12:39:02`, `12:39`, `12`) or compact (`123902`, `1239`, `12`),
//! and an optional fraction of a second (`.123`) that is checked and then
//! dropped.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::cal::calendar::{Month, Year};
use crate::cal::datetime::{Date, Time, DateTime};


impl Date {

    /// Parses a date from ISO-style text. Any time of day in the text is
    /// checked, then dropped.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civil::{Date, Month, DatePiece};
    ///
    /// let date = Date::parse("2195-060").unwrap();
    /// assert_eq!(date.month(), Month::March);
    /// assert_eq!(date.day(), 1);
    ///
    /// assert!(Date::parse("2095-09/30").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        parse_date_time(input).map(|dt| dt.date())
    }
}

impl DateTime {

    /// Parses a date-time from ISO-style text. A missing time of day is
    /// midnight, and any fraction of a second is dropped.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civil::{DateTime, TimePiece};
    ///
    /// let then = DateTime::parse(" 20951030T10:11:12.123456789 ").unwrap();
    /// assert_eq!(then.hour(), 10);
    /// assert_eq!(then.second(), 12);
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        parse_date_time(input)
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl FromStr for DateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}


/// Parses the whole input as a date, optionally followed by a time.
pub(crate) fn parse_date_time(input: &str) -> Result<DateTime, Error> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Malformed::Empty.into());
    }

    match input.find(|c| c == 'T' || c == ' ') {
        Some(split) => {
            let date = parse_date(&input[.. split], 0)?;
            let time = parse_time(&input[split + 1 ..], split + 1)?;
            Ok(DateTime::new(date, time))
        },
        None => {
            let date = parse_date(input, 0)?;
            Ok(date.midnight())
        },
    }
}


/// A run of digits between separators, with its position in the input.
#[derive(Debug)]
struct Group<'a> {
    digits:   &'a str,
    position: usize,
}

impl<'a> Group<'a> {

    /// Reads this group as a number, checking its length first.
    fn number(&self, component: Component, min_len: usize, max_len: usize) -> Result<i64, Error> {
        let count = self.digits.len();
        if count < min_len || count > max_len {
            return Err(Malformed::DigitCount { component, count, position: self.position }.into());
        }

        Ok(self.digits.bytes().fold(0, |n, b| n * 10 + (b - b'0') as i64))
    }

    /// Carves a sub-group out of a compact run of digits.
    fn slice(&self, start: usize, end: usize) -> Group<'a> {
        Group { digits: &self.digits[start .. end], position: self.position + start }
    }
}

/// Splits text into runs of digits separated by one of the given
/// characters. Every separator has to be the same one.
fn split_groups<'a>(text: &'a str, base: usize, separators: &[char]) -> Result<Vec<Group<'a>>, Error> {
    let mut groups = Vec::new();
    let mut separator = None;
    let mut start = 0;

    for (index, character) in text.char_indices() {
        if character.is_ascii_digit() {
            continue;
        }

        if !separators.contains(&character) {
            return Err(Malformed::UnexpectedCharacter { character, position: base + index }.into());
        }

        match separator {
            None => separator = Some(character),
            Some(expected) if expected == character => {},
            Some(expected) => {
                return Err(Malformed::MixedSeparators { expected, found: character, position: base + index }.into());
            },
        }

        groups.push(Group { digits: &text[start .. index], position: base + start });
        start = index + character.len_utf8();
    }

    groups.push(Group { digits: &text[start ..], position: base + start });
    Ok(groups)
}

fn parse_date(text: &str, base: usize) -> Result<Date, Error> {
    if text.is_empty() {
        return Err(Malformed::Missing(Component::Date).into());
    }

    let (negative, digits, base) = match text.as_bytes()[0] {
        b'-' => (true, &text[1 ..], base + 1),
        b'+' => (false, &text[1 ..], base + 1),
        _    => (false, text, base),
    };

    let groups = split_groups(digits, base, &['-', '.', '/'])?;
    let sign = if negative { -1 } else { 1 };

    match groups.as_slice() {
        [year, month, day] => {
            trace!("Reading {:?} as a calendar date", text);
            let year  = sign * year.number(Component::Year, 4, 9)?;
            let month = month.number(Component::Month, 1, 2)?;
            let day   = day.number(Component::Day, 1, 2)?;
            calendar_date(year, month, day)
        },
        [year, yearday] => {
            trace!("Reading {:?} as an ordinal date", text);
            let year    = sign * year.number(Component::Year, 4, 9)?;
            let yearday = yearday.number(Component::YearDay, 1, 3)?;
            ordinal_date(year, yearday)
        },
        [compact] if compact.digits.len() == 8 => {
            trace!("Reading {:?} as a compact calendar date", text);
            let year  = sign * compact.slice(0, 4).number(Component::Year, 4, 4)?;
            let month = compact.slice(4, 6).number(Component::Month, 2, 2)?;
            let day   = compact.slice(6, 8).number(Component::Day, 2, 2)?;
            calendar_date(year, month, day)
        },
        [compact] if compact.digits.len() == 7 => {
            trace!("Reading {:?} as a compact ordinal date", text);
            let year    = sign * compact.slice(0, 4).number(Component::Year, 4, 4)?;
            let yearday = compact.slice(4, 7).number(Component::YearDay, 3, 3)?;
            ordinal_date(year, yearday)
        },
        [compact] => {
            Err(Malformed::DigitCount { component: Component::Date, count: compact.digits.len(), position: compact.position }.into())
        },
        _ => {
            Err(Malformed::GroupCount { count: groups.len() }.into())
        },
    }
}

fn calendar_date(year: i64, month: i64, day: i64) -> Result<Date, Error> {
    let month_variant = Month::from_one(month as i8)
        .map_err(|_| Error::Range { component: Component::Month, value: month })?;

    if day < 1 || day > month_variant.days_in_month(Year(year).is_leap_year()) as i64 {
        return Err(Error::Range { component: Component::Day, value: day });
    }

    Ok(Date::from_fields(year, month, day))
}

fn ordinal_date(year: i64, yearday: i64) -> Result<Date, Error> {
    Date::yd(year, yearday)
        .map_err(|_| Error::Range { component: Component::YearDay, value: yearday })
}

fn parse_time(text: &str, base: usize) -> Result<Time, Error> {
    if text.is_empty() {
        return Err(Malformed::Missing(Component::Time).into());
    }

    let (clock, fraction) = match text.find('.') {
        Some(dot) => (&text[.. dot], Some((dot, &text[dot + 1 ..]))),
        None      => (text, None),
    };

    let groups = split_groups(clock, base, &[':'])?;

    let (hour, minute, second) = match groups.as_slice() {
        [compact] => {
            match compact.digits.len() {
                2 => (compact.number(Component::Hour, 2, 2)?, None, None),
                4 => (compact.slice(0, 2).number(Component::Hour, 2, 2)?,
                      Some(compact.slice(2, 4).number(Component::Minute, 2, 2)?), None),
                6 => (compact.slice(0, 2).number(Component::Hour, 2, 2)?,
                      Some(compact.slice(2, 4).number(Component::Minute, 2, 2)?),
                      Some(compact.slice(4, 6).number(Component::Second, 2, 2)?)),
                count => {
                    return Err(Malformed::DigitCount { component: Component::Time, count, position: compact.position }.into());
                },
            }
        },
        [hour, minute] => {
            (hour.number(Component::Hour, 1, 2)?, Some(minute.number(Component::Minute, 1, 2)?), None)
        },
        [hour, minute, second] => {
            (hour.number(Component::Hour, 1, 2)?,
             Some(minute.number(Component::Minute, 1, 2)?),
             Some(second.number(Component::Second, 1, 2)?))
        },
        _ => {
            return Err(Malformed::GroupCount { count: groups.len() }.into());
        },
    };

    if let Some((dot, digits)) = fraction {
        if second.is_none() {
            return Err(Malformed::UnexpectedCharacter { character: '.', position: base + dot }.into());
        }

        if let Some((index, character)) = digits.char_indices().find(|&(_, c)| !c.is_ascii_digit()) {
            return Err(Malformed::UnexpectedCharacter { character, position: base + dot + 1 + index }.into());
        }

        trace!("Dropping fraction {:?}", digits);
    }

    let minute = minute.unwrap_or(0);
    let second = second.unwrap_or(0);

    if hour > 23 {
        return Err(Error::Range { component: Component::Hour, value: hour });
    }
    if minute > 59 {
        return Err(Error::Range { component: Component::Minute, value: minute });
    }
    if second > 59 {
        return Err(Error::Range { component: Component::Second, value: second });
    }

    Time::hms(hour as i8, minute as i8, second as i8)
        .map_err(|_| Error::Range { component: Component::Time, value: hour })
}


/// The part of a date or time that a parse error is about.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Component {
    Date,
    Year,
    Month,
    Day,
    YearDay,
    Time,
    Hour,
    Minute,
    Second,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Component::Date    => "date",
            Component::Year    => "year",
            Component::Month   => "month",
            Component::Day     => "day",
            Component::YearDay => "day of year",
            Component::Time    => "time",
            Component::Hour    => "hour",
            Component::Minute  => "minute",
            Component::Second  => "second",
        };
        f.write_str(name)
    }
}


/// The ways text can fail to look like a date or time at all.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Malformed {

    /// There was nothing but whitespace.
    Empty,

    /// A part that has to be present wasn’t.
    Missing(Component),

    /// A character turned up where it has no business being.
    UnexpectedCharacter { character: char, position: usize },

    /// The date used one separator, then switched to another.
    MixedSeparators { expected: char, found: char, position: usize },

    /// A run of digits was too long or too short for what it stands for.
    DigitCount { component: Component, count: usize, position: usize },

    /// The text split into a number of groups that matches no shape.
    GroupCount { count: usize },

    /// JSON text was not wrapped in double quotes.
    Unquoted,

    /// Bytes handed to the parser were not UTF-8.
    NotUtf8,
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Malformed::Empty                   => write!(f, "no text"),
            Malformed::Missing(component)      => write!(f, "missing {}", component),
            Malformed::UnexpectedCharacter { character, position } => {
                write!(f, "unexpected character {:?} at position {}", character, position)
            },
            Malformed::MixedSeparators { expected, found, position } => {
                write!(f, "separator {:?} at position {} does not match earlier {:?}", found, position, expected)
            },
            Malformed::DigitCount { component, count, position } => {
                write!(f, "{} digits at position {} is the wrong length for a {}", count, position, component)
            },
            Malformed::GroupCount { count }    => write!(f, "{} groups of digits match no date or time shape", count),
            Malformed::Unquoted                => write!(f, "JSON date text must be a quoted string"),
            Malformed::NotUtf8                 => write!(f, "text is not valid UTF-8"),
        }
    }
}


/// An error reading a date or date-time from text.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Error {

    /// The text doesn’t have the shape of a date or date-time.
    Format(Malformed),

    /// The text has the right shape, but one of its numbers is out of range
    /// for the part it stands for.
    Range { component: Component, value: i64 },
}

impl From<Malformed> for Error {
    fn from(malformed: Malformed) -> Self {
        Error::Format(malformed)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Format(ref malformed)      => write!(f, "parse error: {}", malformed),
            Error::Range { component, value } => write!(f, "parsing resulted in an invalid date: {} {} is out of range", component, value),
        }
    }
}

impl ErrorTrait for Error {
}
