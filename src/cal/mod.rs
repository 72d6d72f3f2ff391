//! Civil calendar calculations, which use years, months, days, hours,
//! minutes, and seconds, but no time zones.

pub(crate) mod calendar;
pub(crate) mod datetime;
pub(crate) mod encode;
pub(crate) mod fmt;
pub(crate) mod offset;
pub(crate) mod parse;
#[cfg(feature="serde")] mod serde;
pub(crate) mod value;
pub mod convenience;

use self::calendar::{Month, Weekday};


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    /// The day of the week.
    fn weekday(&self) -> Weekday;

    /// The number of years into the century.
    /// This is the same as the last two digits of the year.
    fn year_of_century(&self) -> i64 { self.year().rem_euclid(100) }
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day, from 0 to 23.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;
}
