//! The proleptic Gregorian calendar: leap years, month lengths, weekdays,
//! and conversions between calendar fields and day counts.
//!
//! Everything in here works on plain numbers. The value types in
//! `cal::datetime` are built on top of it, and nothing else in the crate
//! does any calendar arithmetic of its own.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::ops::Deref;

use self::Month::*;
use self::Weekday::*;


/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;

/// Number of days between **1st March, 0000** and **1st January, 1970**.
///
/// Day counts are worked out relative to a 1st of March, so that the leap
/// day falls at the very end of each counted year, and relative to a year
/// that’s a multiple of 400, so that the 400-year Gregorian cycle starts
/// exactly on the reference point. Everything that leaves this module is
/// relative to the Unix epoch instead.
const EPOCH_DIFFERENCE: i64 = 719_468;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// assert_eq!(Year(-4).is_leap_year(), true);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.0.rem_euclid(4) == 0 && (self.0.rem_euclid(100) != 0 || self.0.rem_euclid(400) == 0)
    }

    /// Returns the number of days in this year: 366 in leap years, and 365
    /// otherwise.
    pub fn day_count(self) -> i16 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Returns the number of ISO weeks in this year, which is 53 when the
    /// year starts on a Thursday (or on a Wednesday in a leap year), and
    /// 52 otherwise.
    pub fn iso_week_count(self) -> i8 {
        let jan_1 = weekday_from_days(YMD { year: self.0, month: January, day: 1 }.days_since_epoch());
        if jan_1 == Thursday || (jan_1 == Wednesday && self.is_leap_year()) { 53 } else { 52 }
    }
}

impl Deref for Year {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


/// A **YMD** is a bare year-month-day triple, with no validity guarantee.
///
/// The public date types ensure that it should be impossible to create an
/// instance of the 74th of March, but you’re free to create such an
/// instance of `YMD`, which is why it isn’t exposed to users of this
/// library.
#[derive(PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Debug, Copy)]
pub(crate) struct YMD {
    pub(crate) year:  i64,
    pub(crate) month: Month,
    pub(crate) day:   i8,
}

impl YMD {

    /// Returns whether this datestamp is valid, which basically means
    /// whether the day is in the range allowed by the month.
    pub(crate) fn is_valid(&self) -> bool {
        self.day >= 1 && self.day <= self.month.days_in_month(Year(self.year).is_leap_year())
    }

    /// Calculates the number of days that have elapsed since the 1st
    /// January, 1970, refusing to do so for an invalid datestamp.
    pub(crate) fn to_days_since_epoch(&self) -> Result<i64, Error> {
        if self.is_valid() {
            Ok(self.days_since_epoch())
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Calculates the number of days that have elapsed since the 1st
    /// January, 1970, without checking the day against the month first.
    /// Days past the end of the month simply carry on into the next one.
    pub(crate) fn days_since_epoch(&self) -> i64 {
        // January and February count as the last months of the previous
        // year, so the leap day is always the final day of a year.
        let month = self.month as i64;
        let year = if month <= 2 { self.year.saturating_sub(1) } else { self.year };
        let (num_400y_cycles, year_of_cycle) = split_cycles(year, 400);

        let month_from_march = (month + 9) % 12;
        let day_of_year = (153 * month_from_march + 2) / 5 + self.day as i64 - 1;
        let day_of_cycle = year_of_cycle * 365 + year_of_cycle / 4 - year_of_cycle / 100 + day_of_year;

        num_400y_cycles.saturating_mul(DAYS_IN_400Y)
            .saturating_add(day_of_cycle)
            .saturating_sub(EPOCH_DIFFERENCE)
    }

    /// Computes the year, month, and day given the number of days that have
    /// passed since the 1st January, 1970. This is the reverse of
    /// `days_since_epoch`.
    pub(crate) fn from_days_since_epoch(days: i64) -> Self {
        let (num_400y_cycles, day_of_cycle) = split_cycles(days.saturating_add(EPOCH_DIFFERENCE), DAYS_IN_400Y);

        // The last day of a 400-year cycle is a leap day that the 4-year,
        // 100-year, and 400-year corrections would otherwise push into the
        // following year.
        let year_of_cycle = (day_of_cycle - day_of_cycle / 1460 + day_of_cycle / 36524 - day_of_cycle / 146_096) / 365;
        let day_of_year = day_of_cycle - (365 * year_of_cycle + year_of_cycle / 4 - year_of_cycle / 100);

        let month_from_march = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * month_from_march + 2) / 5 + 1;
        let month = if month_from_march < 10 { month_from_march + 3 } else { month_from_march - 9 };

        let year = num_400y_cycles.saturating_mul(400).saturating_add(year_of_cycle);
        let year = if month <= 2 { year.saturating_add(1) } else { year };

        Self {
            year,
            month: Month::from_days_arithmetic(month),
            day:   day as i8,
        }
    }

    /// Returns the day of the year, from 1 to 366.
    pub(crate) fn yearday(&self) -> i16 {
        let leap_day = if self.month > February && Year(self.year).is_leap_year() { 1 } else { 0 };
        self.month.days_before_start() + leap_day + self.day as i16
    }
}


/// Normalizes a set of possibly out-of-range calendar fields, returning the
/// number of days since the Unix epoch and the number of seconds into that
/// day.
///
/// Months outside 1 to 12 carry into the year, and days, hours, minutes and
/// seconds outside their usual ranges carry into the fields above them, so
/// the 32nd of October becomes the 1st of November, and month 13 of one year
/// becomes January of the next.
pub(crate) fn normalize(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> (i64, i64) {
    let (year_carry, month_of_year) = split_cycles(month.saturating_sub(1), 12);
    let first = YMD {
        year:  year.saturating_add(year_carry),
        month: Month::from_days_arithmetic(month_of_year + 1),
        day:   1,
    };

    let seconds = first.days_since_epoch()
        .saturating_add(day.saturating_sub(1))
        .saturating_mul(SECONDS_IN_DAY)
        .saturating_add(hour.saturating_mul(3600))
        .saturating_add(minute.saturating_mul(60))
        .saturating_add(second);

    split_cycles(seconds, SECONDS_IN_DAY)
}

/// Returns the ISO 8601 week-numbering year and week for the given date.
///
/// Week 1 is the week containing the year’s first Thursday, so the 1st to
/// the 3rd of January might belong to the last week of the previous year,
/// and the 29th to the 31st of December might belong to week 1 of the next.
pub(crate) fn iso_week(ymd: &YMD, weekday: Weekday) -> (i64, i8) {
    let week = (ymd.yearday() as i64 - weekday.days_from_monday_as_one() as i64 + 10) / 7;

    if week < 1 {
        let previous = Year(ymd.year.saturating_sub(1));
        (previous.0, previous.iso_week_count())
    }
    else if week > Year(ymd.year).iso_week_count() as i64 {
        (ymd.year.saturating_add(1), 1)
    }
    else {
        (ymd.year, week as i8)
    }
}

/// Computes the weekday, given the number of days that have passed since
/// the Unix epoch.
pub(crate) fn weekday_from_days(days: i64) -> Weekday {
    // The 1st of January 1970 was a Thursday, which is day 4 counting
    // from Sunday.
    Weekday::from_days_arithmetic(days.rem_euclid(7) + 4)
}

/// Split a number of periods into a number of whole cycles, and the number
/// of periods left over that don’t fit into a cycle.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets ‘wrapped
/// around’ to be a positive value, owing to the way the modulo operator
/// works for negative values.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    (number_of_periods.div_euclid(cycle_length), number_of_periods.rem_euclid(cycle_length))
}


#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "datetime field out of range")
    }
}

impl ErrorTrait for Error {
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    /// Returns the number of months between January and this month, so
    /// January is 0 and December is 11.
    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use civil::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        Ok(match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  12 => December,
             _ => return Err(Error::OutOfRange),
        })
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    ///
    /// ```rust
    /// use civil::Month;
    /// assert_eq!(Month::from_zero(5), Ok(Month::June));
    /// assert!(Month::from_zero(12).is_err());
    /// ```
    pub fn from_zero(month: i8) -> Result<Self, Error> {
        Self::from_one(month.saturating_add(1))
    }

    /// Converts a month number that has already been brought into the
    /// range 1 to 12 by the arithmetic above.
    fn from_days_arithmetic(month: i64) -> Self {
        match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,   _ => December,
        }
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Sunday is Day 0, to match the order that locales list day names in.
// Weekdays have no Ord instance because there’s no real standard as to
// whether Sunday should come before Monday, or the other way around.

impl Weekday {

    /// Returns the ISO 8601 number of this weekday, with Monday as 1 and
    /// Sunday as 7.
    pub fn days_from_monday_as_one(self) -> i8 {
        match self {
            Sunday   => 7,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use civil::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self, Error> {
        Ok(match weekday {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return Err(Error::OutOfRange),
        })
    }

    /// Return the weekday based on its ISO 8601 number, with Monday as
    /// Day 1 and Sunday as Day 7.
    pub fn from_one(weekday: i8) -> Result<Self, Error> {
        match weekday {
            7 => Ok(Sunday),
            1 ..= 6 => Self::from_zero(weekday),
            _ => Err(Error::OutOfRange),
        }
    }

    fn from_days_arithmetic(weekday: i64) -> Self {
        match weekday % 7 {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            _ => Saturday,
        }
    }
}
