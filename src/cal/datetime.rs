//! Dates, times, and datetimes, without time zones.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use crate::cal::{DatePiece, TimePiece};
use crate::cal::calendar::{self, Error, Month, Weekday, Year, YMD, SECONDS_IN_DAY};
use crate::cal::fmt::ISO;
use crate::cal::offset::OffsetDateTime;
use crate::clock::{Clock, SystemClock};
use crate::duration::Duration;
use crate::instant::Instant;


/// A **date** is a day-long span on the timeline, *without a time zone*.
///
/// Dates are useful for things like birthdays, where all that matters is the
/// day itself and not any particular instant within it. The year is
/// proleptic Gregorian, and can be zero or negative.
///
/// The default value is the 1st of January, year 1.
#[derive(Eq, Clone, Copy)]
pub struct Date {
    ymd:     YMD,
    yearday: i16,
    weekday: Weekday,
}

/// A **time** is a wall-clock time of day, to the second, that recurs once
/// a day.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct Time {
    hour:   i8,
    minute: i8,
    second: i8,
}

/// A **date-time** is a date paired with a time of day, *without a time
/// zone*.
///
/// Because a date-time doesn’t pick out a unique instant, it has no need for
/// sub-second precision, and is only accurate to the second. All arithmetic
/// happens as though the wall clock were in UTC.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct DateTime {
    date: Date,
    time: Time,
}


impl Date {

    /// Creates a new date instance from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civil::{Date, Month, DatePiece};
    ///
    /// let date = Date::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(Date::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        YMD { year, month, day }
            .to_days_since_epoch()
            .map(Self::from_days_since_epoch)
    }

    /// Creates a new date instance from the given year and day-of-year
    /// values. The day-of-year must be between 1 and the number of days in
    /// that year.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civil::{Date, Month, DatePiece};
    ///
    /// let date = Date::yd(2016, 268).unwrap();
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 24);  // not the 25th, as 2016 is a leap year
    ///
    /// assert!(Date::yd(2015, 366).is_err());
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Result<Self, Error> {
        if (1 ..= Year(year).day_count() as i64).contains(&yearday) {
            let jan_1 = YMD { year, month: Month::January, day: 1 };
            Ok(Self::from_days_since_epoch(jan_1.days_since_epoch() + yearday - 1))
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Creates a new date from fields that may lie outside their usual
    /// ranges, normalizing them the same way calendar addition would.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civil::{Date, Month, DatePiece};
    ///
    /// let date = Date::from_fields(2021, 10, 32);
    /// assert_eq!(date.month(), Month::November);
    /// assert_eq!(date.day(), 1);
    /// ```
    pub fn from_fields(year: i64, month: i64, day: i64) -> Self {
        let (days, _) = calendar::normalize(year, month, day, 0, 0, 0);
        Self::from_days_since_epoch(days)
    }

    /// Computes a date given the number of days that have passed since the
    /// **1st January, 1970**. This is used by all the other constructor
    /// functions.
    pub(crate) fn from_days_since_epoch(days: i64) -> Self {
        let ymd = YMD::from_days_since_epoch(days);
        Self {
            yearday: ymd.yearday(),
            weekday: calendar::weekday_from_days(days),
            ymd,
        }
    }

    /// Returns the date of the given instant with its time zone offset
    /// discarded: the wall-clock date at that offset.
    pub fn from_offset(instant: &OffsetDateTime) -> Self {
        instant.local().date()
    }

    /// Returns the current date, reading the clock through the given source.
    pub fn today_with<C: Clock + ?Sized>(clock: &C) -> Self {
        DateTime::now_with(clock).date()
    }

    /// Pairs this date with a time of day.
    pub fn at(self, time: Time) -> DateTime {
        DateTime::new(self, time)
    }

    /// Returns a date-time at midnight at the start of this date.
    pub fn midnight(self) -> DateTime {
        self.at(Time::midnight())
    }

    /// Returns whether this is the zero date, the 1st of January, year 1.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Returns whether this date comes before the other one.
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns whether this date comes after the other one.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Returns the ISO 8601 week-numbering year and the week number, from
    /// 1 to 53, that this date falls in.
    pub fn iso_week(&self) -> (i64, i8) {
        calendar::iso_week(&self.ymd, self.weekday)
    }

    /// Returns the number of seconds between the Unix epoch and midnight at
    /// the start of this date, as though it were in UTC.
    pub fn unix(&self) -> i64 {
        self.days_since_epoch().saturating_mul(SECONDS_IN_DAY)
    }

    /// Returns the date that’s the given number of years, months, and days
    /// away from this one.
    ///
    /// Years and months are added first, and the result is normalized in the
    /// same way as `Date::from_fields`, so adding one month to the 31st of
    /// October gives the 1st of December. Days are added afterwards.
    pub fn add_date(&self, years: i64, months: i64, days: i64) -> Self {
        Self::from_fields(
            self.ymd.year.saturating_add(years),
            (self.ymd.month as i64).saturating_add(months),
            (self.ymd.day as i64).saturating_add(days))
    }

    pub(crate) fn days_since_epoch(&self) -> i64 {
        self.ymd.days_since_epoch()
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::from_days_since_epoch(YMD { year: 1, month: Month::January, day: 1 }.days_since_epoch())
    }
}

impl DatePiece for Date {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Date({})", self.iso())
    }
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}

impl Hash for Date {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ymd.hash(state)
    }
}


impl Time {

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0 }
    }

    /// Creates a new time instance with the given hour and minute fields.
    /// The second field is set to 0.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hm(hour: i8, minute: i8) -> Result<Self, Error> {
        Self::hms(hour, minute, 0)
    }

    /// Creates a new time instance with the given hour, minute, and
    /// second fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        if (0 .. 24).contains(&hour) && (0 .. 60).contains(&minute) && (0 .. 60).contains(&second) {
            Ok(Self { hour, minute, second })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Computes the number of hours, minutes, and seconds, based on the
    /// number of seconds that have elapsed since midnight. The value must
    /// already be less than a day.
    pub(crate) fn from_seconds_since_midnight(seconds: i64) -> Self {
        Self {
            hour:   (seconds / 60 / 60) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
        }
    }

    /// Calculate the number of seconds since midnight this time is at.
    pub fn to_seconds(self) -> i64 {
        self.hour as i64 * 3600
            + self.minute as i64 * 60
            + self.second as i64
    }
}

impl TimePiece for Time {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
}

impl fmt::Debug for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Time({})", self.iso())
    }
}


impl DateTime {

    /// Creates a new date-time from a date and a time.
    pub fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Creates a new date-time from the given fields, checking each one
    /// for validity.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civil::{DateTime, Month, TimePiece};
    ///
    /// let then = DateTime::ymd_hms(1934, Month::March, 18, 22, 2, 31).unwrap();
    /// assert_eq!(then.minute(), 2);
    ///
    /// assert!(DateTime::ymd_hms(1934, Month::March, 18, 24, 0, 0).is_err());
    /// ```
    pub fn ymd_hms(year: i64, month: Month, day: i8, hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        let date = Date::ymd(year, month, day)?;
        let time = Time::hms(hour, minute, second)?;
        Ok(Self::new(date, time))
    }

    /// Creates a new date-time from fields that may lie outside their usual
    /// ranges, normalizing them the same way calendar addition would.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civil::{DateTime, Month, DatePiece, TimePiece};
    ///
    /// let then = DateTime::from_fields(2021, 12, 31, 23, 59, 60);
    /// assert_eq!(then.year(), 2022);
    /// assert_eq!(then.month(), Month::January);
    /// assert_eq!(then.hour(), 0);
    /// ```
    pub fn from_fields(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Self {
        let (days, seconds) = calendar::normalize(year, month, day, hour, minute, second);
        Self {
            date: Date::from_days_since_epoch(days),
            time: Time::from_seconds_since_midnight(seconds),
        }
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**.
    pub fn at(seconds_since_1970_epoch: i64) -> Self {
        // Just split the input value into days and seconds, and let
        // Date and Time do all the hard work.
        let (days, seconds) = calendar::split_cycles(seconds_since_1970_epoch, SECONDS_IN_DAY);

        Self {
            date: Date::from_days_since_epoch(days),
            time: Time::from_seconds_since_midnight(seconds),
        }
    }

    /// Computes a complete date-time based on the values in the given
    /// Instant parameter, dropping its milliseconds.
    pub fn from_instant(instant: Instant) -> Self {
        Self::at(instant.seconds())
    }

    /// Returns the wall-clock date-time of the given instant, discarding
    /// its time zone offset.
    pub fn from_offset(instant: &OffsetDateTime) -> Self {
        instant.local()
    }

    /// Creates a new date-time set to the current time.
    pub fn now() -> Self {
        Self::now_with(&SystemClock)
    }

    /// Creates a new date-time set to the time given by the clock.
    pub fn now_with<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::from_instant(clock.now())
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> Time {
        self.time
    }

    /// Returns the hour, minute, and second of this date-time.
    pub fn clock(&self) -> (i8, i8, i8) {
        (self.time.hour, self.time.minute, self.time.second)
    }

    /// Returns every field of this date-time at once: the year, month, day,
    /// hour, minute, and second.
    pub fn date_time(&self) -> (i64, Month, i8, i8, i8, i8) {
        (self.date.ymd.year, self.date.ymd.month, self.date.ymd.day,
         self.time.hour, self.time.minute, self.time.second)
    }

    /// Returns whether this is the zero date-time, midnight on the 1st of
    /// January, year 1.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Returns whether this date-time comes before the other one.
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns whether this date-time comes after the other one.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Returns the ISO 8601 week-numbering year and the week number, from
    /// 1 to 53, that this date-time falls in.
    pub fn iso_week(&self) -> (i64, i8) {
        self.date.iso_week()
    }

    /// Returns the number of seconds elapsed since the Unix epoch, treating
    /// this date-time as though it were in UTC. Date-times before 1970
    /// give negative numbers.
    pub fn unix(&self) -> i64 {
        self.date.unix().saturating_add(self.time.to_seconds())
    }

    /// Returns this date-time as an instant, as though it were in UTC.
    pub fn to_instant(&self) -> Instant {
        Instant::at(self.unix())
    }

    /// Returns the date-time that’s the given number of years, months, and
    /// days away from this one, keeping the time of day.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civil::DateTime;
    ///
    /// let then = DateTime::from_fields(2011, 1, 1, 12, 0, 0);
    /// assert_eq!(then.add_date(-1, 2, 3), DateTime::from_fields(2010, 3, 4, 12, 0, 0));
    /// ```
    pub fn add_date(&self, years: i64, months: i64, days: i64) -> Self {
        Self::new(self.date.add_date(years, months, days), self.time)
    }

    /// Returns the date-time that’s the given duration away from this one.
    /// Any fraction of a second in the duration is ignored.
    pub fn add_duration(&self, duration: Duration) -> Self {
        Self::at(self.unix().saturating_add(duration.whole_seconds()))
    }

    /// Returns the length of time between the other date-time and this one,
    /// in whole seconds. The result saturates instead of overflowing.
    pub fn duration_since(&self, other: &Self) -> Duration {
        Duration::of(self.unix().saturating_sub(other.unix()))
    }
}

impl DatePiece for DateTime {
    fn year(&self) -> i64 { self.date.ymd.year }
    fn month(&self) -> Month { self.date.ymd.month }
    fn day(&self) -> i8 { self.date.ymd.day }
    fn yearday(&self) -> i16 { self.date.yearday }
    fn weekday(&self) -> Weekday { self.date.weekday }
}

impl TimePiece for DateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
}

impl fmt::Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DateTime({})", self.iso())
    }
}

impl Add<Duration> for DateTime {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        self.add_duration(duration)
    }
}

impl Sub<Duration> for DateTime {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        self.add_duration(-duration)
    }
}

impl Sub<DateTime> for DateTime {
    type Output = Duration;

    fn sub(self, other: DateTime) -> Duration {
        self.duration_since(&other)
    }
}
