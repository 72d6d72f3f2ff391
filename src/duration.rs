//! Lengths of time on the timeline.

use std::ops::{Add, Sub, Neg};


/// A **duration** is a length of time on the timeline, irrespective of
/// time zone or calendar format, with millisecond precision.
///
/// The milliseconds portion is always between 0 and 999, so a duration of
/// minus half a second is stored as −1 seconds and 500 milliseconds.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy)]
pub struct Duration {
    seconds: i64,
    milliseconds: i16,
}

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Self {
        Self { seconds: 0, milliseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Self {
        Self { seconds, milliseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds and
    /// milliseconds long. Milliseconds outside 0 to 999 carry over into the
    /// seconds.
    pub fn of_ms(seconds: i64, milliseconds: i16) -> Self {
        let carry = (milliseconds as i64).div_euclid(1000);
        Self {
            seconds: seconds.saturating_add(carry),
            milliseconds: milliseconds.rem_euclid(1000),
        }
    }

    /// Create a new duration that’s the given number of minutes long.
    pub fn of_minutes(minutes: i64) -> Self {
        Self::of(minutes.saturating_mul(60))
    }

    /// Create a new duration that’s the given number of hours long.
    pub fn of_hours(hours: i64) -> Self {
        Self::of(hours.saturating_mul(60 * 60))
    }

    /// Create a new duration that’s the given number of 24-hour days long.
    pub fn of_days(days: i64) -> Self {
        Self::of(days.saturating_mul(24 * 60 * 60))
    }

    /// Return the seconds and milliseconds portions of the duration as
    /// a 2-element tuple.
    pub fn lengths(&self) -> (i64, i16) {
        (self.seconds, self.milliseconds)
    }

    // There are no separate seconds() and milliseconds() functions, as
    // milliseconds() would read like the *total* length in milliseconds
    // rather than just this portion.

    /// Returns the length of this duration in whole seconds, dropping any
    /// fraction so the result is rounded toward zero.
    pub fn whole_seconds(&self) -> i64 {
        if self.seconds < 0 && self.milliseconds > 0 {
            self.seconds + 1
        }
        else {
            self.seconds
        }
    }

    pub fn is_negative(&self) -> bool {
        self.seconds < 0
    }
}

impl Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let ms = self.milliseconds + rhs.milliseconds;
        Self::of_ms(self.seconds.saturating_add(rhs.seconds), ms)
    }
}

impl Sub<Duration> for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let ms = self.milliseconds - rhs.milliseconds;
        Self::of_ms(self.seconds.saturating_sub(rhs.seconds), ms)
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self::zero() - self
    }
}
