use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{Date, Time, DateTime};
use crate::cal::fmt::ISO;
use crate::cal::offset::{Offset, OffsetDateTime};


impl ISO for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let year = self.year();
        if year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", year.unsigned_abs(), self.month() as usize, self.day())
        }
        else {
            write!(f, "{:04}-{:02}-{:02}", year, self.month() as usize, self.day())
        }
    }
}

impl ISO for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}

impl ISO for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}T{}", self.date().iso(), self.time().iso())
    }
}

impl ISO for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_utc() {
            write!(f, "Z")
        }
        else {
            let sign = if self.is_negative() { '-' } else { '+' };
            let (hours, minutes, seconds) = (self.hours().abs(), self.minutes().abs(), self.seconds().abs());

            if seconds != 0 {
                write!(f, "{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
            }
            else if minutes != 0 {
                write!(f, "{}{:02}:{:02}", sign, hours, minutes)
            }
            else {
                write!(f, "{}{:02}", sign, hours)
            }
        }
    }
}

impl ISO for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.local().iso(), self.offset().iso())
    }
}


impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ISO::fmt(self, f)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ISO::fmt(self, f)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ISO::fmt(self, f)
    }
}


#[cfg(test)]
mod test {
    use crate::cal::fmt::ISO;
    use crate::cal::datetime::{Date, DateTime};
    use crate::cal::offset::Offset;

    #[test]
    fn recently() {
        let date = Date::from_fields(1600, 2, 28);
        assert_eq!(date.iso().to_string(), "1600-02-28");
    }

    #[test]
    fn just_then() {
        let date = Date::from_fields(-753, 12, 1);
        assert_eq!(date.iso().to_string(), "-0753-12-01");
    }

    #[test]
    fn year_zero() {
        let date = Date::from_fields(0, 1, 1);
        assert_eq!(date.to_string(), "0000-01-01");
    }

    #[test]
    fn far_far_future() {
        let date = Date::from_fields(10601, 1, 31);
        assert_eq!(date.to_string(), "10601-01-31");
    }

    #[test]
    fn ascending() {
        let then = DateTime::from_fields(2009, 2, 13, 23, 31, 30);
        assert_eq!(then.to_string(), "2009-02-13T23:31:30");
    }

    #[test]
    fn zulu() {
        assert_eq!(Offset::utc().iso().to_string(), "Z");
    }

    #[test]
    fn hours_minutes() {
        let offset = Offset::of_hours_and_minutes(1, 30).unwrap();
        assert_eq!(offset.iso().to_string(), "+01:30");
    }

    #[test]
    fn dublin_mean_time() {
        let offset = Offset::of_seconds(-25 * 60 - 21).unwrap();
        assert_eq!(offset.iso().to_string(), "-00:25:21");
    }
}
