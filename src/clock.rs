//! Sources of the current time.

use crate::instant::Instant;


/// A **clock** tells the current instant.
///
/// Everything in this library that asks “what time is it now?” goes through
/// a clock, so code under test can swap the system clock for a fixed one.
pub trait Clock {

    /// Returns the instant at the moment this is called.
    fn now(&self) -> Instant;
}

/// The operating system’s real-time clock. Its instants are in UTC.
#[derive(PartialEq, Eq, Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock stopped at a single instant.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct FixedClock(pub Instant);

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::datetime::{Date, DateTime};

    #[test]
    fn fixed() {
        let clock = FixedClock(Instant::at_ms(2_464_000_496, 999));
        assert_eq!(DateTime::now_with(&clock), DateTime::from_fields(2048, 1, 30, 12, 34, 56));
        assert_eq!(Date::today_with(&clock), Date::from_fields(2048, 1, 30));
    }

    #[test]
    fn fixed_before_epoch() {
        let clock = FixedClock(Instant::at(-1));
        assert_eq!(Date::today_with(&clock), Date::from_fields(1969, 12, 31));
    }

    #[test]
    fn system_is_after_epoch() {
        assert!(SystemClock.now() > Instant::at_epoch());
    }

    #[test]
    fn trait_object() {
        let clock: &dyn Clock = &FixedClock(Instant::at(0));
        assert_eq!(DateTime::now_with(clock), DateTime::at(0));
    }
}
