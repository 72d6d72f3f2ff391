//! Adds convenience functions to some structs.
//!
//! # Example
//! ```
//! # use civil::Date;
//! use civil::convenience::Today;
//! let today: Date = Date::today();
//! ```
use crate::cal::datetime::Date;
use crate::clock::SystemClock;

/// Adds `Date::today() -> Date`
pub trait Today {
    fn today() -> Date;
}

impl Today for Date {
    fn today() -> Date {
        Date::today_with(&SystemClock)
    }
}
