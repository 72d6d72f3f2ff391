#![crate_name = "civil"]
#![crate_type = "rlib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_results)]

//! Civil dates and date-times: calendar values with no time zone, for
//! things like birthdays and wall-clock schedules.
//!
//! # Examples
//!
//! ```
//! use civil::{Date, DateTime, DatePiece, TimePiece, Weekday};
//!
//! let date = Date::parse("2095/09/30").unwrap();
//! assert_eq!(date.weekday(), Weekday::Friday);
//!
//! let then = DateTime::parse("2195-060T030211").unwrap();
//! assert_eq!(then.to_string(), "2195-03-01T03:02:11");
//!
//! let later = then.add_date(0, 1, 0);
//! assert_eq!(later.month(), civil::Month::April);
//! assert_eq!(later.hour(), 3);
//! ```

mod cal;
pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::calendar::{Month, Weekday, Year, Error as DateTimeError};
pub use crate::cal::datetime::{Date, Time, DateTime};
pub use crate::cal::fmt::{ISO, ISOString};
pub use crate::cal::offset::{Offset, OffsetDateTime, BinaryError, Error as OffsetError};
pub use crate::cal::parse::{Error as ParseError, Malformed, Component};
pub use crate::cal::value::{Value, ScanError};
pub use crate::cal::convenience;

#[cfg(feature="format")]
pub use crate::cal::fmt::custom::{DateFormat, Field, Arguments, NumArguments, TextArguments, FormatError, LayoutError};

mod clock;
pub use crate::clock::{Clock, SystemClock, FixedClock};

mod duration;
pub use crate::duration::Duration;

mod instant;
pub use crate::instant::Instant;

mod system;
