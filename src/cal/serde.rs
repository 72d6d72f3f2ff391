//! Serde support, using the canonical text form.

use std::fmt;

use ::serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::cal::datetime::{Date, DateTime};
use crate::cal::encode::utf8;
use crate::cal::parse::parse_date_time;


impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}


struct DateTimeVisitor;

impl<'de> de::Visitor<'de> for DateTimeVisitor {
    type Value = DateTime;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an ISO 8601 date or date-time string")
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<DateTime, E> {
        utf8(value)
            .and_then(parse_date_time)
            .map_err(de::Error::custom)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<DateTime, E> {
        parse_date_time(value).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<DateTime, D::Error> {
        deserializer.deserialize_str(DateTimeVisitor)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        deserializer.deserialize_str(DateTimeVisitor).map(|dt| dt.date())
    }
}
