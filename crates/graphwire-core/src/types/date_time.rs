use crate::{
    error::ValueError,
    types::Date,
    value::{FieldValue, Value, ValueTag},
};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
    sync::OnceLock,
};
use time::{
    Date as TimeDate, Duration as TimeDuration, Month, PrimitiveDateTime, Time,
    format_description::FormatItem,
};

static FORMAT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();

///
/// DateTime
///
/// A calendar timestamp stored as microseconds since the Unix epoch.
/// Canonical wire text is `YYYY-MM-DD HH:MM:SS.ffffff` with six subsecond
/// digits always present; any other shape fails to parse.
///

#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct DateTime(i64);

impl DateTime {
    pub const EPOCH: Self = Self(0);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    const MICROS_PER_SEC: i64 = 1_000_000;

    const fn epoch_date_time() -> PrimitiveDateTime {
        PrimitiveDateTime::new(Date::epoch_date(), Time::MIDNIGHT)
    }

    #[must_use]
    pub fn new_checked(y: i32, m: u8, d: u8, h: u8, min: u8, s: u8, micro: u32) -> Option<Self> {
        let month = Month::try_from(m).ok()?;
        let date = TimeDate::from_calendar_date(y, month, d).ok()?;
        let time = Time::from_hms_micro(h, min, s, micro).ok()?;

        Some(Self::from_primitive(PrimitiveDateTime::new(date, time)))
    }

    #[must_use]
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Microseconds within the current second (0–999999).
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn subsec_micros(self) -> u32 {
        self.0.rem_euclid(Self::MICROS_PER_SEC) as u32
    }

    /// The calendar day this timestamp falls on.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn date(self) -> Date {
        let days = self.0.div_euclid(86_400 * Self::MICROS_PER_SEC) as i32;

        Date::from_days(days)
    }

    /// Parse an exact `YYYY-MM-DD HH:MM:SS.ffffff` string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let format = FORMAT.get_or_init(|| {
            time::format_description::parse(
                "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]",
            )
            .unwrap()
        });

        PrimitiveDateTime::parse(s, format)
            .ok()
            .map(Self::from_primitive)
    }

    #[expect(clippy::cast_possible_truncation)]
    fn from_primitive(dt: PrimitiveDateTime) -> Self {
        let epoch = Self::epoch_date_time();
        let micros = (dt - epoch).whole_microseconds();

        Self(micros as i64)
    }

    fn to_primitive(self) -> PrimitiveDateTime {
        let epoch = Self::epoch_date_time();
        let delta = TimeDuration::microseconds(self.0);
        epoch.checked_add(delta).unwrap_or({
            if self.0 >= 0 {
                PrimitiveDateTime::MAX
            } else {
                PrimitiveDateTime::MIN
            }
        })
    }
}

impl Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateTime({self})")
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = self.to_primitive();
        let month: u8 = dt.month().into();
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06}",
            dt.year(),
            month,
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            dt.microsecond(),
        )
    }
}

impl FieldValue for DateTime {
    fn tag() -> ValueTag {
        ValueTag::DateTime
    }

    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::DateTime(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromStr for DateTime {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValueError::Format {
            expected: "date-time",
            text: s.to_string(),
        })
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid date-time: {s}")))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_six_subsecond_digits() {
        let dt = DateTime::new_checked(2024, 10, 19, 1, 2, 3, 5).unwrap();
        assert_eq!(format!("{dt}"), "2024-10-19 01:02:03.000005");
    }

    #[test]
    fn parse_requires_exact_format() {
        assert!(DateTime::parse("2024-10-19 01:02:03.000005").is_some());
        assert!(DateTime::parse("2024-10-19 01:02:03").is_none());
        assert!(DateTime::parse("2024-10-19T01:02:03.000005").is_none());
        assert!(DateTime::parse("2024-10-19").is_none());
    }

    #[test]
    fn display_parse_round_trip() {
        let dt = DateTime::new_checked(1999, 12, 31, 23, 59, 59, 999_999).unwrap();
        assert_eq!(DateTime::parse(&dt.to_string()), Some(dt));
    }

    #[test]
    fn epoch_is_midnight() {
        assert_eq!(format!("{}", DateTime::EPOCH), "1970-01-01 00:00:00.000000");
        assert_eq!(DateTime::EPOCH.date(), Date::EPOCH);
    }

    #[test]
    fn pre_epoch_timestamps_are_negative() {
        let dt = DateTime::parse("1969-12-31 23:59:59.999999").unwrap();
        assert_eq!(dt.get(), -1);
        assert_eq!(dt.subsec_micros(), 999_999);
    }
}
