use crate::{
    error::ValueError,
    value::{FieldValue, Value, ValueTag},
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
    sync::OnceLock,
};

static MATCHER: OnceLock<Regex> = OnceLock::new();

///
/// Timespan
/// (in microseconds)
///
/// Canonical wire text is `%dd %dh%dm%d.%03ds`. The day component is emitted
/// as an absolute value (the wire format carries no sign) and the three
/// fractional digits carry milliseconds in both directions; sub-millisecond
/// precision is truncated on encode.
///

#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Timespan(i128);

impl Timespan {
    pub const ZERO: Self = Self(0);
    pub const MIN: Self = Self(i128::MIN);
    pub const MAX: Self = Self(i128::MAX);

    // ratio constants
    const MICROS_PER_MILLI: i128 = 1_000;
    const MICROS_PER_SEC: i128 = 1_000_000;
    const SECS_PER_MIN: i128 = 60;
    const SECS_PER_HOUR: i128 = 3_600;
    const SECS_PER_DAY: i128 = 86_400;
    const MICROS_PER_DAY: i128 = Self::SECS_PER_DAY * Self::MICROS_PER_SEC;

    // ---- Constructors ----

    #[must_use]
    pub const fn from_micros(micros: i128) -> Self {
        Self(micros)
    }

    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs as i128 * Self::MICROS_PER_SEC)
    }

    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        Self(days as i128 * Self::MICROS_PER_DAY)
    }

    /// Assemble a span from day/second/microsecond parts. Parts may each be
    /// negative or exceed their natural range; the total is normalized.
    #[must_use]
    pub const fn from_parts(days: i64, secs: i64, micros: i64) -> Self {
        Self(
            days as i128 * Self::MICROS_PER_DAY
                + secs as i128 * Self::MICROS_PER_SEC
                + micros as i128,
        )
    }

    // ---- Accessors ----

    #[must_use]
    pub const fn total_micros(self) -> i128 {
        self.0
    }

    /// Whole-day component, rounded toward negative infinity, so the sub-day
    /// remainder is always non-negative.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn days(self) -> i64 {
        self.0.div_euclid(Self::MICROS_PER_DAY) as i64
    }

    /// Seconds within the day (0–86399).
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn subday_seconds(self) -> u32 {
        (self.0.rem_euclid(Self::MICROS_PER_DAY) / Self::MICROS_PER_SEC) as u32
    }

    /// Microseconds within the second (0–999999).
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn subsec_micros(self) -> u32 {
        self.0.rem_euclid(Self::MICROS_PER_SEC) as u32
    }

    /// Parse the canonical `%dd %dh%dm%d.%03ds` form; the fractional field
    /// is read as milliseconds, mirroring what `Display` emits.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let matcher = MATCHER
            .get_or_init(|| Regex::new(r"^(\d+)d (\d+)h(\d+)m(\d+)\.(\d+)s$").unwrap());

        let caps = matcher.captures(s)?;
        let days: i64 = caps[1].parse().ok()?;
        let hours: i64 = caps[2].parse().ok()?;
        let minutes: i64 = caps[3].parse().ok()?;
        let seconds: i64 = caps[4].parse().ok()?;
        let millis: i64 = caps[5].parse().ok()?;

        let secs = hours
            .checked_mul(Self::SECS_PER_HOUR as i64)?
            .checked_add(minutes.checked_mul(Self::SECS_PER_MIN as i64)?)?
            .checked_add(seconds)?;

        Some(Self::from_parts(
            days,
            secs,
            millis.checked_mul(Self::MICROS_PER_MILLI as i64)?,
        ))
    }
}

impl Add for Timespan {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Timespan {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Timespan {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Timespan {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Debug for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timespan({self})")
    }
}

impl Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.subday_seconds();
        write!(
            f,
            "{}d {}h{}m{}.{:03}s",
            self.days().unsigned_abs(),
            secs / Self::SECS_PER_HOUR as u32,
            secs % Self::SECS_PER_HOUR as u32 / Self::SECS_PER_MIN as u32,
            secs % Self::SECS_PER_MIN as u32,
            self.subsec_micros() / Self::MICROS_PER_MILLI as u32,
        )
    }
}

impl FieldValue for Timespan {
    fn tag() -> ValueTag {
        ValueTag::Timespan
    }

    fn to_value(&self) -> Value {
        Value::Timespan(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Timespan(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromStr for Timespan {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValueError::Format {
            expected: "timespan",
            text: s.to_string(),
        })
    }
}

impl Serialize for Timespan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Timespan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid timespan: {s}")))
    }
}

///
/// TESTS
///
