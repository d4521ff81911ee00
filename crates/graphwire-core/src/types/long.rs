use crate::{
    error::ValueError,
    value::{FieldValue, Value, ValueTag},
};
use derive_more::{Add, AddAssign, Display, Sub, SubAssign};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

///
/// Long
///
/// Unbounded signed integer with a plain decimal wire form. Wraps a big
/// integer so values past the i64 range survive a wire round trip intact.
///

#[derive(
    Add, AddAssign, Clone, Debug, Default, Display, Eq, PartialEq, Hash, Ord, PartialOrd, Sub,
    SubAssign,
)]
pub struct Long(BigInt);

impl Long {
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.0).ok()
    }

    #[must_use]
    pub const fn inner(&self) -> &BigInt {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> BigInt {
        self.0
    }
}

impl From<BigInt> for Long {
    fn from(n: BigInt) -> Self {
        Self(n)
    }
}

impl From<i64> for Long {
    fn from(n: i64) -> Self {
        Self(BigInt::from(n))
    }
}

impl FieldValue for Long {
    fn tag() -> ValueTag {
        ValueTag::Long
    }

    fn to_value(&self) -> Value {
        Value::Long(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Long(v) => Some(v.clone()),
            Value::Int(v) => Some(Self::from(*v)),
            _ => None,
        }
    }
}

impl FromStr for Long {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_str(s).map(Self).map_err(|_| ValueError::Format {
            expected: "integer",
            text: s.to_string(),
        })
    }
}

impl Serialize for Long {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Long {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid integer: {s}")))
    }
}

///
/// TESTS
///
