use crate::{
    error::ValueError,
    types::{Date, DateTime, Long, Timespan},
    value::{ChoiceSet, FieldPattern, Value, ValueKind, ValueTag},
};
use proptest::prelude::*;

// ---- helpers -----------------------------------------------------------

fn round_trip(kind: &ValueKind, value: Value) -> Value {
    let text = kind.encode(&value).expect("encode");
    kind.decode(&text).expect("decode")
}

fn arb_date() -> impl Strategy<Value = Date> {
    // stay inside the four-digit-year window the wire format can carry
    (-600_000i32..2_900_000i32).prop_map(Date::from_days)
}

fn arb_date_time() -> impl Strategy<Value = DateTime> {
    let bound = 2_900_000i64 * 86_400 * 1_000_000;
    (-600_000i64 * 86_400 * 1_000_000..bound).prop_map(DateTime::from_micros)
}

fn arb_timespan() -> impl Strategy<Value = Timespan> {
    // non-negative, whole milliseconds: the wire form carries no sign and
    // truncates to three fractional digits
    (0i64..10_000_000_000).prop_map(|ms| Timespan::from_micros(i128::from(ms) * 1_000))
}

// ---- unit: per-kind semantics ------------------------------------------

#[test]
fn text_accepts_any_variant() {
    assert_eq!(ValueKind::Text.encode(&Value::from("hi")).unwrap(), "hi");
    assert_eq!(ValueKind::Text.encode(&Value::Int(7)).unwrap(), "7");
    assert_eq!(ValueKind::Text.encode(&Value::Bool(true)).unwrap(), "true");
    assert_eq!(ValueKind::Text.encode(&Value::from("")).unwrap(), "");
}

#[test]
fn enum_rejects_non_members() {
    let kind = ValueKind::Enum(ChoiceSet::new([0, 1]));
    assert_eq!(kind.encode(&Value::Int(1)).unwrap(), "1");
    assert_eq!(kind.encode(&Value::from("0")).unwrap(), "0");

    let err = kind.encode(&Value::Int(2)).unwrap_err();
    assert_eq!(
        err,
        ValueError::NotInChoices {
            value: "2".to_string(),
            choices: vec!["0".to_string(), "1".to_string()],
        }
    );
}

#[test]
fn int_requires_integer_variant() {
    assert_eq!(ValueKind::Int.encode(&Value::Int(-3)).unwrap(), "-3");

    let err = ValueKind::Int.encode(&Value::from("3")).unwrap_err();
    assert_eq!(
        err,
        ValueError::TypeMismatch {
            expected: "integer",
            got: ValueTag::Text,
        }
    );
    assert!(ValueKind::Int.encode(&Value::Float(3.0)).is_err());
}

#[test]
fn long_widens_from_int() {
    assert_eq!(ValueKind::Long.encode(&Value::Int(9)).unwrap(), "9");
    let big: Long = "123456789012345678901234567890".parse().unwrap();
    assert_eq!(
        ValueKind::Long.encode(&Value::Long(big.clone())).unwrap(),
        "123456789012345678901234567890"
    );
    assert_eq!(
        ValueKind::Long.decode("123456789012345678901234567890").unwrap(),
        Value::Long(big)
    );
}

#[test]
fn bool_is_never_truthy() {
    assert_eq!(ValueKind::Bool.encode(&Value::Bool(true)).unwrap(), "true");
    assert_eq!(ValueKind::Bool.encode(&Value::Bool(false)).unwrap(), "false");
    assert!(ValueKind::Bool.encode(&Value::Int(1)).is_err());
    assert!(ValueKind::Bool.encode(&Value::from("true")).is_err());

    assert_eq!(ValueKind::Bool.decode("true").unwrap(), Value::Bool(true));
    assert_eq!(ValueKind::Bool.decode("false").unwrap(), Value::Bool(false));
    assert_eq!(ValueKind::Bool.decode("TRUE").unwrap(), Value::Bool(false));
}

#[test]
fn date_kind_uses_exact_format() {
    let date = Date::new_checked(2024, 2, 29).unwrap();
    assert_eq!(ValueKind::Date.encode(&Value::Date(date)).unwrap(), "2024-02-29");
    assert_eq!(ValueKind::Date.decode("2024-02-29").unwrap(), Value::Date(date));

    let err = ValueKind::Date.decode("29/02/2024").unwrap_err();
    assert!(matches!(err, ValueError::Format { expected: "date", .. }));
}

#[test]
fn timespan_decode_failure_is_a_format_error() {
    let err = ValueKind::Timespan.decode("four score").unwrap_err();
    assert!(matches!(err, ValueError::Format { expected: "timespan", .. }));
}

#[test]
fn color_pattern_narrows_to_hex_rgb() {
    assert_eq!(
        ValueKind::Color.encode(&Value::from("#1a2b3c")).unwrap(),
        "#1a2b3c"
    );
    assert_eq!(
        ValueKind::Color.decode("#1a2b3c").unwrap(),
        Value::Text("#1a2b3c".to_string())
    );

    let err = ValueKind::Color.encode(&Value::from("red")).unwrap_err();
    assert_eq!(
        err,
        ValueError::PatternMismatch {
            value: "red".to_string(),
            pattern: "#[0-9a-fA-F]{6}".to_string(),
        }
    );
}

#[test]
fn default_pattern_matches_anything() {
    let kind = ValueKind::Pattern(FieldPattern::any());
    assert_eq!(kind.encode(&Value::from("anything\nat all")).unwrap(), "anything\nat all");
    assert_eq!(kind.encode(&Value::from("")).unwrap(), "");
}

#[test]
fn custom_pattern_is_fully_anchored() {
    let kind = ValueKind::Pattern(FieldPattern::new("[a-z]+").unwrap());
    assert!(kind.encode(&Value::from("abc")).is_ok());
    assert!(kind.encode(&Value::from("abc1")).is_err());
    assert!(kind.encode(&Value::from("1abc")).is_err());
}

#[test]
fn invalid_pattern_source_is_rejected() {
    assert!(FieldPattern::new("(unclosed").is_err());
}

// ---- property: round trips ---------------------------------------------

proptest! {
    #[test]
    fn text_round_trips(s in ".*") {
        let value = Value::Text(s);
        prop_assert_eq!(round_trip(&ValueKind::Text, value.clone()), value);
    }

    #[test]
    fn int_round_trips(v in any::<i64>()) {
        let value = Value::Int(v);
        prop_assert_eq!(round_trip(&ValueKind::Int, value.clone()), value);
    }

    #[test]
    fn long_round_trips(v in any::<i128>()) {
        let long: Long = v.to_string().parse().unwrap();
        let value = Value::Long(long);
        prop_assert_eq!(round_trip(&ValueKind::Long, value.clone()), value);
    }

    #[test]
    fn float_round_trips(v in -1.0e12f64..1.0e12f64) {
        let value = Value::Float(v);
        prop_assert_eq!(round_trip(&ValueKind::Float, value.clone()), value);
    }

    #[test]
    fn bool_round_trips(v in any::<bool>()) {
        let value = Value::Bool(v);
        prop_assert_eq!(round_trip(&ValueKind::Bool, value.clone()), value);
    }

    #[test]
    fn date_round_trips(date in arb_date()) {
        let value = Value::Date(date);
        prop_assert_eq!(round_trip(&ValueKind::Date, value.clone()), value);
    }

    #[test]
    fn date_time_round_trips(dt in arb_date_time()) {
        let value = Value::DateTime(dt);
        prop_assert_eq!(round_trip(&ValueKind::DateTime, value.clone()), value);
    }

    #[test]
    fn timespan_round_trips(span in arb_timespan()) {
        let value = Value::Timespan(span);
        prop_assert_eq!(round_trip(&ValueKind::Timespan, value.clone()), value);
    }
}

// ---- boundary values ----------------------------------------------------

#[test]
fn boundary_round_trips() {
    for value in [
        Value::Int(0),
        Value::Int(-1),
        Value::Int(i64::MIN),
        Value::Text(String::new()),
        Value::Date(Date::new_checked(2000, 2, 29).unwrap()),
        Value::Timespan(Timespan::ZERO),
        Value::Timespan(Timespan::from_parts(0, 86_399, 999_000)),
    ] {
        let kind = match value.tag() {
            ValueTag::Int => ValueKind::Int,
            ValueTag::Text => ValueKind::Text,
            ValueTag::Date => ValueKind::Date,
            ValueTag::Timespan => ValueKind::Timespan,
            _ => unreachable!(),
        };
        assert_eq!(round_trip(&kind, value.clone()), value);
    }
}
