use crate::{
    error::ValueError,
    types::{Date, DateTime, Long, Timespan},
    value::Value,
};
use regex::Regex;
use std::{
    fmt,
    str::FromStr,
    sync::LazyLock,
};

static COLOR: LazyLock<FieldPattern> =
    LazyLock::new(|| FieldPattern::new("#[0-9a-fA-F]{6}").expect("color pattern is valid"));

///
/// ValueKind
///
/// Per-field codec selector. `encode` validates before producing wire text
/// and never mutates anything; `decode` is its inverse over stored text.
/// Absence of a backing node is represented by the caller, not here:
/// decoding only ever sees text that exists.
///

#[derive(Clone, Debug, Default)]
pub enum ValueKind {
    #[default]
    Text,
    Enum(ChoiceSet),
    Int,
    Long,
    Float,
    Bool,
    Date,
    DateTime,
    Timespan,
    Pattern(FieldPattern),
    Color,
}

impl ValueKind {
    /// Validate `value` against this kind and produce its wire text.
    pub fn encode(&self, value: &Value) -> Result<String, ValueError> {
        match self {
            Self::Text => Ok(value.canonical_text()),

            Self::Enum(choices) => {
                let text = value.canonical_text();
                if choices.contains(&text) {
                    Ok(text)
                } else {
                    Err(ValueError::NotInChoices {
                        value: text,
                        choices: choices.to_vec(),
                    })
                }
            }

            Self::Int => match value {
                Value::Int(v) => Ok(v.to_string()),
                other => Err(Self::mismatch("integer", other)),
            },

            Self::Long => match value {
                Value::Long(v) => Ok(v.to_string()),
                Value::Int(v) => Ok(v.to_string()),
                other => Err(Self::mismatch("long", other)),
            },

            Self::Float => match value {
                Value::Float(v) => Ok(v.to_string()),
                Value::Int(v) => Ok(v.to_string()),
                other => Err(Self::mismatch("float", other)),
            },

            Self::Bool => match value {
                Value::Bool(v) => Ok(if *v { "true" } else { "false" }.to_string()),
                other => Err(Self::mismatch("boolean", other)),
            },

            Self::Date => match value {
                Value::Date(v) => Ok(v.to_string()),
                other => Err(Self::mismatch("date", other)),
            },

            Self::DateTime => match value {
                Value::DateTime(v) => Ok(v.to_string()),
                other => Err(Self::mismatch("date-time", other)),
            },

            Self::Timespan => match value {
                Value::Timespan(v) => Ok(v.to_string()),
                other => Err(Self::mismatch("timespan", other)),
            },

            Self::Pattern(pattern) => pattern.check(value.canonical_text()),

            Self::Color => COLOR.check(value.canonical_text()),
        }
    }

    /// Reconstruct a structured value from stored wire text.
    pub fn decode(&self, text: &str) -> Result<Value, ValueError> {
        match self {
            Self::Text | Self::Enum(_) | Self::Pattern(_) | Self::Color => {
                Ok(Value::Text(text.to_string()))
            }

            Self::Int => text
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| Self::malformed("integer", text)),

            Self::Long => Long::from_str(text)
                .map(Value::Long)
                .map_err(|_| Self::malformed("long", text)),

            Self::Float => text
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| Self::malformed("float", text)),

            // equality with the lowercase literal; anything else reads false
            Self::Bool => Ok(Value::Bool(text == "true")),

            Self::Date => Date::parse(text)
                .map(Value::Date)
                .ok_or_else(|| Self::malformed("date", text)),

            Self::DateTime => DateTime::parse(text)
                .map(Value::DateTime)
                .ok_or_else(|| Self::malformed("date-time", text)),

            Self::Timespan => Timespan::parse(text)
                .map(Value::Timespan)
                .ok_or_else(|| Self::malformed("timespan", text)),
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Enum(_) => "enum",
            Self::Int => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Bool => "boolean",
            Self::Date => "date",
            Self::DateTime => "date-time",
            Self::Timespan => "timespan",
            Self::Pattern(_) => "pattern",
            Self::Color => "color",
        }
    }

    const fn mismatch(expected: &'static str, got: &Value) -> ValueError {
        ValueError::TypeMismatch {
            expected,
            got: got.tag(),
        }
    }

    fn malformed(expected: &'static str, text: &str) -> ValueError {
        ValueError::Format {
            expected,
            text: text.to_string(),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

///
/// ChoiceSet
///
/// Ordered, deduplicated set of allowed wire texts for an enumerated field.
/// Non-string choices are stringified once, at declaration time.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ChoiceSet(Vec<String>);

impl ChoiceSet {
    pub fn new<I, T>(choices: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        let mut seen = Vec::new();
        for choice in choices {
            let text = choice.to_string();
            if !seen.contains(&text) {
                seen.push(text);
            }
        }

        Self(seen)
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.0.iter().any(|c| c == text)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

///
/// FieldPattern
///
/// A full-match regular expression constraining a textual field. The
/// default pattern matches anything; the match is always anchored over the
/// whole input.
///

#[derive(Clone, Debug)]
pub struct FieldPattern {
    source: String,
    regex: Regex,
}

impl FieldPattern {
    pub fn new(source: impl Into<String>) -> Result<Self, ValueError> {
        let source = source.into();
        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|_| ValueError::Format {
            expected: "regular expression",
            text: source.clone(),
        })?;

        Ok(Self { source, regex })
    }

    /// The match-anything default.
    #[must_use]
    pub fn any() -> Self {
        Self::new("(?s).*").expect("default pattern is valid")
    }

    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    fn check(&self, text: String) -> Result<String, ValueError> {
        if self.is_match(&text) {
            Ok(text)
        } else {
            Err(ValueError::PatternMismatch {
                value: text,
                pattern: self.source.clone(),
            })
        }
    }
}

impl PartialEq for FieldPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for FieldPattern {}
