use crate::{
    Error,
    node::{Field, FieldHost, MatchingRule},
};
use graphwire_core::{
    error::{SchemaError, ValueError},
    value::{FieldValue, Value, ValueKind},
};

///
/// Decorator
///
/// Side-effect hook invoked after every successful non-removal write,
/// with the owner node and the value just written. Failures propagate to
/// the caller; the write itself has already landed.
///

pub type Decorator = fn(&mut dyn FieldHost, &Value) -> Result<(), Error>;

///
/// FieldSpec
///
/// One entry of a field declaration table. Compiling a spec yields the
/// immutable descriptor; composing a whole table yields a `Schema`.
///

#[derive(Clone, Debug)]
pub struct FieldSpec {
    name: String,
    accessor: Option<String>,
    display_name: Option<String>,
    kind: ValueKind,
    matching_rule: MatchingRule,
    decorator: Option<Decorator>,
    link: bool,
}

impl FieldSpec {
    /// An ordinary field. Its display name defaults to the title-cased wire
    /// name unless overridden.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accessor: None,
            display_name: None,
            kind: ValueKind::default(),
            matching_rule: MatchingRule::default(),
            decorator: None,
            link: false,
        }
    }

    /// A link field: the wire name is prefixed `link#` and no display name
    /// is defaulted.
    pub fn link(name: impl Into<String>) -> Self {
        let mut spec = Self::new(format!("link#{}", name.into()));
        spec.link = true;
        spec
    }

    /// Link metadata whose wire name is already fully spelled (`notes#`,
    /// `bookmark#`); taken verbatim, no display name defaulted.
    pub fn link_meta(name: impl Into<String>) -> Self {
        let mut spec = Self::new(name);
        spec.link = true;
        spec
    }

    #[must_use]
    pub fn accessor(mut self, accessor: impl Into<String>) -> Self {
        self.accessor = Some(accessor.into());
        self
    }

    #[must_use]
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub const fn matching_rule(mut self, rule: MatchingRule) -> Self {
        self.matching_rule = rule;
        self
    }

    #[must_use]
    pub fn decorator(mut self, decorator: Decorator) -> Self {
        self.decorator = Some(decorator);
        self
    }

    /// Compile into the immutable descriptor. A spec without a wire name
    /// cannot be compiled.
    pub fn compile(self) -> Result<FieldDescriptor, SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::MissingName);
        }

        let accessor = self
            .accessor
            .unwrap_or_else(|| derive_accessor(&self.name));

        let display_name = match self.display_name {
            Some(d) => Some(d),
            None if self.link => None,
            None => Some(title_case(&self.name)),
        };

        Ok(FieldDescriptor {
            name: self.name,
            accessor,
            display_name,
            kind: self.kind,
            matching_rule: self.matching_rule,
            decorator: self.decorator,
        })
    }
}

///
/// FieldDescriptor
///
/// A named, typed accessor bound to a host type: schema, not per-instance
/// state. Built once at definition time and shared read-only across every
/// instance of the owning type.
///

#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    name: String,
    accessor: String,
    display_name: Option<String>,
    kind: ValueKind,
    matching_rule: MatchingRule,
    decorator: Option<Decorator>,
}

impl FieldDescriptor {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn accessor(&self) -> &str {
        &self.accessor
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    #[must_use]
    pub const fn kind(&self) -> &ValueKind {
        &self.kind
    }

    #[must_use]
    pub const fn matching_rule(&self) -> MatchingRule {
        self.matching_rule
    }

    /// Read the backing field from `owner`. Absence is `Ok(None)`, never an
    /// error.
    pub fn get(&self, owner: &dyn FieldHost) -> Result<Option<Value>, Error> {
        match owner.field(&self.name) {
            None => Ok(None),
            Some(field) => Ok(Some(self.kind.decode(&field.text)?)),
        }
    }

    /// Write `value` into `owner`'s backing field. `None` removes the field;
    /// validation happens before any mutation, so a failed write leaves the
    /// owner untouched.
    pub fn set(&self, owner: &mut dyn FieldHost, value: Option<Value>) -> Result<(), Error> {
        let Some(value) = value else {
            let _ = owner.remove_field(&self.name);
            return Ok(());
        };

        let text = self.kind.encode(&value)?;

        if let Some(field) = owner.field_mut(&self.name) {
            field.text = text;
        } else {
            let mut field = Field::new(&self.name, text).with_matching_rule(self.matching_rule);
            if let Some(display_name) = &self.display_name {
                field = field.with_display_name(display_name);
            }
            owner.push_field(field);
        }

        if let Some(decorator) = self.decorator {
            decorator(owner, &value)?;
        }

        Ok(())
    }

    /// Typed read through the `Value` union.
    pub fn get_as<T: FieldValue>(&self, owner: &dyn FieldHost) -> Result<Option<T>, Error> {
        match self.get(owner)? {
            None => Ok(None),
            Some(value) => T::from_value(&value).map(Some).ok_or_else(|| {
                ValueError::TypeMismatch {
                    expected: T::tag().label(),
                    got: value.tag(),
                }
                .into()
            }),
        }
    }

    /// Typed write through the `Value` union.
    pub fn set_to<T: FieldValue>(
        &self,
        owner: &mut dyn FieldHost,
        value: Option<T>,
    ) -> Result<(), Error> {
        self.set(owner, value.map(|v| v.to_value()))
    }
}

/// Default accessor name: every run of non-word characters collapses to a
/// single underscore.
fn derive_accessor(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if c.is_alphanumeric() || c == '_' {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }

    out
}

/// Title-case in the style display names default to: the first letter of
/// every alphabetic run is uppercased, the rest lowercased.
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_alpha = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

///
/// TESTS
///
