use crate::node::{Field, FieldHost};
use serde::{Deserialize, Serialize};

///
/// Limits
///
/// Result-count limits the calling application supplies with a request.
/// Passed explicitly to the request constructor, never read from ambient
/// state.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    #[serde(rename = "SoftLimit")]
    pub soft: u32,

    #[serde(rename = "HardLimit")]
    pub hard: u32,
}

impl Limits {
    #[must_use]
    pub const fn new(soft: u32, hard: u32) -> Self {
        Self { soft, hard }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            soft: 500,
            hard: 10_000,
        }
    }
}

///
/// TransformRequest
///
/// The inbound half of a transform exchange: the selected value, its
/// attached fields, transform parameters, and the caller's limits.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransformRequest {
    pub value: String,

    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub fields: Vec<Field>,

    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub params: Vec<Field>,

    pub limits: Limits,
}

impl TransformRequest {
    pub fn new(value: impl Into<String>, limits: Limits) -> Self {
        Self {
            value: value.into(),
            fields: Vec::new(),
            params: Vec::new(),
            limits,
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_param(mut self, param: Field) -> Self {
        self.params.push(param);
        self
    }
}

impl FieldHost for TransformRequest {
    fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut Vec<Field> {
        &mut self.fields
    }
}

///
/// TESTS
///
