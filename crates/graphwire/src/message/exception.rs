use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// TransformException
///
/// A failed transform's payload. Doubles as a real error type so a run can
/// both return it to the caller and ship it on the wire.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ThisError)]
#[error("{message}")]
pub struct TransformException {
    pub message: String,
}

impl TransformException {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for TransformException {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for TransformException {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

///
/// ExceptionMessage
///
/// Ordered collection of exception payloads. Anything stringifiable can be
/// appended; plain text is wrapped into an exception.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ExceptionMessage {
    #[serde(rename = "Exceptions")]
    pub exceptions: Vec<TransformException>,
}

impl ExceptionMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, exception: impl Into<TransformException>) {
        self.exceptions.push(exception.into());
    }

    #[must_use]
    pub fn with(mut self, exception: impl Into<TransformException>) -> Self {
        self.append(exception);
        self
    }
}

///
/// TESTS
///
