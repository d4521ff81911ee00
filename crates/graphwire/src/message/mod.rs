mod exception;
mod request;
mod response;

pub use exception::{ExceptionMessage, TransformException};
pub use request::{Limits, TransformRequest};
pub use response::{ResponseItem, TransformResponse};

use serde::Serialize;

///
/// Message
///
/// The one-of envelope a transform run hands to serialization: either a
/// response payload or an exception payload, tagged by its wire element
/// name.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Message {
    #[serde(rename = "MaltegoTransformResponseMessage")]
    Response(TransformResponse),

    #[serde(rename = "MaltegoTransformExceptionMessage")]
    Exception(ExceptionMessage),
}

impl Message {
    #[must_use]
    pub const fn is_exception(&self) -> bool {
        matches!(self, Self::Exception(_))
    }
}

impl From<TransformResponse> for Message {
    fn from(message: TransformResponse) -> Self {
        Self::Response(message)
    }
}

impl From<ExceptionMessage> for Message {
    fn from(message: ExceptionMessage) -> Self {
        Self::Exception(message)
    }
}

///
/// TESTS
///
