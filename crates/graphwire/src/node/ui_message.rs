use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// UiMessageKind
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, Serialize, Deserialize)]
pub enum UiMessageKind {
    #[display("FatalError")]
    FatalError,

    #[display("PartialError")]
    PartialError,

    #[default]
    #[display("Inform")]
    Inform,

    #[display("Debug")]
    Debug,
}

///
/// UiMessage
///
/// A notice surfaced to the user of the receiving application alongside, or
/// instead of, returned entities.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UiMessage {
    #[serde(rename = "MessageType")]
    pub kind: UiMessageKind,

    pub text: String,
}

impl UiMessage {
    pub fn new(kind: UiMessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn inform(text: impl Into<String>) -> Self {
        Self::new(UiMessageKind::Inform, text)
    }

    pub fn debug(text: impl Into<String>) -> Self {
        Self::new(UiMessageKind::Debug, text)
    }

    pub fn partial_error(text: impl Into<String>) -> Self {
        Self::new(UiMessageKind::PartialError, text)
    }

    pub fn fatal_error(text: impl Into<String>) -> Self {
        Self::new(UiMessageKind::FatalError, text)
    }
}

///
/// TESTS
///
