//! Graphwire: a typed field/schema model for the message trees exchanged
//! with a graph-visualization application. Field descriptors give node types
//! named, typed, validated accessors over textual backing nodes; the schema
//! composer fixes their declared wire order. Serialization of the assembled
//! tree to wire XML is delegated to the consumer.

mod macros;

pub mod message;
pub mod node;
pub mod schema;

use graphwire_core::error::{SchemaError, ValueError};
use thiserror::Error as ThisError;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        Error,
        message::{
            ExceptionMessage, Limits, Message, ResponseItem, TransformException,
            TransformRequest, TransformResponse,
        },
        node::{
            Entity, EntityChild, EntityKind, Field, FieldHost, Label, MatchingRule, UiMessage,
            UiMessageKind,
        },
        schema::{Decorator, FieldDescriptor, FieldSpec, Schema},
    };
    pub use graphwire_core::prelude::*;
}

///
/// Error
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Value(#[from] ValueError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
