//! Value layer for graphwire: the domain scalar types, the tagged value
//! union, the per-kind text codecs, and the error taxonomy shared by the
//! schema layer.

pub mod error;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        error::{ErrorClass, SchemaError, ValueError},
        types::{Date, DateTime, Long, Timespan},
        value::{ChoiceSet, FieldPattern, FieldValue, Value, ValueKind, ValueTag},
    };
}
