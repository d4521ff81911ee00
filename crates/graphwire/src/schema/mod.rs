mod descriptor;

pub use descriptor::{Decorator, FieldDescriptor, FieldSpec};

use crate::{Error, node::FieldHost};
use graphwire_core::{
    error::SchemaError,
    value::{FieldValue, Value},
};

///
/// Schema
///
/// The ordered field-descriptor table of one host type, produced from a
/// declaration table at definition time. Declaration order is wire order:
/// setting fields in table order on a fresh instance appends their backing
/// nodes in the same sequence.
///

#[derive(Clone, Debug, Default)]
pub struct Schema {
    descriptors: Vec<FieldDescriptor>,
}

impl Schema {
    /// Compile a declaration table. Specs without a wire name and accessor
    /// collisions are definition-time errors.
    pub fn compose(specs: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        let mut descriptors: Vec<FieldDescriptor> = Vec::with_capacity(specs.len());
        for spec in specs {
            let descriptor = spec.compile()?;
            if descriptors
                .iter()
                .any(|d| d.accessor() == descriptor.accessor())
            {
                return Err(SchemaError::DuplicateAccessor {
                    accessor: descriptor.accessor().to_string(),
                });
            }
            descriptors.push(descriptor);
        }

        Ok(Self { descriptors })
    }

    #[must_use]
    pub fn descriptor(&self, accessor: &str) -> Option<&FieldDescriptor> {
        self.descriptors.iter().find(|d| d.accessor() == accessor)
    }

    /// Descriptors in declaration order.
    #[must_use]
    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn get(&self, owner: &dyn FieldHost, accessor: &str) -> Result<Option<Value>, Error> {
        self.lookup(accessor)?.get(owner)
    }

    pub fn set(
        &self,
        owner: &mut dyn FieldHost,
        accessor: &str,
        value: Option<Value>,
    ) -> Result<(), Error> {
        self.lookup(accessor)?.set(owner, value)
    }

    pub fn get_as<T: FieldValue>(
        &self,
        owner: &dyn FieldHost,
        accessor: &str,
    ) -> Result<Option<T>, Error> {
        self.lookup(accessor)?.get_as(owner)
    }

    pub fn set_to<T: FieldValue>(
        &self,
        owner: &mut dyn FieldHost,
        accessor: &str,
        value: Option<T>,
    ) -> Result<(), Error> {
        self.lookup(accessor)?.set_to(owner, value)
    }

    fn lookup(&self, accessor: &str) -> Result<&FieldDescriptor, SchemaError> {
        self.descriptor(accessor)
            .ok_or_else(|| SchemaError::UnknownAccessor {
                accessor: accessor.to_string(),
            })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_preserves_declaration_order() {
        let schema = Schema::compose(vec![
            FieldSpec::new("b.field"),
            FieldSpec::new("a.field"),
            FieldSpec::new("c.field"),
        ])
        .unwrap();

        let accessors: Vec<&str> = schema.descriptors().iter().map(|d| d.accessor()).collect();
        assert_eq!(accessors, ["b_field", "a_field", "c_field"]);
    }

    #[test]
    fn compose_rejects_duplicate_accessors() {
        let err = Schema::compose(vec![
            FieldSpec::new("some.field"),
            FieldSpec::new("some#field"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            SchemaError::DuplicateAccessor {
                accessor: "some_field".to_string(),
            }
        );
    }

    #[test]
    fn compose_rejects_missing_names() {
        let err = Schema::compose(vec![FieldSpec::new("")]).unwrap_err();
        assert_eq!(err, SchemaError::MissingName);
    }

    #[test]
    fn unknown_accessor_lookup_fails() {
        let schema = Schema::compose(vec![FieldSpec::new("known")]).unwrap();
        assert!(schema.descriptor("unknown").is_none());
        assert!(matches!(
            schema.lookup("unknown"),
            Err(SchemaError::UnknownAccessor { .. })
        ));
    }
}
