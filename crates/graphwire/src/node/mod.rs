mod entity;
mod field;
mod label;
mod ui_message;

pub use entity::{DEFAULT_WEIGHT, Entity, EntityChild, EntityKind};
pub use field::{Field, MatchingRule};
pub use label::Label;
pub use ui_message::{UiMessage, UiMessageKind};

///
/// FieldHost
///
/// The seam between the schema layer and the structural tree collaborator:
/// everything a field descriptor needs from a node that owns an ordered
/// field collection. Append is amortized O(1); lookup and removal scan
/// linearly by wire name.
///

pub trait FieldHost {
    fn fields(&self) -> &[Field];

    fn fields_mut(&mut self) -> &mut Vec<Field>;

    fn field(&self, name: &str) -> Option<&Field> {
        self.fields().iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields_mut().iter_mut().find(|f| f.name == name)
    }

    fn push_field(&mut self, field: Field) {
        self.fields_mut().push(field);
    }

    fn remove_field(&mut self, name: &str) -> Option<Field> {
        let at = self.fields().iter().position(|f| f.name == name)?;

        Some(self.fields_mut().remove(at))
    }
}
