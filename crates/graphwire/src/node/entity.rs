use crate::{
    field_accessors,
    node::{Field, FieldHost, Label, MatchingRule},
    schema::FieldSpec,
};
use graphwire_core::value::{ChoiceSet, ValueKind};
use serde::Serialize;

/// Wire weight every entity starts with.
pub const DEFAULT_WEIGHT: u32 = 1;

///
/// EntityKind
///
/// Vocabulary marker for a concrete entity type. The wire type identifier
/// defaults to `<namespace>.<name>`.
///

pub trait EntityKind {
    const NAMESPACE: &'static str = "maltego";
    const NAME: &'static str;

    #[must_use]
    fn entity_type() -> String {
        format!("{}.{}", Self::NAMESPACE, Self::NAME)
    }
}

///
/// Entity
///
/// The principal message-tree node: one graph node plus its field and label
/// payload. The wire type is fixed at construction and never re-derived;
/// fields and labels are owned exclusively and keep insertion order, which
/// is the order they reach the wire.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Entity {
    #[serde(rename = "Type")]
    entity_type: String,

    pub value: String,

    pub weight: u32,

    #[serde(rename = "IconURL", skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    #[serde(rename = "AdditionalFields", skip_serializing_if = "<[_]>::is_empty")]
    pub fields: Vec<Field>,

    #[serde(rename = "DisplayInformation", skip_serializing_if = "<[_]>::is_empty")]
    pub labels: Vec<Label>,
}

impl Entity {
    /// An entity with an explicit wire type override.
    pub fn with_type(entity_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            value: value.into(),
            weight: DEFAULT_WEIGHT,
            icon_url: None,
            fields: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// An entity of a declared kind; the wire type derives from the kind's
    /// namespace and name.
    pub fn of<K: EntityKind>(value: impl Into<String>) -> Self {
        Self::with_type(K::entity_type(), value)
    }

    #[must_use]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    #[must_use]
    pub const fn weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Route a child to its collection by kind.
    pub fn append(&mut self, child: impl Into<EntityChild>) {
        match child.into() {
            EntityChild::Field(field) => self.fields.push(field),
            EntityChild::Label(label) => self.labels.push(label),
        }
    }

    /// Remove the first child equal to `child`; removing an absent child is
    /// a no-op.
    pub fn remove(&mut self, child: &EntityChild) {
        match child {
            EntityChild::Field(field) => {
                if let Some(at) = self.fields.iter().position(|f| f == field) {
                    self.fields.remove(at);
                }
            }
            EntityChild::Label(label) => {
                if let Some(at) = self.labels.iter().position(|l| l == label) {
                    self.labels.remove(at);
                }
            }
        }
    }
}

impl FieldHost for Entity {
    fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut Vec<Field> {
        &mut self.fields
    }
}

// Link metadata rides the ordinary field mechanism, distinguished only by
// its wire names; all of it reconciles loosely.
field_accessors! {
    impl Entity {
        /// Free-form analyst notes attached to the node.
        notes / set_notes: String =>
            FieldSpec::link_meta("notes#").matching_rule(MatchingRule::Loose);

        bookmark / set_bookmark: i64 =>
            FieldSpec::link_meta("bookmark#")
                .kind(ValueKind::Int)
                .matching_rule(MatchingRule::Loose);

        /// Caption shown on the incoming link.
        link_label / set_link_label: String =>
            FieldSpec::link("maltego.link.label").matching_rule(MatchingRule::Loose);

        link_style / set_link_style: i64 =>
            FieldSpec::link("maltego.link.style")
                .kind(ValueKind::Int)
                .matching_rule(MatchingRule::Loose);

        link_show_label / set_link_show_label: String =>
            FieldSpec::link("maltego.link.show-label")
                .kind(ValueKind::Enum(ChoiceSet::new([0, 1])))
                .matching_rule(MatchingRule::Loose);

        link_color / set_link_color: String =>
            FieldSpec::link("maltego.link.color").matching_rule(MatchingRule::Loose);

        link_thickness / set_link_thickness: i64 =>
            FieldSpec::link("maltego.link.thickness")
                .kind(ValueKind::Int)
                .matching_rule(MatchingRule::Loose);
    }
}

///
/// EntityChild
///
/// Closed union of everything an entity can own; append/remove dispatch
/// over it, so there is no foreign-kind case.
///

#[derive(Clone, Debug, PartialEq)]
pub enum EntityChild {
    Field(Field),
    Label(Label),
}

impl From<Field> for EntityChild {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<Label> for EntityChild {
    fn from(label: Label) -> Self {
        Self::Label(label)
    }
}

///
/// TESTS
///
