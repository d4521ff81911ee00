use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// MatchingRule
///
/// Reconciliation policy the receiving application applies when merging
/// graph nodes on field identity.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchingRule {
    #[default]
    #[display("strict")]
    Strict,

    #[display("loose")]
    Loose,
}

///
/// Field
///
/// The textual backing node behind one typed accessor. Created lazily on
/// the first non-null write, removed on a null write, mutated in place
/// otherwise; owned exclusively by its parent node.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Field {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default)]
    pub matching_rule: MatchingRule,

    pub text: String,
}

impl Field {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            matching_rule: MatchingRule::default(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub const fn with_matching_rule(mut self, rule: MatchingRule) -> Self {
        self.matching_rule = rule;
        self
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_rule_wire_text() {
        assert_eq!(MatchingRule::Strict.to_string(), "strict");
        assert_eq!(MatchingRule::Loose.to_string(), "loose");
        assert_eq!(MatchingRule::default(), MatchingRule::Strict);
    }

    #[test]
    fn builder_chain() {
        let field = Field::new("person.name", "Alice")
            .with_display_name("Name")
            .with_matching_rule(MatchingRule::Loose);

        assert_eq!(field.name, "person.name");
        assert_eq!(field.display_name.as_deref(), Some("Name"));
        assert_eq!(field.matching_rule, MatchingRule::Loose);
        assert_eq!(field.text, "Alice");
    }
}
