use serde::{Deserialize, Serialize};

///
/// Label
///
/// A display-only annotation attached to an entity. HTML-typed labels are
/// flagged so the serializer can emit their value as CDATA.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Label {
    pub name: String,

    #[serde(rename = "Type")]
    pub content_type: String,

    pub value: String,
}

impl Label {
    pub const DEFAULT_TYPE: &'static str = "text/text";
    pub const HTML_TYPE: &'static str = "text/html";

    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: Self::DEFAULT_TYPE.to_string(),
            value: value.into(),
        }
    }

    /// An HTML label; its value ships inside a CDATA section.
    pub fn html(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: Self::HTML_TYPE.to_string(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn is_html(&self) -> bool {
        self.content_type == Self::HTML_TYPE
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_type() {
        let label = Label::new("Summary", "plain");
        assert_eq!(label.content_type, "text/text");
        assert!(!label.is_html());
    }

    #[test]
    fn html_labels_are_flagged() {
        let label = Label::html("Summary", "<b>rich</b>");
        assert!(label.is_html());
    }
}
