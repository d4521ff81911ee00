use crate::node::{Entity, UiMessage};
use serde::Serialize;

///
/// ResponseItem
///
/// Closed union of everything a response can carry; append/remove dispatch
/// over it.
///

#[derive(Clone, Debug, PartialEq)]
pub enum ResponseItem {
    Entity(Entity),
    UiMessage(UiMessage),
}

impl From<Entity> for ResponseItem {
    fn from(entity: Entity) -> Self {
        Self::Entity(entity)
    }
}

impl From<UiMessage> for ResponseItem {
    fn from(message: UiMessage) -> Self {
        Self::UiMessage(message)
    }
}

///
/// TransformResponse
///
/// The outbound half of a transform exchange. Items arrive in any order;
/// each collection emits in insertion order.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TransformResponse {
    #[serde(rename = "Entities", skip_serializing_if = "<[_]>::is_empty")]
    pub entities: Vec<Entity>,

    #[serde(rename = "UIMessages", skip_serializing_if = "<[_]>::is_empty")]
    pub ui_messages: Vec<UiMessage>,
}

impl TransformResponse {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route an item to its collection by kind.
    pub fn append(&mut self, item: impl Into<ResponseItem>) {
        match item.into() {
            ResponseItem::Entity(entity) => self.entities.push(entity),
            ResponseItem::UiMessage(message) => self.ui_messages.push(message),
        }
    }

    /// Remove the first item equal to `item`; removing an absent item is a
    /// no-op.
    pub fn remove(&mut self, item: &ResponseItem) {
        match item {
            ResponseItem::Entity(entity) => {
                if let Some(at) = self.entities.iter().position(|e| e == entity) {
                    self.entities.remove(at);
                }
            }
            ResponseItem::UiMessage(message) => {
                if let Some(at) = self.ui_messages.iter().position(|m| m == message) {
                    self.ui_messages.remove(at);
                }
            }
        }
    }

    #[must_use]
    pub fn with(mut self, item: impl Into<ResponseItem>) -> Self {
        self.append(item);
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
    fn append_routes_by_kind() {
        let mut response = TransformResponse::new();
        response.append(Entity::with_type("maltego.Phrase", "hi"));
        response.append(UiMessage::inform("found 1 result"));
        response.append(Entity::with_type("maltego.Phrase", "bye"));

        assert_eq!(response.entities.len(), 2);
        assert_eq!(response.ui_messages.len(), 1);
        assert_eq!(response.entities[0].value, "hi");
        assert_eq!(response.entities[1].value, "bye");
    }

    #[test]
    fn remove_is_symmetric() {
        let entity = Entity::with_type("maltego.Phrase", "hi");
        let mut response = TransformResponse::new().with(entity.clone());

        response.remove(&UiMessage::inform("absent").into());
        assert_eq!(response.entities.len(), 1);

        response.remove(&entity.into());
        assert!(response.entities.is_empty());
    }
}
