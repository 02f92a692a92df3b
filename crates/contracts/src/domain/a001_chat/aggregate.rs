use crate::domain::a002_cloud_resource::ResourceMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;
use uuid::Uuid;

/// Author of a transcript entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

impl ChatRole {
    /// Speaker label shown in front of the message text
    pub fn label(&self) -> &'static str {
        match self {
            ChatRole::User => "You",
            ChatRole::Ai => "AI",
        }
    }
}

/// One transcript entry. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Client-local render key
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    /// `sources` returned alongside an assistant reply, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Value>,
}

impl Message {
    fn new(role: ChatRole, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            sources: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content.into())
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Ai, content.into())
    }

    /// Synthetic assistant entry standing in for a failed request
    pub fn error(err: impl Display) -> Self {
        Self::new(ChatRole::Ai, format!("Error: {}", err))
    }

    pub fn with_sources(mut self, sources: Option<Value>) -> Self {
        self.sources = sources.filter(|v| !v.is_null());
        self
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }

    /// Compact one-line rendering of `sources` for the message footnote
    pub fn sources_text(&self) -> Option<String> {
        self.sources.as_ref().map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Response body of `POST /chat`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: String,
    #[serde(
        rename = "cloudResources",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cloud_resources: Option<ResourceMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Value>,
}

/// Multipart field names of `POST /chat`
pub mod form_fields {
    pub const USER_ID: &str = "user_id";
    pub const QUERY: &str = "query";
    pub const FILES: &str = "files";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&ChatRole::Ai).unwrap(), "\"ai\"");
        assert_eq!(
            serde_json::from_str::<ChatRole>("\"user\"").unwrap(),
            ChatRole::User
        );
    }

    #[test]
    fn test_error_message_content() {
        let msg = Message::error("E");
        assert_eq!(msg.role, ChatRole::Ai);
        assert_eq!(msg.content, "Error: E");
    }

    #[test]
    fn test_messages_get_distinct_ids() {
        let a = Message::user("hi");
        let b = Message::user("hi");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_reply_parses_without_resources() {
        let reply: ChatReply = serde_json::from_str(r#"{"reply":"done"}"#).unwrap();
        assert_eq!(reply.reply, "done");
        assert!(reply.cloud_resources.is_none());
        assert!(reply.sources.is_none());
    }

    #[test]
    fn test_reply_parses_resources_and_sources() {
        let reply: ChatReply = serde_json::from_str(
            r#"{"reply":"ok","cloudResources":{"GCP":{"vms":["vm-1"]}},"sources":null}"#,
        )
        .unwrap();
        let resources = reply.cloud_resources.unwrap();
        assert_eq!(resources.len(), 1);
        assert!(resources.contains_key("GCP"));
        assert!(reply.sources.is_none());
    }

    #[test]
    fn test_null_sources_are_dropped() {
        let msg = Message::ai("x").with_sources(Some(Value::Null));
        assert!(msg.sources.is_none());

        let msg = Message::ai("x").with_sources(Some(serde_json::json!(["doc.pdf"])));
        assert_eq!(msg.sources_text().as_deref(), Some("[\"doc.pdf\"]"));
    }
}
