//! Two-phase chat submission.
//!
//! Phase 1 (`SendPlan::prepare`) runs synchronously on submit and yields the
//! optimistic user entry. Phase 2 (`ChatOutcome::from_result`) turns whatever
//! the request produced into exactly one assistant entry.

use super::aggregate::{ChatReply, Message};
use crate::domain::a002_cloud_resource::{normalize_resources, CloudResource};
use crate::shared::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct SendPlan {
    /// Appended before the request goes out; absent for file-only sends
    pub optimistic: Option<Message>,
    /// Sent as the `query` form field, as typed
    pub query: String,
}

impl SendPlan {
    /// Returns `None` when there is nothing to send.
    pub fn prepare(query: &str, file_count: usize) -> Option<Self> {
        let has_text = !query.trim().is_empty();
        if !has_text && file_count == 0 {
            return None;
        }

        Some(Self {
            optimistic: has_text.then(|| Message::user(query)),
            query: query.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatOutcome {
    pub message: Message,
    /// Replacement resource array, when the reply carried one
    pub resources: Option<Vec<CloudResource>>,
}

impl ChatOutcome {
    pub fn from_result(result: Result<ChatReply, ApiError>) -> Self {
        match result {
            Ok(reply) => Self {
                message: Message::ai(reply.reply).with_sources(reply.sources),
                resources: reply.cloud_resources.as_ref().map(normalize_resources),
            },
            Err(e) => Self {
                message: Message::error(e),
                resources: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_chat::ChatRole;
    use serde_json::json;

    #[test]
    fn test_empty_input_without_files_is_noop() {
        assert!(SendPlan::prepare("", 0).is_none());
        assert!(SendPlan::prepare("   \n\t", 0).is_none());
    }

    #[test]
    fn test_text_produces_optimistic_user_message() {
        let plan = SendPlan::prepare("Stop vm-test1 ", 0).unwrap();
        let msg = plan.optimistic.unwrap();
        assert_eq!(msg.role, ChatRole::User);
        assert_eq!(msg.content, "Stop vm-test1 ");
        assert_eq!(plan.query, "Stop vm-test1 ");
    }

    #[test]
    fn test_files_only_sends_without_user_message() {
        let plan = SendPlan::prepare("  ", 2).unwrap();
        assert!(plan.optimistic.is_none());
        assert_eq!(plan.query, "  ");
    }

    #[test]
    fn test_success_outcome_carries_reply_and_resources() {
        let reply: ChatReply = serde_json::from_value(json!({
            "reply": "Stopped vm-test1",
            "cloudResources": {
                "AWS": { "vms": ["vm-a"] },
                "GCP": { "buckets": ["b-1"], "region": "us-east1" }
            }
        }))
        .unwrap();

        let outcome = ChatOutcome::from_result(Ok(reply));
        assert_eq!(outcome.message.role, ChatRole::Ai);
        assert_eq!(outcome.message.content, "Stopped vm-test1");

        let resources = outcome.resources.unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].provider, "AWS");
        assert_eq!(resources[0].buckets, json!([]));
        assert_eq!(resources[1].extra.get("region"), Some(&json!("us-east1")));
    }

    #[test]
    fn test_success_without_resources_leaves_them_alone() {
        let outcome = ChatOutcome::from_result(Ok(ChatReply {
            reply: "hello".into(),
            ..Default::default()
        }));
        assert!(outcome.resources.is_none());
    }

    #[test]
    fn test_failure_becomes_error_message() {
        let outcome = ChatOutcome::from_result(Err(ApiError::network("E")));
        assert_eq!(outcome.message.role, ChatRole::Ai);
        assert_eq!(outcome.message.content, "Error: E");
        assert!(outcome.resources.is_none());
    }

    #[test]
    fn test_one_user_then_one_ai_entry_per_send() {
        let mut transcript: Vec<Message> = Vec::new();

        let plan = SendPlan::prepare("list buckets", 0).unwrap();
        transcript.extend(plan.optimistic);
        assert_eq!(transcript.len(), 1);

        let outcome = ChatOutcome::from_result(Err(ApiError::Http(500)));
        transcript.push(outcome.message);

        let roles: Vec<_> = transcript.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::User, ChatRole::Ai]);
        assert_eq!(transcript[1].content, "Error: HTTP 500");
    }
}
