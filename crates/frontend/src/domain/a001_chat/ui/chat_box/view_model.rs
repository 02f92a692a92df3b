//! Chat Box - View Model

use super::model::post_chat;
use contracts::domain::a001_chat::{ChatOutcome, Message, SendPlan};
use contracts::domain::a002_cloud_resource::CloudResource;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct ChatBoxVm {
    pub input: RwSignal<String>,
    pub files: RwSignal<Vec<File>, LocalStorage>,
    pub loading: RwSignal<bool>,
}

impl ChatBoxVm {
    pub fn new() -> Self {
        Self {
            input: RwSignal::new(String::new()),
            files: RwSignal::new_local(Vec::new()),
            loading: RwSignal::new(false),
        }
    }

    pub fn files_label(&self) -> String {
        match self.files.with(Vec::len) {
            0 => "Select a file".to_string(),
            n => format!("{} files selected", n),
        }
    }

    /// Submits the current input and selected files.
    ///
    /// The user entry lands in the transcript before the request is issued.
    /// Whatever the request yields, exactly one assistant entry follows and
    /// the box is reset.
    pub fn send(
        &self,
        user_id: String,
        set_messages: WriteSignal<Vec<Message>>,
        on_resources: Callback<Vec<CloudResource>>,
    ) {
        let input = self.input.get_untracked();
        let files = self.files.get_untracked();
        let Some(SendPlan { optimistic, query }) = SendPlan::prepare(&input, files.len()) else {
            return;
        };

        if let Some(msg) = optimistic {
            set_messages.update(|msgs| msgs.push(msg));
        }
        self.loading.set(true);
        log::debug!("Sending chat query ({} chars, {} files)", query.len(), files.len());

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = post_chat(&user_id, &query, &files).await;
            if let Err(e) = &result {
                log::error!("Chat request failed: {}", e);
            }

            vm.finish(ChatOutcome::from_result(result), set_messages, on_resources);
        });
    }

    /// Lands the assistant entry, forwards any inventory and resets the box.
    pub fn finish(
        &self,
        outcome: ChatOutcome,
        set_messages: WriteSignal<Vec<Message>>,
        on_resources: Callback<Vec<CloudResource>>,
    ) {
        set_messages.update(|msgs| msgs.push(outcome.message));
        if let Some(resources) = outcome.resources {
            log::info!("Chat reply carried {} providers", resources.len());
            on_resources.run(resources);
        }

        self.reset();
    }

    fn reset(&self) {
        self.loading.set(false);
        self.input.set(String::new());
        self.files.set(Vec::new());
    }
}

impl Default for ChatBoxVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_chat::ChatReply;
    use contracts::shared::error::ApiError;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_failed_request_resets_box() {
        let owner = Owner::new();
        owner.with(|| {
            let (messages, set_messages) = signal(Vec::<Message>::new());
            let received = RwSignal::new(None::<Vec<CloudResource>>);
            let on_resources = Callback::new(move |r| received.set(Some(r)));

            let vm = ChatBoxVm::new();
            vm.input.set("stop vm-1".to_string());
            vm.loading.set(true);

            let outcome = ChatOutcome::from_result(Err(ApiError::network("E")));
            vm.finish(outcome, set_messages, on_resources);

            assert!(!vm.loading.get_untracked());
            assert_eq!(vm.input.get_untracked(), "");
            assert!(vm.files.with_untracked(Vec::is_empty));
            let last = messages.with_untracked(|m| m.last().cloned()).unwrap();
            assert_eq!(last.content, "Error: E");
            assert!(received.get_untracked().is_none());
        });
    }

    #[test]
    fn test_reply_with_resources_reaches_callback() {
        let owner = Owner::new();
        owner.with(|| {
            let (messages, set_messages) = signal(Vec::<Message>::new());
            let received = RwSignal::new(None::<Vec<CloudResource>>);
            let on_resources = Callback::new(move |r| received.set(Some(r)));

            let reply: ChatReply = serde_json::from_value(serde_json::json!({
                "reply": "done",
                "cloudResources": {"AWS": {"vms": ["i-1"]}}
            }))
            .unwrap();

            let vm = ChatBoxVm::new();
            vm.loading.set(true);
            vm.finish(ChatOutcome::from_result(Ok(reply)), set_messages, on_resources);

            assert!(!vm.loading.get_untracked());
            assert_eq!(messages.with_untracked(|m| m.len()), 1);
            let resources = received.get_untracked().unwrap();
            assert_eq!(resources.len(), 1);
            assert_eq!(resources[0].provider, "AWS");
        });
    }

    #[test]
    fn test_blank_input_without_files_is_ignored() {
        let owner = Owner::new();
        owner.with(|| {
            let (messages, set_messages) = signal(Vec::<Message>::new());
            let on_resources = Callback::new(|_: Vec<CloudResource>| {});

            let vm = ChatBoxVm::new();
            vm.input.set("  ".to_string());
            vm.send("u1".to_string(), set_messages, on_resources);

            assert!(!vm.loading.get_untracked());
            assert!(messages.with_untracked(Vec::is_empty));
            assert_eq!(vm.input.get_untracked(), "  ");
        });
    }
}
