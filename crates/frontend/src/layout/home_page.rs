use crate::domain::a001_chat::ui::chat_box::ChatBox;
use crate::domain::a002_cloud_resource::ui::tree::CloudResources;
use crate::shared::config::config;
use contracts::domain::a001_chat::Message;
use contracts::domain::a002_cloud_resource::{CloudResource, RefreshSequencer};
use leptos::prelude::*;

/// Single page: inventory tree on the left, chat on the right.
///
/// Owns the transcript and the resource array; children get read signals
/// plus setters and never keep copies of their own.
#[component]
pub fn HomePage() -> impl IntoView {
    let (messages, set_messages) = signal(Vec::<Message>::new());
    let (resources, set_resources) = signal(Vec::<CloudResource>::new());
    let sequencer = StoredValue::new(RefreshSequencer::new());

    let on_chat_resources = Callback::new(move |next: Vec<CloudResource>| {
        // In-flight refreshes must not overwrite what the assistant just sent
        sequencer.update_value(RefreshSequencer::invalidate);
        set_resources.set(next);
    });

    let user_id = config().user_id.clone();

    view! {
        <div style="display: flex; gap: 16px; height: 100vh; padding: 16px; box-sizing: border-box;">
            // Left: Cloud Info
            <div style="width: 33%; padding: 16px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; overflow-y: auto;">
                <CloudResources
                    resources=resources
                    set_resources=set_resources
                    sequencer=sequencer
                />
            </div>

            // Right: Chat UI
            <div style="width: 67%; display: flex; flex-direction: column;">
                <ChatBox
                    user_id=user_id
                    messages=messages
                    set_messages=set_messages
                    on_resources=on_chat_resources
                />
            </div>
        </div>
    }
}
