//! Chat Box - View Component

use super::view_model::ChatBoxVm;
use crate::shared::icons::icon;
use contracts::domain::a001_chat::Message;
use contracts::domain::a002_cloud_resource::CloudResource;
use leptos::prelude::*;
use thaw::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

#[component]
#[allow(non_snake_case)]
pub fn ChatBox(
    user_id: String,
    messages: ReadSignal<Vec<Message>>,
    set_messages: WriteSignal<Vec<Message>>,
    /// Replaces the page's resource array when a reply carries inventory
    on_resources: Callback<Vec<CloudResource>>,
) -> impl IntoView {
    let vm = ChatBoxVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Smooth scroll to bottom on every transcript change
    Effect::new(move |_| {
        messages.track();
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                let opts = ScrollToOptions::new();
                opts.set_top(container.scroll_height() as f64);
                opts.set_behavior(ScrollBehavior::Smooth);
                container.scroll_to_with_scroll_to_options(&opts);
            });
        }
    });

    let handle_send = Callback::new(move |_: ()| {
        vm.send(user_id.clone(), set_messages, on_resources);
    });

    view! {
        <h2 style="font-size: 20px; font-weight: bold; margin-bottom: 8px;">"Chat"</h2>

        // Messages area
        <div
            node_ref=messages_container_ref
            style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 8px; margin-bottom: 8px; padding: 16px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
        >
            <For
                each=move || messages.get()
                key=|msg| msg.id
                let:msg
            >
                {{
                    let is_user = msg.is_user();
                    let sources = msg.sources_text();
                    view! {
                        <div style=if is_user { "text-align: right;" } else { "text-align: left;" }>
                            <strong>{format!("{}:", msg.role.label())}</strong>
                            " "
                            <span style="white-space: pre-wrap;">{msg.content.clone()}</span>
                            {sources.map(|s| view! {
                                <div style="font-size: 11px; opacity: 0.7; margin-top: 4px;">
                                    {format!("sources: {}", s)}
                                </div>
                            })}
                        </div>
                    }
                }}
            </For>
            <Show when=move || vm.loading.get()>
                <div style="font-style: italic; color: var(--colorNeutralForeground3);">
                    "AI is thinking..."
                </div>
            </Show>
        </div>

        // Input area
        <div style="display: flex; flex-direction: column; gap: 8px; margin-top: auto;">
            <input
                type="text"
                style="padding: 8px; border: 1px solid var(--colorNeutralStroke1); border-radius: 4px;"
                placeholder="Example: Stop vm-test1"
                prop:value=move || vm.input.get()
                on:input=move |ev| vm.input.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        handle_send.run(());
                    }
                }
            />

            <label style="padding: 8px; border: 1px solid var(--colorNeutralStroke2); border-radius: 4px; background: var(--colorNeutralBackground2); cursor: pointer; text-align: center;">
                {icon("attach")}
                " "
                {move || vm.files_label()}
                <input
                    type="file"
                    multiple=true
                    style="display: none;"
                    on:change=move |ev| {
                        use wasm_bindgen::JsCast;
                        let Some(input) = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                        else {
                            return;
                        };
                        let selected: Vec<web_sys::File> = input
                            .files()
                            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
                            .unwrap_or_default();
                        vm.files.set(selected);
                        // Clear input so the same file can be picked again
                        input.set_value("");
                    }
                />
            </label>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=vm.loading
                on_click=move |_| handle_send.run(())
            >
                {icon("send")}
                " Submit"
            </Button>
        </div>
    }
}
