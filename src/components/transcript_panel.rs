//! Session transcript panel displaying assistant and user turns.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatState, Role};
use crate::util::clock;

/// Transcript of the realtime session plus a text input for typed turns.
///
/// Voice turns arrive through the session SDK bridge; the input row only
/// covers typed messages.
#[component]
pub fn TranscriptPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }

        chat.update(|c| {
            c.messages.push(ChatMessage {
                id: uuid::Uuid::new_v4().to_string(),
                role: Role::User,
                content: text,
                timestamp: clock::now_ms(),
            });
        });
        input.set(String::new());
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="transcript-panel">
            <div class="transcript-panel__messages">
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let content = msg.content.clone();
                            let is_assistant = msg.role == Role::Assistant;
                            let author = match msg.role {
                                Role::User => "You",
                                Role::Assistant => "Agent",
                            };
                            view! {
                                <div
                                    class="transcript-panel__message"
                                    class:transcript-panel__message--assistant=is_assistant
                                >
                                    <span class="transcript-panel__author">{author}</span>
                                    <span class="transcript-panel__text">{content}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="transcript-panel__input-row">
                <input
                    class="transcript-panel__input"
                    type="text"
                    placeholder="Message the agent..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary transcript-panel__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
