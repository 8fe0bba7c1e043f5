//! Transient greeting shown over the transcript until the first message.

use leptos::prelude::*;

use crate::components::shimmer_text::ShimmerText;
use crate::state::chat::ChatState;
use crate::state::greeting::{GreetingConfig, Visibility};

/// Greeting overlay for the session view.
///
/// Visible only while the transcript is empty: the node is removed from the
/// tree once the first message arrives, and `aria-hidden` tracks the same
/// state for assistive technology. Enter and exit fades are declared to the
/// rendering layer; entry is delayed so the greeting does not flash in
/// before the connection has visually settled, exit is immediate.
#[component]
pub fn GreetingOverlay(
    #[prop(optional)] config: GreetingConfig,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let visibility = move || Visibility::for_messages(&chat.get().messages);
    let hidden = move || visibility().is_hidden();

    let message = config.message().to_owned();

    view! {
        <Show when=move || !hidden()>
            <div
                class="greeting-overlay"
                aria-hidden=move || if hidden() { "true" } else { "false" }
                style:transition=move || visibility().transition().css("opacity")
            >
                <ShimmerText text=message.clone() class=class/>
            </div>
        </Show>
    }
}
