//! Decorative text with an animated highlight sweep.

use leptos::prelude::*;

/// Text node with a moving highlight sweep, driven purely by CSS.
///
/// This component only composes the class list; the sweep itself lives in
/// the `.shimmer-text` stylesheet rule.
#[component]
pub fn ShimmerText(
    #[prop(into)] text: String,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let class = if class.is_empty() {
        "shimmer-text".to_owned()
    } else {
        format!("shimmer-text {class}")
    };

    view! { <span class=class>{text}</span> }
}
