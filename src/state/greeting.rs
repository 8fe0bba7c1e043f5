#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

use serde::Deserialize;

use crate::state::chat::ChatMessage;
use crate::util::transition::Transition;

/// Fallback greeting shown before any message arrives.
pub const DEFAULT_GREETING: &str = "Agent is listening, ask it a question";

/// Fade-in declared for the greeting. Entry is delayed so the greeting does
/// not flash in before the connection has visually settled.
pub const ENTER_TRANSITION: Transition = Transition::new(0.5, 0.8);

/// Fade-out declared for the greeting. No delay: the greeting leaves as soon
/// as the first message arrives.
pub const EXIT_TRANSITION: Transition = Transition::new(0.5, 0.0);

/// Greeting configuration.
///
/// `customMessage` is the only recognized key; unrecognized keys in the
/// caller-supplied JSON are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    #[serde(rename = "customMessage")]
    pub custom_message: Option<String>,
}

impl GreetingConfig {
    /// Parse a configuration value. Malformed input degrades to the default
    /// configuration rather than erroring.
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// The greeting text to display: the custom message when present and
    /// non-blank, else [`DEFAULT_GREETING`].
    pub fn message(&self) -> &str {
        match self.custom_message.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => DEFAULT_GREETING,
        }
    }
}

/// Whether the greeting overlay is shown.
///
/// Derived, never stored: recomputed from the transcript on every render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// Visible until the first message arrives.
    pub fn for_messages(messages: &[ChatMessage]) -> Self {
        if messages.is_empty() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_hidden(self) -> bool {
        self == Visibility::Hidden
    }

    /// Timing declared to the rendering layer for this state.
    pub fn transition(self) -> Transition {
        match self {
            Visibility::Visible => ENTER_TRANSITION,
            Visibility::Hidden => EXIT_TRANSITION,
        }
    }
}
