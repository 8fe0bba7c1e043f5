#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// State for the realtime session transcript.
///
/// The session SDK bridge appends assistant turns as they arrive; the
/// transcript panel appends typed user turns.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

/// A single transcript entry.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: f64,
}

/// Which party produced a transcript entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    User,
    Assistant,
}
