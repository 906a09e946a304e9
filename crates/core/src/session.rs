//! A session is the single conversation between a person and the companion.
//! It owns the chronological history and the flags the presentation layer
//! needs across turns.
use crate::completion::{ChatMessage, Role};
use std::path::Path;
use tracing::debug;

pub const INITIAL_GREETING: &str = "Hello. I'm here to listen. What would you like to share today?";
pub const NEW_SESSION_GREETING: &str = "Welcome. What would you like to explore today?";
pub const DEFAULT_EXPORT_FILE: &str = "antaraa_session.txt";

/// Ordered message log. Turn alternation is a convention of the caller and
/// is not checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationStore {
    messages: Vec<ChatMessage>,
}

impl ConversationStore {
    /// Creates a history holding only the opening greeting.
    pub fn initialize() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(INITIAL_GREETING)],
        }
    }

    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(role, content));
    }

    /// Drops the whole history and seeds it with a fresh greeting.
    pub fn reset(&mut self) {
        debug!(discarded = self.messages.len(), "Resetting conversation");
        self.messages = vec![ChatMessage::assistant(NEW_SESSION_GREETING)];
    }

    /// Plain text transcript, one `<role>: <content>` line per message.
    pub fn export(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("{}: {}", m.role, m.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn save_export(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.export())
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Content of the newest message if the user wrote it.
    pub fn last_user_message(&self) -> Option<&str> {
        self.messages
            .last()
            .filter(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::initialize()
    }
}

/// State of one session, created at start and dropped at the end.
#[derive(Debug, Default)]
pub struct SessionState {
    history: ConversationStore,
    notice_acknowledged: bool,
    crisis_surfaced: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &ConversationStore {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut ConversationStore {
        &mut self.history
    }

    pub fn acknowledge_notice(&mut self) {
        self.notice_acknowledged = true;
    }

    pub fn is_notice_acknowledged(&self) -> bool {
        self.notice_acknowledged
    }

    /// Records that crisis resources were shown. Never cleared automatically.
    pub fn mark_crisis_surfaced(&mut self) {
        self.crisis_surfaced = true;
    }

    pub fn crisis_surfaced(&self) -> bool {
        self.crisis_surfaced
    }
}
