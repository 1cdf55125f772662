//! Chat widget modal state and transcript.
//!
//! DESIGN
//! ======
//! Each submit appends a user turn and a typing placeholder; each reply
//! (or failure) removes the *first* placeholder in the transcript and appends
//! an assistant turn. Overlapping exchanges can therefore consume each
//! other's placeholder. Exchanges are not serialized and closing the modal
//! does not cancel one in flight.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

pub const PLACEHOLDER_TEXT: &str = "...";
pub const FAILURE_TEXT: &str = "Error connecting to the assistant.";

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub role: ChatRole,
    pub is_placeholder: bool,
}

impl ChatMessage {
    fn new(text: impl Into<String>, role: ChatRole, is_placeholder: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            role,
            is_placeholder,
        }
    }
}

/// State for the chat modal.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub open: bool,
    pub input: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Close only when the click landed on the backdrop itself.
    pub fn backdrop_click(&mut self, inside_content: bool) {
        if !inside_content {
            self.close();
        }
    }

    /// Start an exchange from the current input.
    ///
    /// Returns the trimmed prompt to send, or `None` if the input is blank.
    pub fn submit(&mut self) -> Option<String> {
        let prompt = self.input.trim().to_owned();
        if prompt.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(prompt.clone(), ChatRole::User, false));
        self.input.clear();
        self.messages
            .push(ChatMessage::new(PLACEHOLDER_TEXT, ChatRole::Assistant, true));
        Some(prompt)
    }

    pub fn receive_reply(&mut self, reply: impl Into<String>) {
        self.remove_placeholder();
        self.messages.push(ChatMessage::new(reply, ChatRole::Assistant, false));
    }

    pub fn receive_failure(&mut self) {
        self.receive_reply(FAILURE_TEXT);
    }

    pub fn pending_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_placeholder).count()
    }

    fn remove_placeholder(&mut self) {
        if let Some(pos) = self.messages.iter().position(|m| m.is_placeholder) {
            self.messages.remove(pos);
        }
    }
}
