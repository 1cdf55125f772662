//! Flash message queue with timed fade and removal.
//!
//! DESIGN
//! ======
//! Messages carry their own display timestamp; `advance_one` applies the
//! transition due for a single message at a given clock reading. The
//! rendering layer runs one timer chain per message and advances only that
//! message when it fires, so state stays testable without a browser clock.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::config::{DEFAULT_FLASH_FADE_DELAY_MS, DEFAULT_FLASH_REMOVE_DELAY_MS};

/// Outcome category of a flash message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    /// CSS modifier class for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Visual lifecycle stage of a message still in the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlashPhase {
    #[default]
    Visible,
    Fading,
}

/// A transient banner. Text and kind never change after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct FlashMessage {
    pub id: String,
    pub text: String,
    pub kind: FlashKind,
    pub displayed_at_ms: f64,
    pub phase: FlashPhase,
}

/// Owned state of the single flash container.
#[derive(Clone, Debug)]
pub struct NotificationCenter {
    pub messages: Vec<FlashMessage>,
    pub fade_delay_ms: u32,
    pub remove_delay_ms: u32,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::with_delays(DEFAULT_FLASH_FADE_DELAY_MS, DEFAULT_FLASH_REMOVE_DELAY_MS)
    }
}

impl NotificationCenter {
    pub fn with_delays(fade_delay_ms: u32, remove_delay_ms: u32) -> Self {
        Self { messages: Vec::new(), fade_delay_ms, remove_delay_ms }
    }

    /// Append a new message and return its id.
    pub fn show(&mut self, text: impl Into<String>, kind: FlashKind, now_ms: f64) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.messages.push(FlashMessage {
            id: id.clone(),
            text: text.into(),
            kind,
            displayed_at_ms: now_ms,
            phase: FlashPhase::Visible,
        });
        id
    }

    /// Apply the fade or removal transition due for one message at `now_ms`.
    ///
    /// Only the named message is touched, so a late timer cannot expire a
    /// neighbour that has not faded yet.
    pub fn advance_one(&mut self, id: &str, now_ms: f64) {
        let fade_after = f64::from(self.fade_delay_ms);
        let remove_after = fade_after + f64::from(self.remove_delay_ms);
        let Some(pos) = self.messages.iter().position(|m| m.id == id) else {
            return;
        };
        let age = now_ms - self.messages[pos].displayed_at_ms;
        if age >= remove_after {
            self.messages.remove(pos);
        } else if age >= fade_after {
            self.messages[pos].phase = FlashPhase::Fading;
        }
    }

    /// Remove a message on user request. Returns `false` if already gone.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        self.messages.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&FlashMessage> {
        self.messages.iter().find(|m| m.id == id)
    }
}
