//! Dark-mode preference with optimistic update and rollback.
//!
//! The persistence request carries no payload; the server derives the new
//! value from session state. Rapid toggles are not serialized: each toggle
//! settles independently and a late failure reverts to the value that
//! preceded *that* toggle, whatever the current value is.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Process-wide theme preference mirrored into `<html data-theme>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

/// A single optimistic toggle awaiting server confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub previous: bool,
    pub next: bool,
}

impl ThemeState {
    /// Apply the control's new checked state optimistically.
    pub fn toggle(&mut self, checked: bool) -> ThemeChange {
        let change = ThemeChange { previous: self.dark, next: checked };
        self.dark = checked;
        change
    }

    /// Reconcile with the persistence outcome.
    ///
    /// Returns `true` if the preference was rolled back.
    pub fn settle<E>(&mut self, change: ThemeChange, outcome: &Result<bool, E>) -> bool {
        match outcome {
            Ok(true) => false,
            Ok(false) | Err(_) => {
                self.dark = change.previous;
                true
            }
        }
    }

    pub fn theme_name(self) -> &'static str {
        if self.dark { "dark" } else { "light" }
    }
}
