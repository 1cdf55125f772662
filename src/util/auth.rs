//! Client-side checks for authentication forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth forms post normally. The guard runs in their submit handler; a
//! failure cancels the submit with an `alert` and leaves every field as the
//! user typed it. Forms without a password input are never blocked.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Whether an auth form submit may go ahead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    Proceed,
    Block(String),
}

/// Check the form's password input, if it has one.
pub fn guard_submit(password: Option<&str>, min_len: usize) -> SubmitDecision {
    match password.map(|p| validate_password(p, min_len)) {
        Some(Err(message)) => SubmitDecision::Block(message),
        Some(Ok(())) | None => SubmitDecision::Proceed,
    }
}

/// Reject passwords shorter than `min_len` UTF-16 code units, matching the
/// browser's `value.length`.
///
/// # Errors
///
/// Returns the message shown in the blocking alert.
pub fn validate_password(password: &str, min_len: usize) -> Result<(), String> {
    if password.encode_utf16().count() < min_len {
        return Err(format!("Password must be at least {min_len} characters long"));
    }
    Ok(())
}

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                leptos::logging::warn!("alert failed: {message}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
