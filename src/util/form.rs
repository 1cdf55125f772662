//! AJAX form submission: request shape and outcome resolution.
//!
//! DESIGN
//! ======
//! The component reads `method`/`action` off the submitted form, builds a
//! [`FormSubmission`], sends it once, and hands whatever came back to
//! [`resolve_outcome`]. Navigation and notification happen in the caller.
//! Nothing is retried; a failed submission waits for the user to resubmit.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::ApiError;
use crate::net::types::FormResponse;
use crate::state::notifications::FlashKind;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Action completed successfully";
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// HTTP method declared on a form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMethod {
    Get,
    #[default]
    Post,
}

impl FormMethod {
    /// Parse a form's `method` attribute. Anything but `get` posts.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("get") { Self::Get } else { Self::Post }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Target of a single intercepted submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSubmission {
    pub action: String,
    pub method: FormMethod,
}

impl FormSubmission {
    /// Build from raw form attributes. An empty action targets `current_path`.
    pub fn from_attrs(action: &str, method: &str, current_path: &str) -> Self {
        let action = action.trim();
        let action = if action.is_empty() { current_path } else { action };
        Self { action: action.to_owned(), method: FormMethod::parse(method) }
    }

    /// URL for the request; GET submissions carry fields in the query string.
    pub fn request_url(&self, query: &str) -> String {
        match self.method {
            FormMethod::Post => self.action.clone(),
            FormMethod::Get => append_query(&self.action, query),
        }
    }
}

fn append_query(action: &str, query: &str) -> String {
    if query.is_empty() {
        return action.to_owned();
    }
    let sep = if action.contains('?') { '&' } else { '?' };
    format!("{action}{sep}{query}")
}

/// What the page should do once a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    Navigate(String),
    Notify { kind: FlashKind, text: String },
}

/// Map a submission result to exactly one navigation or notification.
pub fn resolve_outcome(result: Result<FormResponse, ApiError>) -> FormOutcome {
    match result {
        Ok(resp) if resp.success => match resp.redirect.filter(|r| !r.is_empty()) {
            Some(url) => FormOutcome::Navigate(url),
            None => FormOutcome::Notify {
                kind: FlashKind::Success,
                text: resp.message.unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_owned()),
            },
        },
        Ok(resp) => FormOutcome::Notify {
            kind: FlashKind::Error,
            text: resp.error.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_owned()),
        },
        Err(e) => FormOutcome::Notify { kind: FlashKind::Error, text: format!("Network error: {e}") },
    }
}
