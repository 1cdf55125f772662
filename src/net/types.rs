//! Wire types for the server endpoints this UI consumes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response from `POST /toggle-dark-mode`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ToggleResponse {
    pub success: bool,
}

/// Request body for `POST /api/chat`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub prompt: String,
}

/// Response from `POST /api/chat`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}

/// Response from any `data-ajax` form target.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct FormResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
