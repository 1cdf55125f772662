//! Networking modules for the JSON endpoints the page talks to.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues requests through `gloo-net` in hydrate builds and `types`
//! defines the wire schema. Every call returns `Result<_, ApiError>`.

pub mod api;
pub mod types;

/// Transport-level failure of an API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or was rejected before a response.
    #[error("request failed: {0}")]
    Request(String),
    /// The body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Called outside a browser.
    #[error("not available on server")]
    Unavailable,
}
