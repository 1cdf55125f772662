//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so failures degrade to a
//! notification, a transcript line, or a rollback without crashing hydration.
//! Every endpoint reports failure in its JSON body, so bodies are decoded
//! regardless of HTTP status.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::ApiError;
#[cfg(feature = "hydrate")]
use super::types::{ChatReply, ChatRequest, FormResponse, ToggleResponse};

/// Decode a JSON body. Status codes are not inspected: these endpoints
/// describe failures in the body.
#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn request_error(e: impl std::fmt::Display) -> ApiError {
    ApiError::Request(e.to_string())
}

#[cfg(feature = "hydrate")]
fn decode_error(e: impl std::fmt::Display) -> ApiError {
    ApiError::Decode(e.to_string())
}

/// Ask the server to persist the toggled theme via `POST {url}`.
///
/// No body is sent; the server reads the new value from session state.
/// Returns the `success` flag from the response.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request is rejected or the body is not JSON.
pub async fn toggle_dark_mode(url: &str) -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(request_error)?;
        let body: ToggleResponse = resp.json().await.map_err(decode_error)?;
        Ok(body.success)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Send a chat prompt via `POST {url}` and return the reply text.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body lacks `reply`.
/// A non-2xx response that still carries `{reply}` is a normal reply; the
/// server uses it to explain its own errors.
pub async fn send_chat(url: &str, prompt: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = ChatRequest { prompt: prompt.to_owned() };
        let resp = gloo_net::http::Request::post(url)
            .json(&payload)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        let status = resp.status();
        let text = resp.text().await.map_err(decode_error)?;
        if !(200..300).contains(&status) {
            leptos::logging::warn!("chat endpoint answered {status}");
        }
        let body: ChatReply = decode_body(&text)?;
        Ok(body.reply)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, prompt);
        Err(ApiError::Unavailable)
    }
}

/// Submit a form's fields to its declared target.
///
/// POST sends the fields as a `FormData` body; GET moves them into the
/// query string.
///
/// # Errors
///
/// Returns an [`ApiError`] if the form cannot be serialized, the request is
/// rejected, or the body is not the expected JSON.
#[cfg(feature = "hydrate")]
pub async fn submit_form(
    submission: &crate::util::form::FormSubmission,
    form: &web_sys::HtmlFormElement,
) -> Result<FormResponse, ApiError> {
    use crate::util::form::FormMethod;

    let data = web_sys::FormData::new_with_form(form).map_err(|e| request_error(format!("{e:?}")))?;
    let resp = match submission.method {
        FormMethod::Post => gloo_net::http::Request::post(&submission.action)
            .body(data)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?,
        FormMethod::Get => {
            let params = web_sys::UrlSearchParams::new_with_str_sequence_sequence(&data)
                .map_err(|e| request_error(format!("{e:?}")))?;
            let query = String::from(params.to_string());
            gloo_net::http::Request::get(&submission.request_url(&query))
                .send()
                .await
                .map_err(request_error)?
        }
    };
    leptos::logging::log!("{} {} -> {}", submission.method.as_str(), submission.action, resp.status());
    resp.json::<FormResponse>().await.map_err(decode_error)
}
