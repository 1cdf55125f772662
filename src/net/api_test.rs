use super::*;
use crate::net::types::{ChatReply, FormResponse, ToggleResponse};
use crate::state::chat::ChatState;

#[test]
fn decode_body_reads_server_error_reply() {
    // the chat endpoint answers 500 with an explanatory reply
    let body: ChatReply = decode_body(r#"{"reply":"An error occurred: model unavailable"}"#).unwrap();
    assert_eq!(body.reply, "An error occurred: model unavailable");

    let mut chat = ChatState { input: "hi".to_owned(), ..ChatState::default() };
    chat.submit();
    chat.receive_reply(body.reply);
    assert_eq!(
        chat.messages.last().map(|m| m.text.as_str()),
        Some("An error occurred: model unavailable")
    );
    assert_eq!(chat.pending_count(), 0);
}

#[test]
fn decode_body_reads_failed_toggle() {
    let body: ToggleResponse = decode_body(r#"{"success":false,"error":"db down"}"#).unwrap();
    assert!(!body.success);
}

#[test]
fn decode_body_reads_form_error() {
    let body: FormResponse = decode_body(r#"{"success":false,"error":"X"}"#).unwrap();
    assert_eq!(body.error.as_deref(), Some("X"));
}

#[test]
fn decode_body_rejects_html() {
    let err = decode_body::<ChatReply>("<!doctype html><p>Internal Server Error</p>").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(err.to_string().starts_with("invalid response body: "));
}

#[test]
fn decode_body_rejects_missing_reply() {
    assert!(matches!(decode_body::<ChatReply>(r#"{"error":"x"}"#), Err(ApiError::Decode(_))));
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Request("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
