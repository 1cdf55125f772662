use super::*;

fn response(success: bool) -> FormResponse {
    FormResponse { success, ..FormResponse::default() }
}

// =============================================================
// FormMethod / FormSubmission
// =============================================================

#[test]
fn method_parse_is_case_insensitive() {
    assert_eq!(FormMethod::parse("GET"), FormMethod::Get);
    assert_eq!(FormMethod::parse(" get "), FormMethod::Get);
    assert_eq!(FormMethod::parse("post"), FormMethod::Post);
    assert_eq!(FormMethod::parse(""), FormMethod::Post);
    assert_eq!(FormMethod::parse("dialog"), FormMethod::Post);
}

#[test]
fn empty_action_targets_current_path() {
    let sub = FormSubmission::from_attrs("  ", "post", "/login");
    assert_eq!(sub.action, "/login");
    assert_eq!(sub.method, FormMethod::Post);
}

#[test]
fn post_url_ignores_query() {
    let sub = FormSubmission::from_attrs("/login", "post", "/");
    assert_eq!(sub.request_url("a=1"), "/login");
}

#[test]
fn get_url_appends_query() {
    let sub = FormSubmission::from_attrs("/search", "get", "/");
    assert_eq!(sub.request_url("q=rust"), "/search?q=rust");
    assert_eq!(sub.request_url(""), "/search");

    let sub = FormSubmission::from_attrs("/search?page=2", "GET", "/");
    assert_eq!(sub.request_url("q=rust"), "/search?page=2&q=rust");
}

// =============================================================
// resolve_outcome
// =============================================================

#[test]
fn success_with_redirect_navigates_without_notification() {
    let resp = FormResponse { redirect: Some("/dashboard".to_owned()), ..response(true) };
    assert_eq!(resolve_outcome(Ok(resp)), FormOutcome::Navigate("/dashboard".to_owned()));
}

#[test]
fn success_without_redirect_uses_message() {
    let resp = FormResponse { message: Some("Saved".to_owned()), ..response(true) };
    assert_eq!(
        resolve_outcome(Ok(resp)),
        FormOutcome::Notify { kind: FlashKind::Success, text: "Saved".to_owned() }
    );
}

#[test]
fn success_without_message_uses_default() {
    assert_eq!(
        resolve_outcome(Ok(response(true))),
        FormOutcome::Notify { kind: FlashKind::Success, text: DEFAULT_SUCCESS_MESSAGE.to_owned() }
    );
}

#[test]
fn empty_redirect_is_treated_as_absent() {
    let resp = FormResponse { redirect: Some(String::new()), ..response(true) };
    assert!(matches!(resolve_outcome(Ok(resp)), FormOutcome::Notify { kind: FlashKind::Success, .. }));
}

#[test]
fn failure_uses_server_error_text() {
    let resp = FormResponse { error: Some("X".to_owned()), ..response(false) };
    assert_eq!(
        resolve_outcome(Ok(resp)),
        FormOutcome::Notify { kind: FlashKind::Error, text: "X".to_owned() }
    );
}

#[test]
fn failure_ignores_redirect() {
    let resp = FormResponse { redirect: Some("/x".to_owned()), ..response(false) };
    assert_eq!(
        resolve_outcome(Ok(resp)),
        FormOutcome::Notify { kind: FlashKind::Error, text: DEFAULT_ERROR_MESSAGE.to_owned() }
    );
}

#[test]
fn transport_failure_describes_network_error() {
    let outcome = resolve_outcome(Err(ApiError::Request("connection refused".to_owned())));
    assert_eq!(
        outcome,
        FormOutcome::Notify {
            kind: FlashKind::Error,
            text: "Network error: request failed: connection refused".to_owned()
        }
    );
}

#[test]
fn default_messages_match_page_copy() {
    assert_eq!(DEFAULT_SUCCESS_MESSAGE, "Action completed successfully");
    assert_eq!(DEFAULT_ERROR_MESSAGE, "An error occurred");
}
