use super::*;

#[test]
fn default_config_matches_page_contract() {
    let config = UiConfig::default();
    assert_eq!(config.toggle_dark_mode_url, "/toggle-dark-mode");
    assert_eq!(config.chat_url, "/api/chat");
    assert_eq!(config.flash_fade_delay_ms, 5000);
    assert_eq!(config.flash_remove_delay_ms, 500);
    assert_eq!(config.min_password_len, 6);
}

#[test]
fn from_json_overlays_only_present_keys() {
    let config = UiConfig::from_json(r#"{"chat_url":"/v2/chat"}"#).unwrap();
    assert_eq!(config.chat_url, "/v2/chat");
    assert_eq!(config.toggle_dark_mode_url, DEFAULT_TOGGLE_DARK_MODE_URL);
    assert_eq!(config.flash_fade_delay_ms, DEFAULT_FLASH_FADE_DELAY_MS);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(UiConfig::from_json("{}").unwrap(), UiConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = UiConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("invalid ui config json"));
}

#[test]
fn from_json_rejects_zero_delays() {
    let err = UiConfig::from_json(r#"{"flash_fade_delay_ms":0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroValue { field: "flash_fade_delay_ms" }));

    let err = UiConfig::from_json(r#"{"min_password_len":0}"#).unwrap_err();
    assert_eq!(err.to_string(), "invalid ui config: min_password_len must be greater than zero");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_without_browser_returns_defaults() {
    assert_eq!(UiConfig::load(), UiConfig::default());
}

#[test]
fn dom_ids_match_page_markup() {
    use super::dom::*;

    assert_eq!(DARK_MODE_SWITCH_ID, "dark-mode-switch");
    assert_eq!(AJAX_FORM_ATTR, "data-ajax");
    assert_eq!(THEME_ATTR, "data-theme");
    assert_eq!(AUTH_CARD_CLASS, "auth-card");
    assert_eq!(
        [CHAT_BUTTON_ID, CHAT_MODAL_ID, CHAT_CLOSE_ID, CHAT_FORM_ID, CHAT_INPUT_ID, CHAT_MESSAGES_ID],
        ["ai-chat-button", "ai-chat-modal", "ai-chat-close", "ai-chat-form", "ai-chat-input", "ai-chat-messages"]
    );
    assert_eq!(CHAT_MESSAGE_CLASS, "ai-chat-message");
    assert_eq!(CHAT_TYPING_CLASS, "typing-indicator");
    assert_eq!(
        [FLASH_CONTAINER_CLASS, FLASH_MESSAGE_CLASS, FLASH_CLOSE_CLASS, FLASH_FADE_CLASS],
        ["flash-container", "flash-message", "flash-close", "fade-out"]
    );
}
