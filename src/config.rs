//! UI configuration: endpoints, timings, and the DOM binding surface.
//!
//! DESIGN
//! ======
//! Defaults match the page markup and server routes this crate is deployed
//! against. A page may override any field by embedding a JSON object in a
//! `<meta name="ui-config" content="...">` tag; missing keys keep defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_TOGGLE_DARK_MODE_URL: &str = "/toggle-dark-mode";
pub const DEFAULT_CHAT_URL: &str = "/api/chat";
pub const DEFAULT_FLASH_FADE_DELAY_MS: u32 = 5000;
pub const DEFAULT_FLASH_REMOVE_DELAY_MS: u32 = 500;
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;

/// Name of the meta tag carrying a JSON config override.
pub const CONFIG_META_NAME: &str = "ui-config";

/// Element identifiers and class names the page markup binds to.
pub mod dom {
    pub const DARK_MODE_SWITCH_ID: &str = "dark-mode-switch";
    pub const AJAX_FORM_ATTR: &str = "data-ajax";
    pub const THEME_ATTR: &str = "data-theme";
    pub const AUTH_CARD_CLASS: &str = "auth-card";

    pub const FLASH_CONTAINER_CLASS: &str = "flash-container";
    pub const FLASH_MESSAGE_CLASS: &str = "flash-message";
    pub const FLASH_CLOSE_CLASS: &str = "flash-close";
    pub const FLASH_FADE_CLASS: &str = "fade-out";
    pub const FLASH_ID_ATTR: &str = "data-flash-id";

    pub const CHAT_BUTTON_ID: &str = "ai-chat-button";
    pub const CHAT_MODAL_ID: &str = "ai-chat-modal";
    pub const CHAT_CLOSE_ID: &str = "ai-chat-close";
    pub const CHAT_FORM_ID: &str = "ai-chat-form";
    pub const CHAT_INPUT_ID: &str = "ai-chat-input";
    pub const CHAT_MESSAGES_ID: &str = "ai-chat-messages";
    pub const CHAT_MESSAGE_CLASS: &str = "ai-chat-message";
    pub const CHAT_TYPING_CLASS: &str = "typing-indicator";
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid ui config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid ui config: {field} must be greater than zero")]
    ZeroValue { field: &'static str },
}

/// Runtime-tunable UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub toggle_dark_mode_url: String,
    pub chat_url: String,
    pub flash_fade_delay_ms: u32,
    pub flash_remove_delay_ms: u32,
    pub min_password_len: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toggle_dark_mode_url: DEFAULT_TOGGLE_DARK_MODE_URL.to_owned(),
            chat_url: DEFAULT_CHAT_URL.to_owned(),
            flash_fade_delay_ms: DEFAULT_FLASH_FADE_DELAY_MS,
            flash_remove_delay_ms: DEFAULT_FLASH_REMOVE_DELAY_MS,
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

impl UiConfig {
    /// Parse a JSON override object on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or a length/delay is zero.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.flash_fade_delay_ms == 0 {
            return Err(ConfigError::ZeroValue { field: "flash_fade_delay_ms" });
        }
        if self.flash_remove_delay_ms == 0 {
            return Err(ConfigError::ZeroValue { field: "flash_remove_delay_ms" });
        }
        if self.min_password_len == 0 {
            return Err(ConfigError::ZeroValue { field: "min_password_len" });
        }
        Ok(())
    }

    /// Read the config override from the page's meta tag.
    ///
    /// Falls back to defaults when the tag is absent or unparseable.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            use crate::util::js::logged;

            let selector = format!("meta[name=\"{CONFIG_META_NAME}\"]");
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| logged(d.query_selector(&selector), "ui config lookup").flatten())
                .and_then(|el| el.dyn_ref::<web_sys::HtmlMetaElement>().map(web_sys::HtmlMetaElement::content));
            match content {
                Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                    leptos::logging::warn!("{e}; using default ui config");
                    Self::default()
                }),
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
