//! Document theme attribute access.
//!
//! Reads and writes the `data-theme` attribute on `<body>`. The server
//! renders the persisted preference into that attribute; the system
//! color scheme is only consulted when it is missing. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Attribute writes are best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
use crate::config::dom::THEME_ATTR;
#[cfg(feature = "hydrate")]
use crate::util::js::logged;

/// Interpret a `data-theme` attribute value. `None` when unrecognized.
#[cfg(any(test, feature = "hydrate"))]
fn parse_theme(value: &str) -> Option<bool> {
    match value.trim() {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Read the current preference from the document body.
///
/// Returns `false` outside a browser.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        let attr = window
            .document()
            .and_then(|d| d.body())
            .and_then(|el| el.get_attribute(THEME_ATTR));
        if let Some(dark) = attr.as_deref().and_then(parse_theme) {
            return dark;
        }

        // Fall back to system preference.
        logged(window.match_media("(prefers-color-scheme: dark)"), "matchMedia")
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on `<body>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            if let Err(e) = el.set_attribute(THEME_ATTR, if enabled { "dark" } else { "light" }) {
                leptos::logging::warn!("failed to set theme attribute: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
