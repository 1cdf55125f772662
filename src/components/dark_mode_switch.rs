//! Dark-mode switch with optimistic toggle and server persistence.

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::config::dom::DARK_MODE_SWITCH_ID;
use crate::state::theme::ThemeState;

/// Checkbox bound to the shared [`ThemeState`].
///
/// The document attribute follows the state through an effect installed by
/// `App`, so a rollback here also reverts the page theme.
#[component]
pub fn DarkModeSwitch() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let config = expect_context::<UiConfig>();

    let on_change = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        let Some(change) = theme.try_update(|t| t.toggle(checked)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let url = config.toggle_dark_mode_url.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::toggle_dark_mode(&url).await;
                let rolled_back = theme.try_update(|t| t.settle(change, &outcome)).unwrap_or(false);
                if rolled_back {
                    match outcome {
                        Ok(_) => leptos::logging::warn!("dark mode toggle rejected by server"),
                        Err(e) => leptos::logging::warn!("dark mode toggle failed: {e}"),
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (change, &config);
        }
    };

    view! {
        <label class="dark-mode-switch">
            <input
                id=DARK_MODE_SWITCH_ID
                class="dark-mode-switch__input"
                type="checkbox"
                role="switch"
                prop:checked=move || theme.get().dark
                on:change=on_change
            />
            <span class="dark-mode-switch__label">"Dark mode"</span>
        </label>
    }
}
