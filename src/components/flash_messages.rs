//! Flash message container and the `show_flash` entry point.
//!
//! Each shown message gets exactly one timer chain: fade after the configured
//! delay, then removal. Dismiss clicks are handled by a single delegated
//! listener on the container.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::config::dom::FLASH_ID_ATTR;
use crate::config::dom::{FLASH_CLOSE_CLASS, FLASH_CONTAINER_CLASS, FLASH_FADE_CLASS, FLASH_MESSAGE_CLASS};
use crate::state::notifications::{FlashKind, FlashPhase, NotificationCenter};

fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Display a message in the shared container and schedule its expiry.
pub fn show_flash(center: RwSignal<NotificationCenter>, text: impl Into<String>, kind: FlashKind) {
    let shown_at = now_ms();
    let Some(id) = center.try_update(|c| c.show(text, kind, shown_at)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        use std::time::Duration;

        let (fade, remove) = center.with_untracked(|c| (c.fade_delay_ms, c.remove_delay_ms));
        leptos::task::spawn_local(async move {
            // advance by schedule, not wall clock, so a throttled tab still fades first
            let fade_at = shown_at + f64::from(fade);
            gloo_timers::future::sleep(Duration::from_millis(u64::from(fade))).await;
            center.update(|c| c.advance_one(&id, fade_at));

            gloo_timers::future::sleep(Duration::from_millis(u64::from(remove))).await;
            center.update(|c| c.advance_one(&id, fade_at + f64::from(remove)));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Resolve the message id owning a clicked dismiss control, if any.
#[cfg(feature = "hydrate")]
fn dismissed_id(ev: &leptos::ev::MouseEvent) -> Option<String> {
    use wasm_bindgen::JsCast;

    use crate::util::js::logged;

    let target = ev.target()?;
    let target = target.dyn_ref::<web_sys::Element>()?;
    if !target.class_list().contains(FLASH_CLOSE_CLASS) {
        return None;
    }
    let message = logged(target.closest(&format!(".{FLASH_MESSAGE_CLASS}")), "flash lookup")??;
    message.get_attribute(FLASH_ID_ATTR)
}

/// Container for all active flash messages.
#[component]
pub fn FlashMessages() -> impl IntoView {
    let center = expect_context::<RwSignal<NotificationCenter>>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(id) = dismissed_id(&ev) {
                center.update(|c| {
                    c.dismiss(&id);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class=FLASH_CONTAINER_CLASS on:click=on_click>
            {move || {
                center
                    .get()
                    .messages
                    .into_iter()
                    .map(|msg| {
                        let fading = if msg.phase == FlashPhase::Fading { FLASH_FADE_CLASS } else { "" };
                        let class = format!("{FLASH_MESSAGE_CLASS} {} {fading}", msg.kind.as_str());
                        view! {
                            <div class=class data-flash-id=msg.id role="alert">
                                <span class="flash-message__text">{msg.text}</span>
                                <button type="button" class=FLASH_CLOSE_CLASS title="Dismiss">
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
