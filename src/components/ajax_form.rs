//! Form wrapper that submits through `fetch` and reports via flash messages.

use leptos::prelude::*;

use crate::state::notifications::NotificationCenter;

/// A `<form data-ajax="true">` whose submit is intercepted.
#[component]
pub fn AjaxForm(
    action: &'static str,
    #[prop(default = "post")] method: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let center = expect_context::<RwSignal<NotificationCenter>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            use crate::components::flash_messages::show_flash;
            use crate::util::form::{FormOutcome, FormSubmission, resolve_outcome};
            use crate::util::js::logged;

            let Some(form) = ev.target().and_then(|t| t.dyn_ref::<web_sys::HtmlFormElement>().cloned()) else {
                return;
            };

            let window = web_sys::window();
            let current_path = window
                .as_ref()
                .and_then(|w| logged(w.location().pathname(), "location lookup"))
                .unwrap_or_default();
            let submission = FormSubmission::from_attrs(
                &form.get_attribute("action").unwrap_or_default(),
                &form.get_attribute("method").unwrap_or_default(),
                &current_path,
            );

            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_form(&submission, &form).await;
                match resolve_outcome(result) {
                    FormOutcome::Navigate(url) => {
                        if let Some(window) = window {
                            if let Err(e) = window.location().set_href(&url) {
                                leptos::logging::warn!("navigation to {url} failed: {e:?}");
                            }
                        }
                    }
                    FormOutcome::Notify { kind, text } => show_flash(center, text, kind),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = center;
        }
    };

    view! {
        <form class=class action=action method=method data-ajax="true" on:submit=on_submit>
            {children()}
        </form>
    }
}
