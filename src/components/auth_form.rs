//! Plain-POST authentication form with a client-side password guard.
//!
//! The form submits normally; the server answers with a redirect and
//! renders its own flash messages. The guard only cancels the submit when
//! the password is too short.

use leptos::prelude::*;

use crate::config::UiConfig;

/// A regular `<form method="post">` whose password input is checked on submit.
#[component]
pub fn AuthForm(action: &'static str, children: Children) -> impl IntoView {
    let config = expect_context::<UiConfig>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            use crate::util::auth::{SubmitDecision, alert, guard_submit};
            use crate::util::js::logged;

            let password = ev
                .target()
                .and_then(|t| t.dyn_ref::<web_sys::HtmlFormElement>().cloned())
                .and_then(|form| logged(form.query_selector("input[type=\"password\"]"), "password lookup").flatten())
                .and_then(|el| el.dyn_ref::<web_sys::HtmlInputElement>().map(web_sys::HtmlInputElement::value));

            if let SubmitDecision::Block(message) = guard_submit(password.as_deref(), config.min_password_len) {
                ev.prevent_default();
                alert(&message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &config);
        }
    };

    view! {
        <form class="auth-form" action=action method="post" on:submit=on_submit>
            {children()}
        </form>
    }
}
