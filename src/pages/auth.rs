//! Login and registration pages.
//!
//! Both forms post normally; the server answers with a redirect and renders
//! its own flash messages. `AuthForm` only guards the password length.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::config::dom::AUTH_CARD_CLASS;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class=AUTH_CARD_CLASS>
                <h1>"Sign In"</h1>
                <AuthForm action="/login">
                    <input class="auth-input" type="email" name="email" placeholder="you@example.com" required=true />
                    <input class="auth-input" type="password" name="password" placeholder="Password" required=true />
                    <button class="auth-button" type="submit">"Sign In"</button>
                </AuthForm>
                <p class="auth-card__footer">
                    "No account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class=AUTH_CARD_CLASS>
                <h1>"Create Account"</h1>
                <AuthForm action="/register">
                    <input class="auth-input" type="text" name="name" placeholder="Name" required=true />
                    <input class="auth-input" type="email" name="email" placeholder="you@example.com" required=true />
                    <input class="auth-input" type="password" name="password" placeholder="Password" required=true />
                    <button class="auth-button" type="submit">"Register"</button>
                </AuthForm>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
