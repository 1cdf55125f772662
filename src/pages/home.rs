//! Signed-in landing page: settings, profile form, and the chat widget.

use leptos::prelude::*;

use crate::components::ajax_form::AjaxForm;
use crate::components::chat_widget::ChatWidget;
use crate::components::dark_mode_switch::DarkModeSwitch;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Dashboard"</h1>
                <DarkModeSwitch/>
            </header>
            <section class="home-page__section">
                <h2>"Profile"</h2>
                <AjaxForm action="/profile" class="profile-form">
                    <input class="profile-input" type="text" name="display_name" placeholder="Display name" />
                    <textarea class="profile-input" name="bio" placeholder="About you"></textarea>
                    <button class="btn btn--primary" type="submit">"Save"</button>
                </AjaxForm>
            </section>
            <ChatWidget/>
        </div>
    }
}
