//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::flash_messages::FlashMessages;
use crate::config::UiConfig;
use crate::pages::{
    auth::{LoginPage, RegisterPage},
    home::HomePage,
};
use crate::state::{chat::ChatState, notifications::NotificationCenter, theme::ThemeState};
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the config and all widget state contexts, keeps the document
/// theme attribute in sync, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = UiConfig::load();
    let notifications = RwSignal::new(NotificationCenter::with_delays(
        config.flash_fade_delay_ms,
        config.flash_remove_delay_ms,
    ));
    let chat = RwSignal::new(ChatState::default());
    let theme = RwSignal::new(ThemeState { dark: dark_mode::read_preference() });

    provide_context(config);
    provide_context(notifications);
    provide_context(chat);
    provide_context(theme);

    Effect::new(move || dark_mode::apply(theme.get().dark));

    view! {
        <Stylesheet id="leptos" href="/pkg/portal-ui.css"/>
        <Title text="Portal"/>

        <FlashMessages/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
