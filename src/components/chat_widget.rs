//! Modal chat widget: trigger button, transcript, and prompt form.

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::config::dom::{
    CHAT_BUTTON_ID, CHAT_CLOSE_ID, CHAT_FORM_ID, CHAT_INPUT_ID, CHAT_MESSAGE_CLASS, CHAT_MESSAGES_ID, CHAT_MODAL_ID,
    CHAT_TYPING_CLASS,
};
use crate::state::chat::ChatState;

/// Floating button that opens a modal conversation with the chat endpoint.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<UiConfig>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_open = move |_| chat.update(ChatState::open);
    let on_close = move |_| chat.update(ChatState::close);
    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        let inside_content = ev.target() != ev.current_target();
        chat.update(|c| c.backdrop_click(inside_content));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(prompt) = chat.try_update(ChatState::submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let url = config.chat_url.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::send_chat(&url, &prompt).await {
                    Ok(reply) => chat.update(|c| c.receive_reply(reply)),
                    Err(e) => {
                        leptos::logging::warn!("chat request failed: {e}");
                        chat.update(ChatState::receive_failure);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (prompt, &config);
        }
    };

    let can_send = move || !chat.get().input.trim().is_empty();

    view! {
        <button id=CHAT_BUTTON_ID class="chat-widget__button" type="button" on:click=on_open title="Open chat">
            "Chat"
        </button>
        <div
            id=CHAT_MODAL_ID
            class="ai-chat-modal"
            style:display=move || if chat.get().open { "flex" } else { "none" }
            on:click=on_backdrop
        >
            <div class="ai-chat-modal__content">
                <div class="ai-chat-modal__header">
                    <h2>"Assistant"</h2>
                    <button id=CHAT_CLOSE_ID class="ai-chat-modal__close" type="button" on:click=on_close title="Close chat">
                        "✕"
                    </button>
                </div>
                <div id=CHAT_MESSAGES_ID class="ai-chat-modal__messages" node_ref=messages_ref>
                    {move || {
                        chat.get()
                            .messages
                            .into_iter()
                            .map(|msg| {
                                if msg.is_placeholder {
                                    let class = format!("{CHAT_MESSAGE_CLASS} {} {CHAT_TYPING_CLASS}", msg.role.as_str());
                                    return view! {
                                        <div class=class>
                                            <span class="dot"></span>
                                            <span class="dot"></span>
                                            <span class="dot"></span>
                                        </div>
                                    }
                                        .into_any();
                                }
                                let class = format!("{CHAT_MESSAGE_CLASS} {}", msg.role.as_str());
                                view! { <div class=class>{msg.text}</div> }.into_any()
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <form id=CHAT_FORM_ID class="ai-chat-modal__form" on:submit=on_submit>
                    <input
                        id=CHAT_INPUT_ID
                        class="ai-chat-modal__input"
                        type="text"
                        autocomplete="off"
                        placeholder="Ask something..."
                        prop:value=move || chat.get().input
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            chat.update(|c| c.input = value);
                        }
                    />
                    <button class="btn btn--primary ai-chat-modal__send" type="submit" disabled=move || !can_send()>
                        "Send"
                    </button>
                </form>
            </div>
        </div>
    }
}
