use dioxus::prelude::*;

use api::ChatClient;

use crate::chat::{ChatMessage, Transcript, CHAT_THEMES, DEFAULT_CHAT_THEME};
use crate::icons::FaPaperPlane;
use crate::platform;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");
const CHAT_CSS: Asset = asset!("/assets/styling/chat.css");

const MESSAGES_ID: &str = "chat-messages";
const INPUT_ID: &str = "chatbot-input";

/// Chat page: theme strip, animated background, transcript and input.
#[component]
pub fn HomeView() -> Element {
    let client = use_context::<ChatClient>();
    let mut transcript = use_signal(Transcript::new);
    let mut input = use_signal(String::new);
    let mut chat_theme = use_signal(|| DEFAULT_CHAT_THEME.to_string());

    use_effect(move || {
        // Follow new messages and the typing row
        let _ = transcript.read();
        platform::scroll_to_bottom(MESSAGES_ID);
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(message) = transcript.write().begin_send(&input()) else {
            return;
        };
        input.set(String::new());
        platform::reset_height(INPUT_ID);

        let client = client.clone();
        spawn(async move {
            let reply = client.get_reply(&message).await;
            transcript.write().finish(reply);
        });
    };

    let messages = transcript.read().messages().to_vec();
    let pending = transcript.read().is_pending();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        document::Stylesheet { href: CHAT_CSS }

        section {
            class: "chatbot-section",

            div {
                class: "theme-selector",
                span { "Theme:" }
                for theme in CHAT_THEMES {
                    button {
                        key: "{theme.id}",
                        class: if chat_theme() == theme.id { "theme-btn active" } else { "theme-btn" },
                        "data-theme": theme.id,
                        onclick: move |_| chat_theme.set(theme.id.to_string()),
                        "{theme.label}"
                    }
                }
            }

            div { class: "animated-bg {chat_theme}" }

            div {
                class: "chatbot-container",
                role: "region",
                aria_label: "AI Chatbot",

                div {
                    id: MESSAGES_ID,
                    class: "chat-messages",
                    aria_live: "polite",
                    for message in messages {
                        ChatBubble { key: "{message.id}", message }
                    }
                    if pending {
                        TypingIndicator {}
                    }
                }

                form {
                    id: "chatbot-form",
                    class: "chatbot-input-area",
                    autocomplete: "off",
                    onsubmit: onsubmit,

                    textarea {
                        id: INPUT_ID,
                        class: "chatbot-input",
                        rows: "1",
                        placeholder: "Type your message...",
                        disabled: pending,
                        value: "{input}",
                        oninput: move |evt: FormEvent| {
                            input.set(evt.value());
                            platform::autosize(INPUT_ID);
                        },
                    }
                    button {
                        r#type: "submit",
                        id: "chatbot-send-btn",
                        class: "chatbot-send-btn",
                        aria_label: "Send",
                        disabled: pending,
                        Icon { icon: FaPaperPlane, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}

/// One transcript row. The text is a text node, so markup in it shows literally.
#[component]
pub fn ChatBubble(message: ChatMessage) -> Element {
    let sender = message.sender.class();
    let avatar = message.sender.avatar();

    rsx! {
        div {
            class: "chat-message {sender}",
            div { class: "chat-avatar", "{avatar}" }
            div { class: "chat-bubble", "{message.text}" }
        }
    }
}

#[component]
fn TypingIndicator() -> Element {
    rsx! {
        div {
            id: "typing-indicator",
            class: "chat-message bot typing-indicator-row",
            div { class: "chat-avatar", "🤖" }
            div {
                class: "typing-indicator",
                div { class: "typing-dot" }
                div { class: "typing-dot" }
                div { class: "typing-dot" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;

    #[test]
    fn test_bubble_renders_markup_as_text() {
        let message = ChatMessage {
            id: 1,
            sender: Sender::User,
            text: "<script>alert('x')</script>".to_string(),
        };
        let html = dioxus_ssr::render_element(rsx! {
            ChatBubble { message }
        });

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("chat-message user"));
        assert!(html.contains("🧑"));
    }

    #[test]
    fn test_bot_bubble_avatar() {
        let message = ChatMessage {
            id: 0,
            sender: Sender::Bot,
            text: "hi".to_string(),
        };
        let html = dioxus_ssr::render_element(rsx! {
            ChatBubble { message }
        });
        assert!(html.contains("chat-message bot"));
        assert!(html.contains("🤖"));
    }
}
