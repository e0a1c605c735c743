//! Collapsible chat with the water assistant.

use crate::dispatch::dispatch;
use crate::state::AppState;
use aqua_chat::config::GREETING;
use aqua_chat::ChatMessage;
use aqua_state::event::Event as DashboardEvent;
use dioxus::prelude::*;

fn bubble_style(message: &ChatMessage) -> &'static str {
    if message.is_user() {
        "align-self: flex-end; max-width: 80%; padding: 10px 14px; border-radius: 16px; background: #2563eb; color: white; font-size: 13px;"
    } else {
        "align-self: flex-start; max-width: 80%; padding: 10px 14px; border-radius: 16px; background: #1e293b; color: #e2e8f0; font-size: 13px;"
    }
}

#[component]
pub fn ChatWidget() -> Element {
    let mut state = use_context::<AppState>();
    let open = (state.chat_open)();
    let input = (state.chat_input)();
    let (transcript, in_flight) = {
        let dashboard = state.dashboard.read();
        (
            dashboard.chat().transcript().to_vec(),
            dashboard.chat().is_in_flight(),
        )
    };

    // The input is kept when the session refuses the message (blank or busy).
    let mut submit = move || {
        let text = (state.chat_input)();
        let before = state.dashboard.read().chat().transcript().len();
        dispatch(state, DashboardEvent::ChatSubmitted(text));
        if state.dashboard.read().chat().transcript().len() > before {
            state.chat_input.set(String::new());
        }
    };

    if !open {
        return rsx! {
            button {
                style: "position: absolute; bottom: 32px; right: 300px; z-index: 1000; padding: 14px 20px; border-radius: 999px; border: none; background: #2563eb; color: white; font-weight: bold; cursor: pointer;",
                onclick: move |_| state.chat_open.set(true),
                "Ask AI Aqua"
            }
        };
    }

    rsx! {
        div {
            style: "position: absolute; bottom: 32px; right: 300px; z-index: 1000; width: 360px; height: 480px; display: flex; flex-direction: column; background: #0f172a; color: white; border: 1px solid #334155; border-radius: 24px; overflow: hidden;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 14px 18px; border-bottom: 1px solid #1e293b;",
                strong { "AI Aqua" }
                button {
                    style: "background: none; border: none; color: #94a3b8; cursor: pointer;",
                    onclick: move |_| state.chat_open.set(false),
                    "x"
                }
            }
            div {
                style: "flex: 1; overflow-y: auto; padding: 14px; display: flex; flex-direction: column; gap: 10px;",
                div {
                    style: "align-self: flex-start; max-width: 80%; padding: 10px 14px; border-radius: 16px; background: #1e293b; color: #e2e8f0; font-size: 13px;",
                    "{GREETING}"
                }
                for (i, message) in transcript.iter().enumerate() {
                    div {
                        key: "{i}",
                        style: bubble_style(message),
                        "{message.content}"
                    }
                }
                if in_flight {
                    div {
                        style: "align-self: flex-start; color: #64748b; font-size: 12px;",
                        "AI Aqua is thinking..."
                    }
                }
            }
            div {
                style: "display: flex; gap: 8px; padding: 12px; border-top: 1px solid #1e293b;",
                input {
                    r#type: "text",
                    value: "{input}",
                    placeholder: "Ask about water quality...",
                    style: "flex: 1; padding: 10px 14px; border-radius: 14px; border: 1px solid #334155; background: #020617; color: white;",
                    oninput: move |evt: Event<FormData>| state.chat_input.set(evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                button {
                    style: "padding: 10px 16px; border-radius: 14px; border: none; background: #2563eb; color: white; cursor: pointer;",
                    disabled: in_flight || input.trim().is_empty(),
                    onclick: move |_| submit(),
                    "Send"
                }
            }
        }
    }
}
