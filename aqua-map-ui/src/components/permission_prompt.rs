//! "Location needed" modal.

use crate::dispatch::dispatch;
use crate::state::AppState;
use aqua_state::event::Event as DashboardEvent;
use dioxus::prelude::*;

#[component]
pub fn PermissionPrompt() -> Element {
    let state = use_context::<AppState>();
    if !state.dashboard.read().location().is_prompt_visible() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "position: absolute; inset: 0; z-index: 2000; display: flex; align-items: center; justify-content: center; background: rgba(2, 6, 23, 0.7);",
            div {
                style: "width: 360px; background: #0f172a; color: white; border: 1px solid #334155; border-radius: 24px; padding: 28px; text-align: center;",
                h3 { style: "margin-top: 0;", "Location access needed" }
                p {
                    style: "color: #94a3b8; font-size: 14px;",
                    "Allow location access so we can find the lake nearest to you."
                }
                div {
                    style: "display: flex; gap: 12px; margin-top: 20px;",
                    button {
                        style: "flex: 1; padding: 12px; border-radius: 14px; border: 1px solid #334155; background: transparent; color: #94a3b8; cursor: pointer;",
                        onclick: move |_| dispatch(state, DashboardEvent::PromptDismissed),
                        "Not now"
                    }
                    button {
                        style: "flex: 1; padding: 12px; border-radius: 14px; border: none; background: #2563eb; color: white; font-weight: bold; cursor: pointer;",
                        onclick: move |_| dispatch(state, DashboardEvent::PromptAuthorized),
                        "Authorize"
                    }
                }
            }
        }
    }
}
