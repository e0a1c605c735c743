//! Floating map buttons: nearest lake and locate me.

use crate::dispatch::dispatch;
use crate::state::AppState;
use aqua_state::event::Event as DashboardEvent;
use dioxus::prelude::*;

#[component]
pub fn MapControls() -> Element {
    let state = use_context::<AppState>();
    let locating = state.dashboard.read().location().is_pending();

    rsx! {
        div {
            style: "position: absolute; bottom: 32px; left: 24px; z-index: 1000; display: flex; flex-direction: column; gap: 10px;",
            button {
                style: "padding: 12px 18px; border-radius: 16px; border: none; background: #2563eb; color: white; font-weight: bold; cursor: pointer;",
                onclick: move |_| dispatch(state, DashboardEvent::FindNearest),
                "Intelligence Routing"
            }
            button {
                style: "padding: 12px 18px; border-radius: 16px; border: 1px solid #334155; background: #0f172a; color: white; cursor: pointer;",
                disabled: locating,
                onclick: move |_| dispatch(state, DashboardEvent::LocateMe),
                if locating { "Locating..." } else { "Locate me" }
            }
        }
    }
}
