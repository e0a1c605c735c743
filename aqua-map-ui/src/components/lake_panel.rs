//! Detail panel for the selected lake.

use crate::dispatch::dispatch;
use crate::state::AppState;
use aqua_lakes::detail;
use aqua_state::event::Event as DashboardEvent;
use dioxus::prelude::*;

/// Shows the selected lake; renders nothing when no lake is selected.
#[component]
pub fn LakePanel() -> Element {
    let state = use_context::<AppState>();
    let lake = {
        let registry = state.registry.read();
        state.dashboard.read().selected_lake(&registry).cloned()
    };
    let Some(lake) = lake else {
        return rsx! {};
    };

    let color = lake.quality.color();
    let summary = detail::conservation_summary(&lake);
    let turbidity = detail::turbidity_label();
    let ph = detail::ph_label();

    rsx! {
        div {
            style: "position: absolute; top: 96px; right: 24px; width: 340px; z-index: 1000; background: rgba(15, 23, 42, 0.95); color: white; border: 1px solid #334155; border-radius: 24px; padding: 24px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: start;",
                div {
                    h2 { style: "margin: 0; font-size: 22px;", "{lake.name}" }
                    div { style: "color: #94a3b8; font-size: 13px;", "{lake.location}" }
                }
                button {
                    style: "background: none; border: none; color: #94a3b8; font-size: 18px; cursor: pointer;",
                    onclick: move |_| dispatch(state, DashboardEvent::PanelDismissed),
                    "x"
                }
            }
            div {
                style: "display: inline-block; margin: 16px 0; padding: 4px 12px; border-radius: 999px; background: {color}; font-weight: bold; text-transform: uppercase; font-size: 11px;",
                "{lake.quality} quality"
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                div {
                    style: "background: #1e293b; border-radius: 16px; padding: 12px;",
                    div { style: "color: #64748b; font-size: 11px;", "Turbidity" }
                    div { style: "font-weight: bold;", "{turbidity}" }
                }
                div {
                    style: "background: #1e293b; border-radius: 16px; padding: 12px;",
                    div { style: "color: #64748b; font-size: 11px;", "pH level" }
                    div { style: "font-weight: bold;", "{ph}" }
                }
            }
            p { style: "color: #cbd5e1; font-size: 13px; line-height: 1.5;", "{summary}" }
            button {
                style: "width: 100%; padding: 12px; border-radius: 16px; border: none; background: #2563eb; color: white; font-weight: bold; cursor: pointer;",
                onclick: move |_| dispatch(state, DashboardEvent::DirectionsRequested),
                "Get directions"
            }
        }
    }
}
