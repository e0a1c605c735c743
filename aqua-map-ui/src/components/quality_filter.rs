//! Quality filter chips. Clicking the active chip clears the filter.

use crate::dispatch::dispatch;
use crate::state::AppState;
use aqua_lakes::quality::WaterQuality;
use aqua_state::event::Event as DashboardEvent;
use dioxus::prelude::*;

fn chip_style(quality: WaterQuality, active: bool) -> String {
    let color = quality.color();
    if active {
        format!("padding: 6px 14px; border-radius: 999px; border: 1px solid {color}; background: {color}; color: white; font-weight: bold; cursor: pointer; text-transform: capitalize;")
    } else {
        format!("padding: 6px 14px; border-radius: 999px; border: 1px solid {color}; background: transparent; color: {color}; cursor: pointer; text-transform: capitalize;")
    }
}

#[component]
pub fn QualityFilter() -> Element {
    let state = use_context::<AppState>();
    let active = state.dashboard.read().filter();

    rsx! {
        div {
            style: "display: flex; gap: 8px;",
            for quality in WaterQuality::ALL {
                button {
                    key: "{quality}",
                    style: chip_style(quality, active == Some(quality)),
                    onclick: move |_| dispatch(state, DashboardEvent::FilterToggled(quality)),
                    "{quality}"
                }
            }
        }
    }
}
