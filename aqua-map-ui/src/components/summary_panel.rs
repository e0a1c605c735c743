//! Registry composition by quality, computed from the loaded registry.

use crate::state::AppState;
use aqua_lakes::composition::QualityBreakdown;
use dioxus::prelude::*;

#[component]
pub fn SummaryPanel() -> Element {
    let state = use_context::<AppState>();
    let breakdown = QualityBreakdown::of(state.registry.read().lakes());

    rsx! {
        div {
            style: "position: absolute; bottom: 32px; right: 24px; z-index: 1000; width: 260px; background: rgba(15, 23, 42, 0.95); color: white; border: 1px solid #334155; border-radius: 20px; padding: 16px;",
            div {
                style: "font-size: 11px; color: #64748b; text-transform: uppercase; margin-bottom: 8px;",
                "Registry composition ({breakdown.total} lakes)"
            }
            for share in breakdown.shares.iter() {
                div {
                    key: "{share.quality}",
                    style: "margin: 6px 0;",
                    div {
                        style: "display: flex; justify-content: space-between; font-size: 12px; text-transform: capitalize;",
                        span { "{share.quality}" }
                        span { "{share.rounded_percent()}%" }
                    }
                    div {
                        style: "height: 6px; background: #1e293b; border-radius: 3px;",
                        div {
                            style: "height: 6px; border-radius: 3px; width: {share.percent}%; background: {share.quality.color()};",
                        }
                    }
                }
            }
        }
    }
}
