//! Lake search input with results dropdown.

use crate::dispatch::dispatch;
use crate::state::AppState;
use aqua_lakes::lake::LakeId;
use aqua_lakes::search::ListingMode;
use aqua_state::event::Event as DashboardEvent;
use dioxus::prelude::*;

/// Search box. The dropdown lists the featured lakes while the query is
/// blank, otherwise the matches (or a "no match" row).
#[component]
pub fn SearchBox() -> Element {
    let mut state = use_context::<AppState>();
    let query = state.dashboard.read().query().to_string();
    let open = (state.search_open)();

    let (rows, mode, no_match) = {
        let registry = state.registry.read();
        let dashboard = state.dashboard.read();
        let listing = dashboard.visible(&registry);
        let rows: Vec<(LakeId, String, String, &'static str)> = listing
            .lakes
            .iter()
            .map(|lake| {
                (
                    lake.id.clone(),
                    lake.name.clone(),
                    lake.location.clone(),
                    lake.quality.color(),
                )
            })
            .collect();
        (rows, listing.mode, listing.is_no_match())
    };
    let heading = match mode {
        ListingMode::Featured => "Featured lakes",
        ListingMode::Matches => "Matches",
    };

    let on_input = move |evt: Event<FormData>| {
        dispatch(state, DashboardEvent::QueryChanged(evt.value()));
        state.search_open.set(true);
    };

    rsx! {
        div {
            style: "position: relative; width: 360px;",
            input {
                r#type: "text",
                placeholder: "Search lakes or locations...",
                value: "{query}",
                style: "width: 100%; padding: 12px 40px 12px 16px; border-radius: 16px; border: 1px solid #334155; background: #0f172a; color: white;",
                oninput: on_input,
                onfocus: move |_| state.search_open.set(true),
            }
            if !query.is_empty() {
                button {
                    style: "position: absolute; right: 8px; top: 8px; background: none; border: none; color: #94a3b8; cursor: pointer;",
                    onclick: move |_| dispatch(state, DashboardEvent::QueryCleared),
                    "x"
                }
            }
            if open {
                div {
                    style: "position: absolute; top: 52px; left: 0; right: 0; background: #0f172a; border: 1px solid #334155; border-radius: 16px; padding: 8px; max-height: 320px; overflow-y: auto; z-index: 1100;",
                    div {
                        style: "display: flex; justify-content: space-between; color: #64748b; font-size: 11px; padding: 4px 8px; text-transform: uppercase;",
                        span { "{heading}" }
                        button {
                            style: "background: none; border: none; color: #64748b; cursor: pointer;",
                            onclick: move |_| state.search_open.set(false),
                            "close"
                        }
                    }
                    if no_match {
                        div {
                            style: "padding: 12px; color: #94a3b8;",
                            "No lakes match your search."
                        }
                    }
                    for (id, name, location, color) in rows.into_iter() {
                        button {
                            key: "{id}",
                            style: "display: flex; width: 100%; align-items: center; gap: 10px; padding: 8px; background: none; border: none; color: white; text-align: left; cursor: pointer;",
                            onclick: move |_| {
                                dispatch(state, DashboardEvent::SearchResultChosen(id.clone()));
                                state.search_open.set(false);
                            },
                            span {
                                style: "width: 10px; height: 10px; border-radius: 50%; background: {color};",
                            }
                            span {
                                div { style: "font-weight: bold;", "{name}" }
                                div { style: "font-size: 11px; color: #94a3b8;", "{location}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
