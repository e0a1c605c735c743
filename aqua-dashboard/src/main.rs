//! Lake Water Quality Dashboard
//!
//! Full-screen satellite map of the lake registry with search, quality
//! filters, a detail panel, nearest-lake routing and the AI Aqua chat.
//!
//! Data flow:
//! 1. `aqua_lakes::Registry::builtin()` parses the CSV embedded from
//!    `fixtures/lakes.csv`.
//! 2. `Event::Started` kicks off the passive geolocation permission check.
//! 3. Every user action becomes a dashboard event, run through
//!    `aqua_map_ui::dispatch::dispatch`; map movement and markers are pushed
//!    to Leaflet through `js_bridge`.
//!
//! The Gemini API key is read from `GEMINI_API_KEY` at build time. Without it
//! the map works and chat turns settle with the fallback reply.

use aqua_chat::config::AssistantConfig;
use aqua_lakes::registry::Registry;
use aqua_map_ui::components::{
    ChatWidget, ErrorDisplay, LakePanel, LoadingSpinner, MapContainer, MapControls,
    PermissionPrompt, QualityFilter, SearchBox, SummaryPanel,
};
use aqua_map_ui::dispatch::dispatch;
use aqua_map_ui::js_bridge;
use aqua_map_ui::state::AppState;
use aqua_state::event::Event as DashboardEvent;
use aqua_state::viewport::Viewport;
use dioxus::prelude::*;
use futures::StreamExt;

/// Map container DOM element ID used by Leaflet.
const MAP_ID: &str = "aqua-lake-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("aqua-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Marker pointer events arrive from Leaflet outside the Dioxus runtime;
    // the coroutine hands them back to the reducer.
    let marker_events = use_coroutine(move |mut rx: UnboundedReceiver<DashboardEvent>| async move {
        while let Some(event) = rx.next().await {
            dispatch(state, event);
        }
    });

    // Load the registry on mount
    use_effect(move || {
        match Registry::builtin() {
            Ok(registry) => {
                log::info!("[Aqua] Loaded {} lakes", registry.len());
                state.registry.set(registry);
            }
            Err(e) => {
                log::error!("[Aqua] Failed to load lake registry: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load lake registry: {}", e)));
            }
        }

        if let Some(key) = option_env!("GEMINI_API_KEY") {
            state.assistant_config.set(AssistantConfig::with_api_key(key));
        } else {
            log::warn!("[Aqua] GEMINI_API_KEY not set at build time; chat is offline");
        }

        js_bridge::register_marker_events(marker_events.tx());
        js_bridge::init_map(MAP_ID, Viewport::default());
        state.loading.set(false);
        dispatch(state, DashboardEvent::Started);
    });

    // Redraw markers whenever the filter, hover or selection changes
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let markers = {
            let registry = state.registry.read();
            state.dashboard.read().markers(&registry)
        };
        js_bridge::render_markers(&markers);
    });

    // Show the user position once known
    use_effect(move || {
        if let Some(point) = state.dashboard.read().location().user_location() {
            js_bridge::set_user_marker(point);
        }
    });

    let loading = (state.loading)();
    let error = (state.error_msg)();

    rsx! {
        div {
            style: "position: fixed; inset: 0; overflow: hidden; background: #020617; font-family: system-ui, -apple-system, sans-serif;",

            MapContainer { id: MAP_ID.to_string() }

            div {
                style: "position: absolute; top: 24px; left: 24px; right: 24px; z-index: 1000; display: flex; gap: 16px; align-items: center;",
                div {
                    style: "color: white; font-weight: 900; font-size: 20px; letter-spacing: 0.05em;",
                    "AQUA"
                    span { style: "color: #3b82f6;", "SENSE" }
                }
                SearchBox {}
                QualityFilter {}
            }

            if let Some(msg) = error {
                ErrorDisplay { message: msg }
            }

            LakePanel {}
            MapControls {}
            SummaryPanel {}
            ChatWidget {}
            PermissionPrompt {}

            if loading {
                LoadingSpinner {}
            }
        }
    }
}
