//! Runs dashboard events through the reducer and executes the effects.
//!
//! Async completions (permission, position, assistant reply) are spawned on
//! the Dioxus runtime and re-enter here as events, so every state change goes
//! through `DashboardState::update`.

use crate::assistant::WebGeminiClient;
use crate::geolocation;
use crate::js_bridge;
use crate::state::AppState;
use aqua_chat::assistant::Assistant;
use aqua_state::event::{Effect, Event as DashboardEvent};
use dioxus::prelude::*;

/// Apply one event to the dashboard state.
pub fn dispatch(state: AppState, event: DashboardEvent) {
    let mut dashboard = state.dashboard;
    // peek: dispatching from an effect must not subscribe it to the registry
    let effects = {
        let registry = state.registry.peek();
        dashboard.write().update(&registry, event)
    };
    for effect in effects {
        run_effect(state, effect);
    }
}

fn run_effect(state: AppState, effect: Effect) {
    match effect {
        Effect::FlyTo(view) => js_bridge::fly_to(view),
        Effect::CheckPermission => {
            spawn(async move {
                let permission = geolocation::query_permission().await;
                dispatch(state, DashboardEvent::PermissionChecked(permission));
            });
        }
        Effect::RequestLocation { ticket } => {
            spawn(async move {
                let result = geolocation::current_position().await;
                dispatch(state, DashboardEvent::LocationResolved { ticket, result });
            });
        }
        Effect::CallAssistant(request) => {
            let client = WebGeminiClient::new((state.assistant_config)());
            spawn(async move {
                let outcome = client.generate(&request).await;
                if let Err(e) = &outcome {
                    log::warn!("[Aqua] chat: assistant call failed: {}", e);
                }
                dispatch(state, DashboardEvent::ChatSettled(outcome));
            });
        }
        Effect::OpenUrl(url) => js_bridge::open_in_new_tab(&url),
    }
}
