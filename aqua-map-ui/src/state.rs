//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Dashboard data only changes through [`crate::dispatch::dispatch`]; the
//! remaining signals are widget-local presentation toggles.

use aqua_chat::config::AssistantConfig;
use aqua_lakes::registry::Registry;
use aqua_state::dashboard::DashboardState;
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Lake registry (empty until loaded)
    pub registry: Signal<Registry>,
    /// Query, filter, viewport, selection, location and chat transcript
    pub dashboard: Signal<DashboardState>,
    /// Gemini endpoint settings used for each chat turn
    pub assistant_config: Signal<AssistantConfig>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Search dropdown open
    pub search_open: Signal<bool>,
    /// Chat widget expanded
    pub chat_open: Signal<bool>,
    /// Text in the chat input box
    pub chat_input: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            registry: Signal::new(Registry::default()),
            dashboard: Signal::new(DashboardState::new()),
            assistant_config: Signal::new(AssistantConfig::default()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            search_open: Signal::new(false),
            chat_open: Signal::new(false),
            chat_input: Signal::new(String::new()),
        }
    }
}
