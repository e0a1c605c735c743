//! The dashboard state and its reducer.

use crate::event::{Effect, Event};
use crate::geolocation::{LocationGate, PermissionState};
use crate::markers::{marker_specs, MarkerSpec};
use crate::selection::Selection;
use crate::viewport::Viewport;
use aqua_chat::config::Persona;
use aqua_chat::ChatSession;
use aqua_lakes::detail::directions_url;
use aqua_lakes::lake::{LakeId, LakeRecord};
use aqua_lakes::quality::WaterQuality;
use aqua_lakes::registry::Registry;
use aqua_lakes::search::{toggle_filter, visible_lakes, with_quality, Listing};
use serde::{Deserialize, Serialize};

/// All mutable state of one dashboard session.
///
/// Only [`DashboardState::update`] changes it. The registry is passed in
/// rather than owned, since it is shared and never changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    query: String,
    filter: Option<WaterQuality>,
    viewport: Viewport,
    selection: Selection,
    location: LocationGate,
    chat: ChatSession,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_persona(persona: Persona) -> Self {
        Self {
            chat: ChatSession::with_persona(persona),
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> Option<WaterQuality> {
        self.filter
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn location(&self) -> &LocationGate {
        &self.location
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    /// Search dropdown contents for the current query and filter.
    pub fn visible<'a>(&self, registry: &'a Registry) -> Listing<'a> {
        visible_lakes(&self.query, self.filter, registry.lakes())
    }

    /// Lakes drawn on the map.
    pub fn map_lakes<'a>(&self, registry: &'a Registry) -> Vec<&'a LakeRecord> {
        with_quality(self.filter, registry.lakes())
    }

    pub fn markers(&self, registry: &Registry) -> Vec<MarkerSpec> {
        marker_specs(&self.map_lakes(registry), &self.selection)
    }

    pub fn selected_lake<'a>(&self, registry: &'a Registry) -> Option<&'a LakeRecord> {
        self.selection.selected().and_then(|id| registry.get(id))
    }

    /// Apply one event and return the effects the host must run.
    pub fn update(&mut self, registry: &Registry, event: Event) -> Vec<Effect> {
        log::debug!("[Aqua] update: {:?}", event);
        match event {
            Event::Started => vec![Effect::CheckPermission],
            Event::QueryChanged(query) => {
                self.query = query;
                Vec::new()
            }
            Event::QueryCleared => {
                self.query.clear();
                Vec::new()
            }
            Event::FilterToggled(quality) => {
                self.filter = toggle_filter(self.filter, quality);
                Vec::new()
            }
            Event::LakeHovered(id) => {
                self.selection.hover(id);
                Vec::new()
            }
            Event::LakeUnhovered(id) => {
                self.selection.unhover(&id);
                Vec::new()
            }
            Event::LakeSelected(id) => self.select_by_id(registry, &id),
            Event::SearchResultChosen(id) => {
                if let Some(lake) = registry.get(&id) {
                    self.query = lake.name.clone();
                }
                self.select_by_id(registry, &id)
            }
            Event::PanelDismissed => {
                self.selection.dismiss();
                Vec::new()
            }
            Event::LocateMe => match self.location.user_location() {
                Some(point) => self.fly_to(Viewport::overview(point)),
                None => self.retry_location(),
            },
            Event::FindNearest => self.find_nearest(registry),
            Event::PermissionChecked(PermissionState::Granted) => self.request_location(),
            Event::PermissionChecked(state) => {
                log::info!("[Aqua] geolocation: permission is {:?}, not requesting", state);
                Vec::new()
            }
            Event::LocationResolved { ticket, result } => {
                match self.location.resolve(ticket, result) {
                    Some(point) => self.fly_to(Viewport::located(point)),
                    None => Vec::new(),
                }
            }
            Event::PromptAuthorized => self.retry_location(),
            Event::PromptDismissed => {
                self.location.hide_prompt();
                Vec::new()
            }
            Event::ChatSubmitted(text) => match self.chat.begin(&text) {
                Some(request) => vec![Effect::CallAssistant(request)],
                None => Vec::new(),
            },
            Event::ChatSettled(outcome) => {
                self.chat.settle(outcome);
                Vec::new()
            }
            Event::DirectionsRequested => match self.selected_lake(registry) {
                Some(lake) => vec![Effect::OpenUrl(directions_url(lake))],
                None => Vec::new(),
            },
        }
    }

    fn fly_to(&mut self, viewport: Viewport) -> Vec<Effect> {
        self.viewport = viewport;
        vec![Effect::FlyTo(viewport)]
    }

    fn select_lake(&mut self, lake: &LakeRecord) -> Vec<Effect> {
        log::info!("[Aqua] selection: {} ({})", lake.name, lake.id);
        self.selection.select(lake.id.clone());
        self.fly_to(Viewport::detail(lake.coordinates()))
    }

    fn select_by_id(&mut self, registry: &Registry, id: &LakeId) -> Vec<Effect> {
        match registry.get(id) {
            Some(lake) => self.select_lake(lake),
            None => {
                log::warn!("[Aqua] selection: unknown lake id {}", id);
                Vec::new()
            }
        }
    }

    fn request_location(&mut self) -> Vec<Effect> {
        match self.location.request() {
            Some(ticket) => vec![Effect::RequestLocation { ticket }],
            None => Vec::new(),
        }
    }

    /// User-initiated request: never blocked by an earlier request that has
    /// not settled.
    fn retry_location(&mut self) -> Vec<Effect> {
        vec![Effect::RequestLocation {
            ticket: self.location.supersede(),
        }]
    }

    fn find_nearest(&mut self, registry: &Registry) -> Vec<Effect> {
        let Some(origin) = self.location.user_location() else {
            self.location.show_prompt();
            return Vec::new();
        };
        match registry.nearest_to(&origin) {
            Ok(lake) => self.select_lake(lake),
            Err(e) => {
                log::error!("[Aqua] nearest: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geolocation::GeolocationError;
    use crate::viewport::{DETAIL_ZOOM, LOCATED_ZOOM, OVERVIEW_ZOOM};
    use aqua_chat::{AssistantError, ChatRole};
    use aqua_lakes::lake::GeoPoint;

    fn registry() -> Registry {
        Registry::builtin().unwrap()
    }

    /// Drive a successful geolocation round trip to `point`.
    fn locate(state: &mut DashboardState, registry: &Registry, point: GeoPoint) {
        let effects = state.update(registry, Event::LocateMe);
        let ticket = match effects.as_slice() {
            [Effect::RequestLocation { ticket }] => *ticket,
            other => panic!("expected a location request, got {:?}", other),
        };
        state.update(
            registry,
            Event::LocationResolved {
                ticket,
                result: Ok(point),
            },
        );
    }

    #[test]
    fn startup_checks_permission_only() {
        let registry = registry();
        let mut state = DashboardState::new();
        assert_eq!(state.update(&registry, Event::Started), vec![Effect::CheckPermission]);
        assert!(state
            .update(&registry, Event::PermissionChecked(PermissionState::Prompt))
            .is_empty());
        assert!(state
            .update(&registry, Event::PermissionChecked(PermissionState::Denied))
            .is_empty());
        assert!(!state.location().is_prompt_visible());
    }

    #[test]
    fn granted_permission_auto_acquires() {
        let registry = registry();
        let mut state = DashboardState::new();
        let effects = state.update(&registry, Event::PermissionChecked(PermissionState::Granted));
        assert!(matches!(effects.as_slice(), [Effect::RequestLocation { .. }]));
    }

    #[test]
    fn selecting_a_lake_flies_to_detail_zoom() {
        let registry = registry();
        let mut state = DashboardState::new();
        let effects = state.update(&registry, Event::LakeSelected(LakeId::from("12")));
        let expected = Viewport::new(GeoPoint::new(12.9260, 77.6810), DETAIL_ZOOM);
        assert_eq!(effects, vec![Effect::FlyTo(expected)]);
        assert_eq!(state.viewport(), expected);
        assert_eq!(state.selection().selected(), Some(&LakeId::from("12")));
    }

    #[test]
    fn unknown_lake_is_ignored() {
        let registry = registry();
        let mut state = DashboardState::new();
        assert!(state.update(&registry, Event::LakeSelected(LakeId::from("404"))).is_empty());
        assert!(state.selection().is_idle());
        assert_eq!(state.viewport(), Viewport::default());
    }

    #[test]
    fn dismiss_keeps_viewport() {
        let registry = registry();
        let mut state = DashboardState::new();
        state.update(&registry, Event::LakeSelected(LakeId::from("1")));
        let viewport = state.viewport();
        assert!(state.update(&registry, Event::PanelDismissed).is_empty());
        assert!(state.selection().is_idle());
        assert_eq!(state.viewport(), viewport);
    }

    #[test]
    fn dismiss_when_idle_changes_nothing() {
        let registry = registry();
        let mut state = DashboardState::new();
        state.update(&registry, Event::LakeHovered(LakeId::from("4")));
        let before = state.clone();
        state.update(&registry, Event::PanelDismissed);
        assert_eq!(state, before);
        assert_eq!(state.selection(), before.selection());
        assert_eq!(state.viewport(), before.viewport());
    }

    #[test]
    fn search_result_copies_name_into_query() {
        let registry = registry();
        let mut state = DashboardState::new();
        state.update(&registry, Event::QueryChanged("loni".to_string()));
        state.update(&registry, Event::SearchResultChosen(LakeId::from("16")));
        assert_eq!(state.query(), "Lonar Lake");
        assert_eq!(state.selected_lake(&registry).unwrap().name, "Lonar Lake");
    }

    #[test]
    fn locate_me_without_location_requests_it() {
        let registry = registry();
        let mut state = DashboardState::new();
        let point = GeoPoint::new(19.0, 72.8);
        locate(&mut state, &registry, point);
        assert_eq!(state.location().user_location(), Some(point));
        assert_eq!(state.viewport(), Viewport::new(point, LOCATED_ZOOM));

        // Known location: recenter at overview zoom, no new request.
        let effects = state.update(&registry, Event::LocateMe);
        assert_eq!(effects, vec![Effect::FlyTo(Viewport::new(point, OVERVIEW_ZOOM))]);
    }

    #[test]
    fn repeated_locate_me_supersedes_pending_request() {
        let registry = registry();
        let mut state = DashboardState::new();
        let first = state.update(&registry, Event::LocateMe);
        let second = state.update(&registry, Event::LocateMe);
        assert_eq!(first, vec![Effect::RequestLocation { ticket: 1 }]);
        assert_eq!(second, vec![Effect::RequestLocation { ticket: 2 }]);

        // The first request settling late changes nothing.
        state.update(
            &registry,
            Event::LocationResolved {
                ticket: 1,
                result: Ok(GeoPoint::new(1.0, 1.0)),
            },
        );
        assert_eq!(state.location().user_location(), None);
        assert!(state.location().is_pending());
    }

    #[test]
    fn unresolved_request_does_not_block_authorize() {
        let registry = registry();
        let mut state = DashboardState::new();
        assert_eq!(
            state.update(&registry, Event::LocateMe),
            vec![Effect::RequestLocation { ticket: 1 }]
        );
        // Never resolved; the user opens the prompt and authorizes.
        state.update(&registry, Event::FindNearest);
        assert!(state.location().is_prompt_visible());
        let effects = state.update(&registry, Event::PromptAuthorized);
        assert_eq!(effects, vec![Effect::RequestLocation { ticket: 2 }]);

        state.update(
            &registry,
            Event::LocationResolved {
                ticket: 2,
                result: Ok(GeoPoint::new(19.12, 72.91)),
            },
        );
        assert!(!state.location().is_prompt_visible());
        state.update(&registry, Event::FindNearest);
        assert_eq!(state.selected_lake(&registry).unwrap().name, "Powai Lake");
    }

    #[test]
    fn startup_check_does_not_stack_requests() {
        let registry = registry();
        let mut state = DashboardState::new();
        let granted = Event::PermissionChecked(PermissionState::Granted);
        assert_eq!(state.update(&registry, granted.clone()).len(), 1);
        assert!(state.update(&registry, granted).is_empty());
    }

    #[test]
    fn find_nearest_without_location_shows_prompt() {
        let registry = registry();
        let mut state = DashboardState::new();
        assert!(state.update(&registry, Event::FindNearest).is_empty());
        assert!(state.location().is_prompt_visible());
        assert!(state.selection().is_idle());

        assert!(state.update(&registry, Event::PromptDismissed).is_empty());
        assert!(!state.location().is_prompt_visible());
    }

    #[test]
    fn authorize_then_find_nearest_selects_closest() {
        let registry = registry();
        let mut state = DashboardState::new();
        state.update(&registry, Event::FindNearest);
        let effects = state.update(&registry, Event::PromptAuthorized);
        let ticket = match effects.as_slice() {
            [Effect::RequestLocation { ticket }] => *ticket,
            other => panic!("unexpected effects {:?}", other),
        };
        // Near Powai, Mumbai.
        state.update(
            &registry,
            Event::LocationResolved {
                ticket,
                result: Ok(GeoPoint::new(19.12, 72.91)),
            },
        );
        assert!(!state.location().is_prompt_visible());

        let effects = state.update(&registry, Event::FindNearest);
        assert_eq!(state.selected_lake(&registry).unwrap().name, "Powai Lake");
        assert!(matches!(effects.as_slice(), [Effect::FlyTo(v)] if v.zoom == DETAIL_ZOOM));
    }

    #[test]
    fn failed_location_shows_prompt() {
        let registry = registry();
        let mut state = DashboardState::new();
        let effects = state.update(&registry, Event::LocateMe);
        let ticket = match effects.as_slice() {
            [Effect::RequestLocation { ticket }] => *ticket,
            other => panic!("unexpected effects {:?}", other),
        };
        let effects = state.update(
            &registry,
            Event::LocationResolved {
                ticket,
                result: Err(GeolocationError::Denied),
            },
        );
        assert!(effects.is_empty());
        assert!(state.location().is_prompt_visible());
        assert_eq!(state.viewport(), Viewport::default());
    }

    #[test]
    fn filter_toggle_drives_markers() {
        let registry = registry();
        let mut state = DashboardState::new();
        assert_eq!(state.markers(&registry).len(), 18);
        state.update(&registry, Event::FilterToggled(WaterQuality::Hazardous));
        assert_eq!(state.markers(&registry).len(), 3);
        assert_eq!(state.visible(&registry).lakes.len(), 3);
        state.update(&registry, Event::FilterToggled(WaterQuality::Hazardous));
        assert_eq!(state.filter(), None);
        assert_eq!(state.visible(&registry).lakes.len(), 5);
    }

    #[test]
    fn chat_round_trip_through_events() {
        let registry = registry();
        let mut state = DashboardState::new();
        let effects = state.update(&registry, Event::ChatSubmitted("hello".to_string()));
        assert!(matches!(
            effects.as_slice(),
            [Effect::CallAssistant(request)] if request.user_text == "hello" && request.history.is_empty()
        ));
        // A second submit while in flight changes nothing.
        assert!(state
            .update(&registry, Event::ChatSubmitted("hello".to_string()))
            .is_empty());
        assert_eq!(state.chat().transcript().len(), 1);

        state.update(
            &registry,
            Event::ChatSettled(Err(AssistantError::Transport("down".to_string()))),
        );
        let transcript = state.chat().transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[1].role, ChatRole::Assistant);
        assert!(!state.chat().is_in_flight());
    }

    #[test]
    fn directions_need_a_selection() {
        let registry = registry();
        let mut state = DashboardState::new();
        assert!(state.update(&registry, Event::DirectionsRequested).is_empty());
        state.update(&registry, Event::LakeSelected(LakeId::from("18")));
        assert_eq!(
            state.update(&registry, Event::DirectionsRequested),
            vec![Effect::OpenUrl(
                "https://www.google.com/maps/search/?api=1&query=26.488,74.553".to_string()
            )]
        );
    }

    #[test]
    fn state_serializes() {
        let registry = registry();
        let mut state = DashboardState::new();
        state.update(&registry, Event::LakeSelected(LakeId::from("7")));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["selection"]["selected"], "7");
        assert_eq!(json["viewport"]["zoom"], 13.0);
    }
}
