use crate::geolocation::{GeolocationError, PermissionState};
use crate::viewport::Viewport;
use aqua_chat::{AssistantError, ChatRequest};
use aqua_lakes::lake::{GeoPoint, LakeId};
use aqua_lakes::quality::WaterQuality;

/// Everything that can change the dashboard state.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// App mounted; triggers the passive permission check.
    Started,
    QueryChanged(String),
    QueryCleared,
    FilterToggled(WaterQuality),
    LakeHovered(LakeId),
    LakeUnhovered(LakeId),
    /// Marker click.
    LakeSelected(LakeId),
    /// Pick from the search dropdown; also copies the name into the query.
    SearchResultChosen(LakeId),
    PanelDismissed,
    LocateMe,
    FindNearest,
    PermissionChecked(PermissionState),
    LocationResolved {
        ticket: u64,
        result: Result<GeoPoint, GeolocationError>,
    },
    PromptAuthorized,
    PromptDismissed,
    ChatSubmitted(String),
    ChatSettled(Result<String, AssistantError>),
    DirectionsRequested,
}

/// Side effects requested by [`crate::dashboard::DashboardState::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Animate the map to this view.
    FlyTo(Viewport),
    /// Query the geolocation permission state without prompting.
    CheckPermission,
    /// Ask for the current position; answer with `Event::LocationResolved`.
    RequestLocation { ticket: u64 },
    /// Run the assistant call; answer with `Event::ChatSettled`.
    CallAssistant(ChatRequest),
    /// Open a URL in a new browsing context.
    OpenUrl(String),
}
