//! Dioxus RSX components for the lake dashboard.

mod chat_widget;
mod error_display;
mod lake_panel;
mod loading_spinner;
mod map_container;
mod map_controls;
mod permission_prompt;
mod quality_filter;
mod search_box;
mod summary_panel;

pub use chat_widget::ChatWidget;
pub use error_display::ErrorDisplay;
pub use lake_panel::LakePanel;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use map_controls::MapControls;
pub use permission_prompt::PermissionPrompt;
pub use quality_filter::QualityFilter;
pub use search_box::SearchBox;
pub use summary_panel::SummaryPanel;
