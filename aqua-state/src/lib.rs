//! Dashboard state and its single update function.
//!
//! Every user action and every async completion is an [`event::Event`].
//! [`dashboard::DashboardState::update`] applies it and returns the side
//! effects the host must run ([`event::Effect`]): animating the map,
//! asking the browser for a position, calling the assistant, opening a link.
//! Completions of those effects come back in as further events.
//!
//! ```rust
//! use aqua_lakes::registry::Registry;
//! use aqua_lakes::lake::LakeId;
//! use aqua_state::dashboard::DashboardState;
//! use aqua_state::event::{Effect, Event};
//!
//! let registry = Registry::builtin().unwrap();
//! let mut state = DashboardState::new();
//! let effects = state.update(&registry, Event::LakeSelected(LakeId::from("3")));
//! assert!(matches!(effects.as_slice(), [Effect::FlyTo(v)] if v.zoom == 13.0));
//! assert_eq!(state.selected_lake(&registry).unwrap().name, "Chilika Lake");
//! ```

pub mod dashboard;
pub mod event;
pub mod geolocation;
pub mod markers;
pub mod selection;
pub mod viewport;
