//! Shared Dioxus components and Leaflet bridge for the lake dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map functions via `js_sys::eval()`
//! - `geolocation`: browser permission query and position lookup as futures
//! - `assistant`: Gemini client over the browser `fetch` API
//! - `state`: Reactive AppState with Dioxus Signals
//! - `dispatch`: runs dashboard events through the reducer and executes effects
//! - `components`: RSX components (search, filters, panels, chat)

pub mod assistant;
pub mod components;
pub mod dispatch;
pub mod geolocation;
pub mod js_bridge;
pub mod state;
