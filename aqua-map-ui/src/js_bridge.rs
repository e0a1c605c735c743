//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet map functions live in `assets/js/lake-map.js` and are
//! evaluated as globals (no ES modules) once Leaflet has loaded. This module
//! provides Rust wrappers that serialize data and call those globals.

use aqua_lakes::lake::{GeoPoint, LakeId};
use aqua_state::event::Event as DashboardEvent;
use aqua_state::markers::MarkerSpec;
use aqua_state::viewport::Viewport;
use futures::channel::mpsc::UnboundedSender;
use wasm_bindgen::prelude::*;

// Embed the map JS at compile time
static LAKE_MAP_JS: &str = include_str!("../assets/js/lake-map.js");

const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

/// Satellite hybrid tiles.
pub const MAP_TILE_URL: &str = "https://mt1.google.com/vt/lyrs=y&x={x}&y={y}&z={z}";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Aqua JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Run `call` once the map has been initialised, polling every 100ms.
fn when_map_ready(call: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__aquaMapReady) {{
                    clearInterval(poll);
                    try {{ {call} }} catch(e) {{ console.error('[Aqua] map call error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Load Leaflet (if the page has not already), then create the map.
///
/// The map script is stored on `window` and evaluated at global scope via
/// indirect eval once `L` exists and the container element is in the DOM,
/// so its function declarations become globals.
pub fn init_map(container_id: &str, view: Viewport) {
    let store_js = format!(
        "window.__aquaMapScript = {};",
        serde_json::to_string(LAKE_MAP_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let Viewport { center, zoom } = view;
    call_js(&format!(
        r#"
        (function() {{
            if (typeof L === 'undefined' && !document.getElementById('aqua-leaflet-js')) {{
                var css = document.createElement('link');
                css.rel = 'stylesheet';
                css.href = '{LEAFLET_CSS_URL}';
                document.head.appendChild(css);
                var script = document.createElement('script');
                script.id = 'aqua-leaflet-js';
                script.src = '{LEAFLET_JS_URL}';
                document.head.appendChild(script);
            }}
            var waitForLeaflet = setInterval(function() {{
                if (typeof L !== 'undefined' && document.getElementById('{container_id}')) {{
                    clearInterval(waitForLeaflet);
                    if (window.__aquaMapScript) {{
                        (0, eval)(window.__aquaMapScript);
                        delete window.__aquaMapScript;
                    }}
                    initLakeMap('{container_id}', {lat}, {lon}, {zoom}, '{MAP_TILE_URL}');
                    window.__aquaMapReady = true;
                    console.log('Aqua map initialized');
                }}
            }}, 100);
        }})();
        "#,
        lat = center.lat,
        lon = center.lon,
    ));
}

/// Draw or restyle the lake markers.
pub fn render_markers(markers: &[MarkerSpec]) {
    let data_json = serde_json::to_string(markers).unwrap_or_else(|_| "[]".to_string());
    when_map_ready(&format!("renderLakeMarkers({});", data_json));
}

/// Animate the map to a viewport.
pub fn fly_to(view: Viewport) {
    when_map_ready(&format!(
        "flyToView({}, {}, {});",
        view.center.lat, view.center.lon, view.zoom
    ));
}

/// Show (or move) the user position marker.
pub fn set_user_marker(point: GeoPoint) {
    when_map_ready(&format!("setUserMarker({}, {});", point.lat, point.lon));
}

/// Route marker pointer events from Leaflet into the dashboard event stream.
///
/// The callback is installed as `window.__aquaMarkerEvent(kind, id)` and
/// lives for the rest of the page.
pub fn register_marker_events(tx: UnboundedSender<DashboardEvent>) {
    let callback = Closure::<dyn Fn(String, String)>::new(move |kind: String, id: String| {
        let Some(event) = marker_event(&kind, id) else {
            log::warn!("[Aqua] js_bridge: unknown marker event {}", kind);
            return;
        };
        if tx.unbounded_send(event).is_err() {
            log::warn!("[Aqua] js_bridge: marker event dropped, receiver closed");
        }
    });
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(
            &window,
            &JsValue::from_str("__aquaMarkerEvent"),
            callback.as_ref(),
        );
    }
    callback.forget();
}

/// Map a Leaflet marker event (`over`, `out`, `click`) to a dashboard event.
pub fn marker_event(kind: &str, id: String) -> Option<DashboardEvent> {
    let id = LakeId(id);
    match kind {
        "over" => Some(DashboardEvent::LakeHovered(id)),
        "out" => Some(DashboardEvent::LakeUnhovered(id)),
        "click" => Some(DashboardEvent::LakeSelected(id)),
        _ => None,
    }
}

/// Open a URL in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                log::warn!("[Aqua] js_bridge: window.open failed: {:?}", e);
            }
        }
        None => log::warn!("[Aqua] js_bridge: no window to open {}", url),
    }
}
