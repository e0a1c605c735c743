//! Browser geolocation as futures.
//!
//! Both calls evaluate a small promise-returning snippet and await it, so
//! they never fail hard: a missing API resolves to `prompt` / `Unavailable`.

use aqua_lakes::lake::GeoPoint;
use aqua_state::geolocation::{GeolocationError, PermissionState};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

const PERMISSION_QUERY_JS: &str = r#"
(function() {
    if (!navigator.permissions || !navigator.permissions.query) {
        return Promise.resolve('prompt');
    }
    return navigator.permissions.query({ name: 'geolocation' })
        .then(function(status) { return status.state; })
        .catch(function() { return 'prompt'; });
})()
"#;

// Resolves to [lat, lon] or rejects with the PositionError code
// (1 = permission denied, 3 = timeout; 0 means the API is missing).
// The timeout guarantees the promise settles even if the browser never
// answers its own permission dialog.
const CURRENT_POSITION_JS: &str = r#"
(function() {
    return new Promise(function(resolve, reject) {
        if (!navigator.geolocation) {
            reject(0);
            return;
        }
        navigator.geolocation.getCurrentPosition(
            function(pos) { resolve([pos.coords.latitude, pos.coords.longitude]); },
            function(err) { reject(err.code); },
            { timeout: 15000, maximumAge: 60000 }
        );
    });
})()
"#;

fn eval_promise(code: &str) -> Option<js_sys::Promise> {
    js_sys::eval(code)
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Promise>().ok())
}

/// Passive permission query; never opens a browser dialog.
pub async fn query_permission() -> PermissionState {
    let Some(promise) = eval_promise(PERMISSION_QUERY_JS) else {
        return PermissionState::Prompt;
    };
    match JsFuture::from(promise).await {
        Ok(value) => value
            .as_string()
            .and_then(|s| s.parse().ok())
            .unwrap_or(PermissionState::Prompt),
        Err(e) => {
            log::warn!("[Aqua] geolocation: permission query failed: {:?}", e);
            PermissionState::Prompt
        }
    }
}

/// Ask the browser for the current position (may show its own dialog).
pub async fn current_position() -> Result<GeoPoint, GeolocationError> {
    let promise = eval_promise(CURRENT_POSITION_JS).ok_or(GeolocationError::Unavailable)?;
    let value = JsFuture::from(promise).await.map_err(position_error)?;
    let coords = js_sys::Array::from(&value);
    let lat = coords.get(0).as_f64();
    let lon = coords.get(1).as_f64();
    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(GeoPoint::new(lat, lon)),
        _ => Err(GeolocationError::Unavailable),
    }
}

fn position_error(code: JsValue) -> GeolocationError {
    match code.as_f64() {
        Some(c) if c == 1.0 => GeolocationError::Denied,
        _ => GeolocationError::Unavailable,
    }
}
