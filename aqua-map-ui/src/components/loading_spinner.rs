//! Loading indicator.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "position: absolute; inset: 0; display: flex; justify-content: center; align-items: center; z-index: 1500; background: #020617; color: #94a3b8; font-weight: bold; letter-spacing: 0.2em;",
            "Loading lake registry..."
        }
    }
}
