//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message over the map.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "position: absolute; top: 96px; left: 50%; transform: translateX(-50%); z-index: 1200; padding: 12px 16px; background: #FEF2F2; color: #B91C1C; border-radius: 12px; border: 1px solid #FCA5A5;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
