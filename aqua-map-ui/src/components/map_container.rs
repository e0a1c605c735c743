//! Full-screen container the Leaflet map renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id passed to `js_bridge::init_map`
    pub id: String,
}

#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "position: absolute; inset: 0; z-index: 0;",
        }
    }
}
