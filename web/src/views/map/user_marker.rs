use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::Coordinate;

use super::icons::USER_ICON;

#[component]
pub fn UserMarker(position: Coordinate) -> impl IntoView {
    view! {
        <Marker
            position=Position::new(position.lat, position.lon)
            draggable=false
            icon_url=Some(USER_ICON.url.to_string())
            icon_size=Some(USER_ICON.size)
            icon_anchor=Some(USER_ICON.anchor)
        >
            <Popup>
                <strong>"You are here"</strong>
            </Popup>
        </Marker>
    }
}
