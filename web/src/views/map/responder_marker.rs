use leptos::{logging::log, prelude::*, task::spawn_local};
use leptos_leaflet::prelude::*;
use shared_types::{Coordinate, Eta, Responder};

use super::{icons::MarkerIcon, responder_popup::ResponderPopup};
use crate::server::fetch_travel_time;

#[component]
pub fn ResponderMarker(origin: Coordinate, responder: Responder, distance_km: f64) -> impl IntoView {
    let destination = responder.coordinate();
    let icon = MarkerIcon::for_category(responder.category);
    let eta = RwSignal::new(None::<String>);

    log!(
        "Adding responder marker: {} {} {}",
        responder.name,
        responder.lat,
        responder.lon
    );

    Effect::new(move |_| {
        spawn_local(async move {
            let text = match fetch_travel_time(origin, destination).await {
                Ok(text) => text,
                Err(err) => {
                    log!("Error fetching travel time: {}", err);
                    Eta::Unavailable.to_string()
                }
            };
            eta.set(Some(text));
        });
    });

    view! {
        <Marker
            position=Position::new(destination.lat, destination.lon)
            draggable=false
            icon_url=Some(icon.url.to_string())
            icon_size=Some(icon.size)
            icon_anchor=Some(icon.anchor)
        >
            <Popup>
                <ResponderPopup name=responder.name.clone() distance_km=distance_km eta=eta />
            </Popup>
        </Marker>
    }
}
