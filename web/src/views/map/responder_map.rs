use leptos::{logging::log, prelude::*, task::spawn_local};
use leptos_leaflet::{leaflet::Map, prelude::*};
use shared_types::{nearest_responder, responder_distances, Coordinate, Responder, RouteLayer};

use super::{responder_marker::ResponderMarker, user_marker::UserMarker};
use crate::{
    client::{locate_user, request_responders},
    components::{
        error::ErrorView,
        loading::{LoadingView, SearchStage},
    },
    server::fetch_route,
};

/// Chennai, until the browser reports where the user actually is.
const DEFAULT_CENTER: Coordinate = Coordinate::new(13.0827, 80.2707);
const DEFAULT_ZOOM: f64 = 13.0;

#[component]
pub fn ResponderMap() -> impl IntoView {
    let user: RwSignal<Option<Coordinate>> = RwSignal::new(None);
    let location_error: RwSignal<Option<String>> = RwSignal::new(None);
    let responders: RwSignal<Vec<Responder>> = RwSignal::new(Vec::new());
    let route_layer = RwSignal::new(RouteLayer::default());
    let map: JsRwSignal<Option<Map>> = JsRwSignal::new_local(None::<Map>);

    Effect::new(move |_| {
        locate_user(move |outcome| match outcome {
            Ok(position) => {
                log!("User location: {} {}", position.lat, position.lon);
                user.set(Some(position));
            }
            Err(message) => {
                log!("Error getting geolocation: {}", message);
                location_error.set(Some(message));
            }
        });
    });

    // The responder list is only requested once we know where the user is.
    Effect::new(move |_| {
        if user.get().is_some() {
            request_responders(move |list| responders.set(list));
        }
    });

    Effect::new(move |_| {
        let Some(position) = user.get() else {
            return;
        };
        if let Some(map) = map.get_untracked() {
            map.set_view(&Position::new(position.lat, position.lon).as_lat_lng(), DEFAULT_ZOOM);
        }
    });

    Effect::new(move |_| {
        let Some(origin) = user.get() else {
            return;
        };
        let candidates = responders.get();
        if candidates.is_empty() {
            return;
        }

        for entry in responder_distances(origin, &candidates) {
            log!("Distance to {}: {:.2} km", entry.responder.name, entry.distance_km);
        }

        let Some(nearest) = nearest_responder(origin, &candidates) else {
            log!("No responders available within the radius.");
            return;
        };
        log!(
            "Nearest responder: {} {} {}",
            nearest.responder.name,
            nearest.responder.lat,
            nearest.responder.lon
        );

        let target = nearest.responder.coordinate();
        spawn_local(async move {
            match fetch_route(origin, target).await {
                Ok(Some(route)) => route_layer.update(|layer| {
                    layer.replace(route);
                }),
                Ok(None) => log!("No route found between user and responder."),
                Err(err) => log!("Error fetching route: {}", err),
            }
        });
    });

    view! {
        {move || location_error.get().map(|message| view! {
            <ErrorView message=message />
        })}
        {move || {
            if location_error.get().is_some() {
                return None;
            }
            SearchStage::current(user.get().is_some(), responders.with(Vec::len))
                .map(|stage| view! { <LoadingView stage=stage /> })
        }}
        <MapContainer
            style="height: 100vh; width: 100%"
            center=Position::new(DEFAULT_CENTER.lat, DEFAULT_CENTER.lon)
            zoom=DEFAULT_ZOOM
            set_view=true
            map=map.write_only()
        >
            <TileLayer
                url="https://tile.openstreetmap.org/{z}/{x}/{y}.png"
                attribution="&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            />
            {move || user.get().map(|position| view! { <UserMarker position=position /> })}
            {move || user.get().map(|origin| {
                let candidates = responders.get();
                responder_distances(origin, &candidates)
                    .into_iter()
                    .map(|entry| view! {
                        <ResponderMarker
                            origin=origin
                            responder=entry.responder.clone()
                            distance_km=entry.distance_km
                        />
                    })
                    .collect_view()
            })}
            {move || route_layer.with(|layer| layer.current().map(|route| {
                let positions: Vec<Position> = route
                    .points
                    .iter()
                    .map(|point| Position::new(point.lat, point.lon))
                    .collect();
                view! { <Polyline positions=positions color="blue".to_string() weight=5.0 /> }
            }))}
        </MapContainer>
    }
}
