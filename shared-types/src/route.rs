use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// How much of the route the routing service should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overview {
    /// Full GeoJSON geometry, used to draw the polyline.
    Full,
    /// Summary only, used for the travel duration.
    DurationOnly,
}

impl Overview {
    fn query(self) -> &'static str {
        match self {
            Overview::Full => "overview=full&geometries=geojson",
            Overview::DurationOnly => "overview=false",
        }
    }
}

/// Builds an OSRM driving-route URL. The service expects `lon,lat` pairs.
pub fn route_url(base_url: &str, start: Coordinate, end: Coordinate, overview: Overview) -> String {
    format!(
        "{}/route/v1/driving/{},{};{},{}?{}",
        base_url.trim_end_matches('/'),
        start.lon,
        start.lat,
        end.lon,
        end.lat,
        overview.query()
    )
}

// --- Data Structures for parsing OSRM responses ---

#[derive(Debug, Deserialize)]
pub struct OsrmResponse {
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    pub geometry: Option<OsrmGeometry>,
    pub duration: f64,
}

#[derive(Debug, Deserialize)]
pub struct OsrmGeometry {
    pub coordinates: Vec<[f64; 2]>,
}

impl OsrmResponse {
    /// Geometry of the first route, in `(lat, lon)` order.
    pub fn into_route(self) -> Option<Route> {
        let geometry = self.routes.into_iter().next()?.geometry?;
        Some(Route::from_lon_lat(&geometry.coordinates))
    }

    pub fn eta(&self) -> Eta {
        self.routes
            .first()
            .map(|route| Eta::from_seconds(route.duration))
            .unwrap_or(Eta::Unavailable)
    }
}

/// A driving path, stored in `(lat, lon)` order for the map.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Route {
    pub points: Vec<Coordinate>,
}

impl Route {
    pub fn from_lon_lat(coordinates: &[[f64; 2]]) -> Self {
        Self {
            points: coordinates
                .iter()
                .map(|[lon, lat]| Coordinate::new(*lat, *lon))
                .collect(),
        }
    }

    pub fn lat_lon_pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|point| [point.lat, point.lon]).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eta {
    Minutes(i64),
    Unavailable,
}

impl Eta {
    pub fn from_seconds(seconds: f64) -> Self {
        Eta::Minutes((seconds / 60.0).round() as i64)
    }
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eta::Minutes(minutes) => write!(f, "{} min", minutes),
            Eta::Unavailable => f.write_str("N/A"),
        }
    }
}

/// The one route currently drawn on the map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteLayer {
    current: Option<Route>,
}

impl RouteLayer {
    pub fn current(&self) -> Option<&Route> {
        self.current.as_ref()
    }

    /// Swaps in a new route and hands back the one it displaced.
    pub fn replace(&mut self, route: Route) -> Option<Route> {
        self.current.replace(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: Coordinate = Coordinate::new(13.0827, 80.2707);
    const RESPONDER: Coordinate = Coordinate::new(13.0674, 80.2377);

    #[test]
    fn geometry_axes_are_swapped() {
        let route = Route::from_lon_lat(&[[80.27, 13.08], [80.30, 13.10]]);
        assert_eq!(route.lat_lon_pairs(), vec![[13.08, 80.27], [13.10, 80.30]]);
    }

    #[test]
    fn full_overview_url_puts_longitude_first() {
        let url = route_url("https://router.project-osrm.org", USER, RESPONDER, Overview::Full);
        assert_eq!(
            url,
            "https://router.project-osrm.org/route/v1/driving/80.2707,13.0827;80.2377,13.0674?overview=full&geometries=geojson"
        );
    }

    #[test]
    fn duration_url_skips_geometry() {
        let url = route_url("http://localhost:5000/", USER, RESPONDER, Overview::DurationOnly);
        assert_eq!(
            url,
            "http://localhost:5000/route/v1/driving/80.2707,13.0827;80.2377,13.0674?overview=false"
        );
    }

    #[test]
    fn empty_routes_give_no_route_and_no_eta() {
        let response: OsrmResponse = serde_json::from_str(r#"{"code":"NoRoute","routes":[]}"#).unwrap();
        assert_eq!(response.eta(), Eta::Unavailable);
        assert_eq!(response.eta().to_string(), "N/A");
        assert!(response.into_route().is_none());
    }

    #[test]
    fn missing_routes_key_is_treated_as_empty() {
        let response: OsrmResponse =
            serde_json::from_str(r#"{"code":"InvalidQuery","message":"bad coordinates"}"#).unwrap();
        assert_eq!(response.eta(), Eta::Unavailable);
        assert!(response.into_route().is_none());
    }

    #[test]
    fn first_route_drives_eta_and_geometry() {
        let response: OsrmResponse = serde_json::from_str(
            r#"{"routes":[
                {"geometry":{"coordinates":[[80.2707,13.0827],[80.2377,13.0674]]},"duration":545.2},
                {"geometry":{"coordinates":[[0.0,0.0]]},"duration":9999.0}
            ]}"#,
        )
        .unwrap();

        assert_eq!(response.eta().to_string(), "9 min");
        let route = response.into_route().unwrap();
        assert_eq!(route.points, vec![USER, RESPONDER]);
    }

    #[test]
    fn eta_rounds_to_nearest_minute() {
        assert_eq!(Eta::from_seconds(89.0), Eta::Minutes(1));
        assert_eq!(Eta::from_seconds(90.0), Eta::Minutes(2));
        assert_eq!(Eta::from_seconds(0.0).to_string(), "0 min");
    }

    #[test]
    fn route_layer_holds_a_single_route() {
        let mut layer = RouteLayer::default();
        let first = Route::from_lon_lat(&[[80.27, 13.08]]);
        let second = Route::from_lon_lat(&[[80.30, 13.10]]);

        assert!(layer.replace(first.clone()).is_none());
        assert_eq!(layer.replace(second.clone()), Some(first));
        assert_eq!(layer.current(), Some(&second));
    }
}
