use serde::{Deserialize, Serialize};

pub mod api;
pub mod events;
pub mod geo;
pub mod route;
pub mod selection;

pub use api::{ApiErrorBody, RequestResponder, RequestResponderResponse};
pub use events::{ClientEvent, ServerEvent};
pub use geo::{haversine_km, EARTH_RADIUS_KM};
pub use route::{route_url, Eta, OsrmResponse, Overview, Route, RouteLayer};
pub use selection::{nearest_responder, responder_distances, NearestResponder, ResponderDistance, MAX_RESPONDER_RADIUS_KM};

/// A point in decimal degrees. No range checks are applied.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResponderCategory {
    #[default]
    Generic,
    Ambulance,
}

impl ResponderCategory {
    pub fn is_generic(&self) -> bool {
        *self == Self::Generic
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Responder {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "type", default, skip_serializing_if = "ResponderCategory::is_generic")]
    pub category: ResponderCategory,
    pub available: bool,
}

impl Responder {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64, available: bool) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            category: ResponderCategory::Generic,
            available,
        }
    }

    pub fn with_category(mut self, category: ResponderCategory) -> Self {
        self.category = category;
        self
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    pub fn is_ambulance(&self) -> bool {
        self.category == ResponderCategory::Ambulance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responder_without_type_defaults_to_generic() {
        let responder: Responder = serde_json::from_str(
            r#"{"name":"Responder 1","lat":13.0674,"lon":80.2377,"available":true}"#,
        )
        .unwrap();

        assert_eq!(responder.category, ResponderCategory::Generic);
        assert!(!responder.is_ambulance());
        assert_eq!(responder.coordinate(), Coordinate::new(13.0674, 80.2377));
    }

    #[test]
    fn responder_type_uses_wire_name() {
        let responder = Responder::new("Unit 7", 12.0, 77.0, false)
            .with_category(ResponderCategory::Ambulance);

        let json = serde_json::to_value(&responder).unwrap();
        assert_eq!(json["type"], "ambulance");
        assert_eq!(json["available"], false);
        assert!(json.get("category").is_none());
    }

    #[test]
    fn generic_responder_omits_type() {
        let responder = Responder::new("Responder 2", 13.0827, 80.2707, true);

        let json = serde_json::to_value(&responder).unwrap();
        assert!(json.get("type").is_none());

        let back: Responder = serde_json::from_value(json).unwrap();
        assert_eq!(back, responder);
    }
}
