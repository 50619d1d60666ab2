use crate::{geo::haversine_km, Coordinate, Responder};

/// Responders farther than this from the user are never selected.
pub const MAX_RESPONDER_RADIUS_KM: f64 = 700.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponderDistance<'a> {
    pub responder: &'a Responder,
    pub distance_km: f64,
}

pub type NearestResponder<'a> = ResponderDistance<'a>;

/// Distance from `user` to every responder, in input order.
pub fn responder_distances(user: Coordinate, responders: &[Responder]) -> Vec<ResponderDistance<'_>> {
    responders
        .iter()
        .map(|responder| ResponderDistance {
            responder,
            distance_km: haversine_km(user, responder.coordinate()),
        })
        .collect()
}

/// Picks the closest responder within [`MAX_RESPONDER_RADIUS_KM`].
///
/// Ties keep the earliest responder, since the running minimum only moves on a
/// strictly smaller distance. The `available` flag is not consulted.
pub fn nearest_responder(user: Coordinate, responders: &[Responder]) -> Option<NearestResponder<'_>> {
    let mut nearest: Option<NearestResponder<'_>> = None;
    let mut min_distance = f64::INFINITY;

    for candidate in responder_distances(user, responders) {
        if candidate.distance_km <= MAX_RESPONDER_RADIUS_KM && candidate.distance_km < min_distance {
            min_distance = candidate.distance_km;
            nearest = Some(candidate);
        }
    }

    nearest
}
