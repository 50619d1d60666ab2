use reqwest::Client;
use shared_types::{route_url, Coordinate, Eta, OsrmResponse, Overview, Route};

use crate::error::RoutingError;

/// Driving routes and travel times from an OSRM-compatible service.
///
/// Failures never reach the caller: a broken call reads as "no route" or
/// [`Eta::Unavailable`] and is logged here.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    client: Client,
    base_url: String,
}

impl OsrmClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn route_geometry(&self, start: Coordinate, end: Coordinate) -> Option<Route> {
        tracing::debug!(
            "Fetching route from ({}, {}) to ({}, {})",
            start.lat,
            start.lon,
            end.lat,
            end.lon
        );

        match self.query(start, end, Overview::Full).await {
            Ok(response) => {
                let route = response.into_route();
                if route.is_none() {
                    tracing::info!("No route found between user and responder.");
                }
                route
            }
            Err(e) => {
                tracing::warn!("Error fetching route: {}", e);
                None
            }
        }
    }

    pub async fn travel_time(&self, start: Coordinate, end: Coordinate) -> Eta {
        match self.query(start, end, Overview::DurationOnly).await {
            Ok(response) => response.eta(),
            Err(e) => {
                tracing::warn!("Error fetching travel time: {}", e);
                Eta::Unavailable
            }
        }
    }

    async fn query(
        &self,
        start: Coordinate,
        end: Coordinate,
        overview: Overview,
    ) -> Result<OsrmResponse, RoutingError> {
        let url = route_url(&self.base_url, start, end, overview);

        // OSRM reports "no route" and bad input in a JSON body, so the status is not checked.
        let text = self.client.get(&url).send().await?.text().await?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                "Failed to parse OSRM response. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            RoutingError::from(e)
        })
    }
}
