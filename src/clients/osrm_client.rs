//! OSRM routing client
//!
//! Calls the public OSRM `route` service with a `lon,lat;lon,lat` list and
//! returns distance and duration of the first route.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{RawRoute, RoutingProvider};
use crate::dto::osrm_dto::OsrmRouteResponse;
use crate::models::trip::RoutePoint;
use crate::utils::errors::RoutingError;

pub struct OsrmClient {
    base_url: String,
    client: Client,
}

impl OsrmClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("TripPlanner/1.0")
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Build the request URL for the ordered coordinates
    pub fn route_url(&self, points: &[RoutePoint]) -> String {
        let coordinates = points
            .iter()
            .map(RoutePoint::as_lon_lat)
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/route/v1/driving/{}?overview=false",
            self.base_url, coordinates
        )
    }
}

/// Extract the first route from an OSRM payload
pub fn parse_route_payload(body: &str) -> Result<RawRoute, RoutingError> {
    let payload: OsrmRouteResponse = serde_json::from_str(body)
        .map_err(|e| RoutingError::Failure(format!("Malformed routing payload: {}", e)))?;

    let route = payload.routes.first().ok_or_else(|| {
        RoutingError::Failure(format!(
            "No route found (code: {}, message: {})",
            payload.code.as_deref().unwrap_or("unknown"),
            payload.message.as_deref().unwrap_or("-")
        ))
    })?;

    if !route.distance.is_finite() || !route.duration.is_finite() {
        return Err(RoutingError::Failure("Route distance/duration is not a number".to_string()));
    }

    Ok(RawRoute {
        distance_meters: route.distance,
        duration_seconds: route.duration,
    })
}

#[async_trait]
impl RoutingProvider for OsrmClient {
    async fn fetch_route(&self, points: &[RoutePoint]) -> Result<RawRoute, RoutingError> {
        let url = self.route_url(points);
        log::info!("🌐 Requesting route: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        let response_text = response.text().await?;

        log::info!("📡 OSRM response status: {}", status);
        log::debug!("📄 OSRM response body: {}", response_text);

        if !status.is_success() {
            return Err(RoutingError::Failure(format!(
                "Routing provider returned {}",
                status
            )));
        }

        parse_route_payload(&response_text)
    }
}
