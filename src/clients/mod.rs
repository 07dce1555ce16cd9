//! Clients - HTTP Clients for External APIs
//!
//! This module contains HTTP clients for communicating with external APIs.
//! The routing provider sits behind `RoutingProvider` so handlers can be
//! tested without the network.

pub mod osrm_client;

use async_trait::async_trait;

use crate::models::trip::RoutePoint;
use crate::utils::errors::RoutingError;

pub use osrm_client::OsrmClient;

/// Raw route as returned by the provider, in meters and seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRoute {
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

/// External driving-directions provider
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Fetch a driving route through the points in order (single attempt)
    async fn fetch_route(&self, points: &[RoutePoint]) -> Result<RawRoute, RoutingError>;
}
