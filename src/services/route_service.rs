//! Servicio de resolución de rutas
//!
//! Valida los puntos, llama una sola vez al proveedor de rutas y convierte
//! metros/segundos a millas/horas.

use std::sync::Arc;

use crate::clients::{RawRoute, RoutingProvider};
use crate::models::trip::{RouteSummary, RoutePoint};
use crate::utils::errors::RoutingError;
use crate::utils::validation::validate_coordinates;

pub const MILES_PER_METER: f64 = 0.000621371;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub struct RouteService {
    provider: Arc<dyn RoutingProvider>,
}

impl RouteService {
    pub fn new(provider: Arc<dyn RoutingProvider>) -> Self {
        Self { provider }
    }

    /// Resolver la ruta para los puntos en orden (mínimo dos)
    pub async fn resolve(&self, points: &[RoutePoint]) -> Result<RouteSummary, RoutingError> {
        if points.len() < 2 {
            return Err(RoutingError::InvalidInput(format!(
                "At least two points are required, got {}",
                points.len()
            )));
        }

        for (index, point) in points.iter().enumerate() {
            validate_coordinates(&[point.longitude, point.latitude]).map_err(|e| {
                RoutingError::InvalidInput(format!("Point {} has invalid coordinates: {}", index, e))
            })?;
        }

        log::info!("🗺️ Resolviendo ruta con {} puntos", points.len());
        let raw = self.provider.fetch_route(points).await?;
        let summary = to_summary(raw);

        log::info!(
            "✅ Ruta resuelta: {:.1} millas, {:.1} horas",
            summary.distance_miles,
            summary.duration_hours
        );
        Ok(summary)
    }
}

/// Convertir la ruta del proveedor a millas y horas
pub fn to_summary(raw: RawRoute) -> RouteSummary {
    RouteSummary {
        distance_miles: raw.distance_meters * MILES_PER_METER,
        duration_hours: raw.duration_seconds / SECONDS_PER_HOUR,
    }
}
