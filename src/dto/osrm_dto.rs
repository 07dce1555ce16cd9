//! DTOs para la API de rutas de OSRM
//!
//! Solo se modelan los campos que usa el planificador: distancia y duración
//! de la primera ruta.

use serde::Deserialize;

/// Response de `GET /route/v1/driving/{coords}`
#[derive(Debug, Deserialize)]
pub struct OsrmRouteResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

/// Ruta calculada por OSRM
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    pub distance: f64, // metros
    pub duration: f64, // segundos
}
