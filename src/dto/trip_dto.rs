//! DTOs para el endpoint de planificación de viajes
//!
//! Request con las tres ubicaciones (formato GeoJSON Feature) y la
//! respuesta con el plan de ruta y los registros diarios.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::models::trip::{DayLog, DutyEvent, DutyStatus, FuelStop, RestStop, RouteSummary};

/// Geometría del punto (`coordinates` = `[lon, lat]`)
#[derive(Debug, Clone, Deserialize)]
pub struct GeometryDto {
    #[serde(rename = "type", default)]
    pub geometry_type: Option<String>,
    pub coordinates: Vec<f64>,
}

/// Ubicación como GeoJSON Feature; `properties` es metadata libre
#[derive(Debug, Clone, Deserialize)]
pub struct LocationFeature {
    #[serde(rename = "type", default)]
    pub feature_type: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    pub geometry: GeometryDto,
}

impl LocationFeature {
    /// Nombre a mostrar tomado de `properties` (name, label o address)
    pub fn display_name(&self) -> Option<String> {
        ["name", "label", "address"]
            .iter()
            .filter_map(|key| self.properties.get(*key))
            .filter_map(Value::as_str)
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Request del endpoint `POST /api/trip/route`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub current_location: Option<LocationFeature>,
    pub pickup_location: Option<LocationFeature>,
    pub dropoff_location: Option<LocationFeature>,
    /// Horas ya usadas del ciclo actual. Se acepta pero no afecta el plan.
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub current_cycle_used: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlanDto {
    /// Millas, redondeado a entero
    pub distance: i64,
    /// Horas, redondeado a un decimal
    pub duration: f64,
    pub fuel_stops: Vec<FuelStop>,
    pub rest_stops: Vec<RestStop>,
}

#[derive(Debug, Serialize)]
pub struct DutyEventDto {
    pub time: String,
    pub status: DutyStatus,
    pub location: String,
    pub odometer: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLogDto {
    pub date: String,
    pub driver_name: String,
    pub truck_number: String,
    pub logs: Vec<DutyEventDto>,
    pub total_driving: f64,
    pub total_on_duty: f64,
    pub graph: Vec<&'static str>,
}

/// Respuesta completa del plan de viaje
#[derive(Debug, Serialize)]
pub struct TripPlanResponse {
    pub route: RoutePlanDto,
    pub logs: Vec<DayLogDto>,
}

/// Redondear a un decimal
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl RoutePlanDto {
    pub fn new(summary: &RouteSummary, fuel_stops: Vec<FuelStop>, rest_stops: Vec<RestStop>) -> Self {
        Self {
            distance: summary.distance_miles.round() as i64,
            duration: round1(summary.duration_hours),
            fuel_stops,
            rest_stops,
        }
    }
}

impl From<&DutyEvent> for DutyEventDto {
    fn from(event: &DutyEvent) -> Self {
        Self {
            time: event.time.format("%H:%M").to_string(),
            status: event.status,
            location: event.location.clone(),
            odometer: event.odometer,
        }
    }
}

impl From<&DayLog> for DayLogDto {
    fn from(log: &DayLog) -> Self {
        Self {
            date: log.date.format("%Y-%m-%d").to_string(),
            driver_name: log.driver_name.clone(),
            truck_number: log.truck_number.clone(),
            logs: log.events.iter().map(DutyEventDto::from).collect(),
            total_driving: round1(log.total_driving_hours),
            total_on_duty: round1(log.total_on_duty_hours),
            graph: log.hourly_grid().iter().map(DutyStatus::code).collect(),
        }
    }
}
