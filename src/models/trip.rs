//! Modelo de Trip
//!
//! Este módulo contiene las entidades del plan de viaje: puntos de ruta,
//! resumen de ruta, paradas y los registros diarios de servicio (duty logs).
//! Todas se construyen por request y se descartan después de responder.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Punto geográfico de la ruta (longitud, latitud) con nombre opcional
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePoint {
    pub longitude: f64,
    pub latitude: f64,
    pub name: Option<String>,
}

impl RoutePoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Nombre a mostrar, o el valor por defecto si el punto no trae uno
    pub fn label_or(&self, fallback: &str) -> String {
        self.name.clone().unwrap_or_else(|| fallback.to_string())
    }

    /// Formato `lon,lat` usado por el proveedor de rutas
    pub fn as_lon_lat(&self) -> String {
        format!("{},{}", self.longitude, self.latitude)
    }
}

/// Distancia y duración totales de la ruta, ya convertidas a millas y horas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummary {
    pub distance_miles: f64,
    pub duration_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelStop {
    pub name: String,
    pub location: String,
    pub distance_from_start: u64,
}

/// Tipo de parada de descanso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestStopKind {
    Break,
    Rest,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestStop {
    pub location: String,
    #[serde(rename = "type")]
    pub kind: RestStopKind,
    #[serde(rename = "duration")]
    pub duration_hours: f64,
    pub distance_from_start: u64,
}

/// Estado de servicio del conductor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DutyStatus {
    OffDuty,
    Sleeper,
    Driving,
    OnDuty,
}

impl DutyStatus {
    /// Código corto usado en la grilla horaria
    pub fn code(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF",
            DutyStatus::Sleeper => "SB",
            DutyStatus::Driving => "D",
            DutyStatus::OnDuty => "ON",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DutyEvent {
    pub time: NaiveTime,
    pub status: DutyStatus,
    pub location: String,
    pub odometer: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayLog {
    pub date: NaiveDate,
    pub driver_name: String,
    pub truck_number: String,
    pub events: Vec<DutyEvent>,
    pub total_driving_hours: f64,
    pub total_on_duty_hours: f64,
}

impl DayLog {
    /// Grilla de 24 horas: estado vigente al inicio de cada hora.
    /// Antes del primer evento el conductor está fuera de servicio.
    pub fn hourly_grid(&self) -> [DutyStatus; 24] {
        let mut grid = [DutyStatus::OffDuty; 24];
        for (hour, slot) in grid.iter_mut().enumerate() {
            let slot_start = hour as u32 * 60;
            if let Some(event) = self
                .events
                .iter()
                .take_while(|e| e.time.hour() * 60 + e.time.minute() <= slot_start)
                .last()
            {
                *slot = event.status;
            }
        }
        grid
    }

    /// Último odómetro registrado en el día
    pub fn final_odometer(&self) -> Option<i64> {
        self.events.last().map(|e| e.odometer)
    }
}
