//! Planificador de paradas
//!
//! Coloca paradas de combustible y de descanso a intervalos fijos de
//! distancia. Es independiente de los registros diarios.

use crate::config::PlanningConfig;
use crate::models::trip::{FuelStop, RestStop, RestStopKind};

pub struct StopPlanner<'a> {
    config: &'a PlanningConfig,
}

impl<'a> StopPlanner<'a> {
    pub fn new(config: &'a PlanningConfig) -> Self {
        Self { config }
    }

    /// Una parada por cada intervalo completo de combustible, sin incluir la milla 0
    pub fn plan_fuel_stops(&self, total_miles: f64) -> Vec<FuelStop> {
        let interval = self.config.fuel_interval_miles.max(1);

        (1u64..)
            .map(|n| n * interval)
            .take_while(|mile| (*mile as f64) < whole_miles(total_miles))
            .enumerate()
            .map(|(i, mile)| FuelStop {
                name: format!("Fuel Stop {}", i + 1),
                location: format!("Highway Mile {}", mile),
                distance_from_start: mile,
            })
            .collect()
    }

    /// Primera parada en la milla 250 y luego cada 500, alternando break/rest
    pub fn plan_rest_stops(&self, total_miles: f64) -> Vec<RestStop> {
        let first = self.config.first_rest_mile;
        let interval = self.config.rest_interval_miles.max(1);

        (0u64..)
            .map(|n| first + n * interval)
            .take_while(|mile| (*mile as f64) < whole_miles(total_miles))
            .enumerate()
            .map(|(i, mile)| {
                let (kind, duration_hours) = if i % 2 == 0 {
                    (RestStopKind::Break, self.config.short_break_hours)
                } else {
                    (RestStopKind::Rest, self.config.long_rest_hours)
                };
                RestStop {
                    location: format!("Rest Area Mile {}", mile),
                    kind,
                    duration_hours,
                    distance_from_start: mile,
                }
            })
            .collect()
    }
}

/// Millas completas recorridas; NaN o negativos cuentan como cero
fn whole_miles(total_miles: f64) -> f64 {
    if total_miles.is_finite() && total_miles > 0.0 {
        total_miles.trunc()
    } else {
        0.0
    }
}
