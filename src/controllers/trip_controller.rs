//! Controlador de planificación de viajes
//!
//! Valida el request, resuelve la ruta y arma la respuesta con paradas y
//! registros diarios.

use chrono::{Local, NaiveDate};
use std::sync::Arc;
use validator::Validate;

use crate::clients::RoutingProvider;
use crate::config::PlanningConfig;
use crate::dto::trip_dto::{DayLogDto, LocationFeature, RoutePlanDto, TripPlanResponse, TripRequest};
use crate::models::trip::RoutePoint;
use crate::services::duty_log_service::{DutyLogService, TripLocations};
use crate::services::route_service::RouteService;
use crate::services::stop_planner::StopPlanner;
use crate::utils::errors::{internal_error, validation_error, AppError, AppResult};
use crate::utils::validation::validate_coordinates;

pub struct TripController {
    route_service: RouteService,
    planning: Arc<PlanningConfig>,
}

impl TripController {
    pub fn new(provider: Arc<dyn RoutingProvider>, planning: Arc<PlanningConfig>) -> Self {
        Self {
            route_service: RouteService::new(provider),
            planning,
        }
    }

    /// Plan completo con la fecha local de hoy como primer día
    pub async fn plan_trip(&self, request: TripRequest) -> AppResult<TripPlanResponse> {
        self.plan_trip_from(request, Local::now().date_naive()).await
    }

    pub async fn plan_trip_from(
        &self,
        request: TripRequest,
        start_date: NaiveDate,
    ) -> AppResult<TripPlanResponse> {
        let (current, pickup, dropoff) = match (
            &request.current_location,
            &request.pickup_location,
            &request.dropoff_location,
        ) {
            (Some(current), Some(pickup), Some(dropoff)) => (current, pickup, dropoff),
            _ => return Err(AppError::MissingInput),
        };

        request.validate()?;

        let current = to_route_point("currentLocation", current)?;
        let pickup = to_route_point("pickupLocation", pickup)?;
        let dropoff = to_route_point("dropoffLocation", dropoff)?;

        // TODO: descontar currentCycleUsed del límite diario cuando se defina la regla del ciclo de 70 horas
        log::info!(
            "🚚 Planificando viaje (ciclo usado: {:.1} h)",
            request.current_cycle_used.unwrap_or(0.0)
        );

        let points = [current.clone(), pickup.clone(), dropoff.clone()];
        let summary = self.route_service.resolve(&points).await?;

        if !summary.distance_miles.is_finite() || !summary.duration_hours.is_finite() {
            return Err(internal_error("Route summary is not a finite number"));
        }

        let planner = StopPlanner::new(&self.planning);
        let fuel_stops = planner.plan_fuel_stops(summary.distance_miles);
        let rest_stops = planner.plan_rest_stops(summary.distance_miles);

        let locations = TripLocations::from_points(&current, &pickup, &dropoff);
        let logs = DutyLogService::new(&self.planning).generate_logs(
            summary.distance_miles,
            summary.duration_hours,
            &locations,
            start_date,
        );

        log::info!(
            "✅ Plan listo: {} paradas de combustible, {} de descanso, {} días",
            fuel_stops.len(),
            rest_stops.len(),
            logs.len()
        );

        Ok(TripPlanResponse {
            route: RoutePlanDto::new(&summary, fuel_stops, rest_stops),
            logs: logs.iter().map(DayLogDto::from).collect(),
        })
    }
}

fn to_route_point(field: &'static str, feature: &LocationFeature) -> AppResult<RoutePoint> {
    let (lon, lat) = validate_coordinates(&feature.geometry.coordinates)
        .map_err(|e| validation_error(field, e))?;

    let point = RoutePoint::new(lon, lat);
    Ok(match feature.display_name() {
        Some(name) => point.with_name(name),
        None => point,
    })
}
