//! Services module
//!
//! Este módulo contiene la lógica de negocio del planificador: resolución
//! de la ruta, paradas de combustible/descanso y registros diarios.

pub mod duty_log_service;
pub mod route_service;
pub mod stop_planner;

pub use duty_log_service::{BreakRule, DaySegment, DutyLogService, TripLocations};
pub use route_service::RouteService;
pub use stop_planner::StopPlanner;
