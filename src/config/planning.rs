//! Constantes de planificación
//!
//! Reglas fijas del plan de viaje: velocidad promedio, intervalos de paradas,
//! límites diarios de conducción y datos del conductor. Se agrupan en
//! `PlanningConfig` para poder parametrizarlas sin tocar los algoritmos.

use chrono::NaiveTime;

pub const AVERAGE_SPEED_MPH: f64 = 50.0;
pub const DAY_START_HOUR: u32 = 6;
pub const DAY_START_MINUTE: u32 = 0;

pub const FUEL_INTERVAL_MILES: u64 = 1000;
pub const FIRST_REST_MILE: u64 = 250;
pub const REST_INTERVAL_MILES: u64 = 500;
pub const SHORT_BREAK_HOURS: f64 = 0.5;
pub const LONG_REST_HOURS: f64 = 10.0;

pub const DAILY_DRIVING_CAP_HOURS: f64 = 9.0;
pub const DRIVING_BEFORE_BREAK_HOURS: f64 = 4.5;
pub const MID_DAY_BREAK_HOURS: f64 = 0.5;
pub const PRE_TRIP_HOURS: f64 = 0.5;
pub const POST_TRIP_HOURS: f64 = 1.0;

pub const ODOMETER_BASE: i64 = 123_456;
pub const DEFAULT_DRIVER_NAME: &str = "John Doe";
pub const DEFAULT_TRUCK_NUMBER: &str = "TRK001";

/// Configuración de las reglas del planificador
#[derive(Debug, Clone)]
pub struct PlanningConfig {
    pub average_speed_mph: f64,
    pub day_start: NaiveTime,
    pub fuel_interval_miles: u64,
    pub first_rest_mile: u64,
    pub rest_interval_miles: u64,
    pub short_break_hours: f64,
    pub long_rest_hours: f64,
    pub daily_driving_cap_hours: f64,
    pub driving_before_break_hours: f64,
    pub mid_day_break_hours: f64,
    pub pre_trip_hours: f64,
    pub post_trip_hours: f64,
    pub odometer_base: i64,
    pub driver_name: String,
    pub truck_number: String,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            average_speed_mph: AVERAGE_SPEED_MPH,
            day_start: NaiveTime::from_hms_opt(DAY_START_HOUR, DAY_START_MINUTE, 0)
                .unwrap_or(NaiveTime::MIN),
            fuel_interval_miles: FUEL_INTERVAL_MILES,
            first_rest_mile: FIRST_REST_MILE,
            rest_interval_miles: REST_INTERVAL_MILES,
            short_break_hours: SHORT_BREAK_HOURS,
            long_rest_hours: LONG_REST_HOURS,
            daily_driving_cap_hours: DAILY_DRIVING_CAP_HOURS,
            driving_before_break_hours: DRIVING_BEFORE_BREAK_HOURS,
            mid_day_break_hours: MID_DAY_BREAK_HOURS,
            pre_trip_hours: PRE_TRIP_HOURS,
            post_trip_hours: POST_TRIP_HOURS,
            odometer_base: ODOMETER_BASE,
            driver_name: DEFAULT_DRIVER_NAME.to_string(),
            truck_number: DEFAULT_TRUCK_NUMBER.to_string(),
        }
    }
}

impl PlanningConfig {
    /// Horas de servicio fijas por día (pre-trip + post-trip)
    pub fn daily_on_duty_overhead(&self) -> f64 {
        self.pre_trip_hours + self.post_trip_hours
    }
}
