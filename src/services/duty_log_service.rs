//! Generador de registros diarios de servicio (duty logs)
//!
//! Convierte la distancia y duración totales de la ruta en una secuencia de
//! registros por día. Cada día:
//!
//! 1. conduce como máximo `daily_driving_cap_hours`,
//! 2. divide la conducción en segmentos según la `BreakRule`,
//! 3. emite pre-trip (on-duty), segmentos de conducción y descansos,
//!    post-trip (on-duty) y sleeper.
//!
//! El odómetro parte de un valor base fijo y solo aumenta.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::config::PlanningConfig;
use crate::models::trip::{DayLog, DutyEvent, DutyStatus, RoutePoint};

/// Remanente de horas que se considera cero (errores de punto flotante)
const HOURS_EPSILON: f64 = 1e-9;

const TRUCK_STOP: &str = "Truck Stop";
const REST_STOP: &str = "Rest Stop";
const FUEL_STOP: &str = "Fuel Stop";

/// Segmento de la jornada de conducción
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DaySegment {
    Driving { hours: f64 },
    OffDutyBreak { hours: f64 },
}

/// Regla para dividir las horas de conducción de un día en segmentos
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BreakRule {
    /// Un solo bloque de conducción, sin descansos
    None,
    /// Un descanso obligatorio después de `drive_before_break` horas
    SingleMidDayBreak {
        drive_before_break: f64,
        break_hours: f64,
    },
}

impl BreakRule {
    pub fn from_config(config: &PlanningConfig) -> Self {
        BreakRule::SingleMidDayBreak {
            drive_before_break: config.driving_before_break_hours,
            break_hours: config.mid_day_break_hours,
        }
    }

    pub fn segments(&self, driving_today: f64) -> Vec<DaySegment> {
        match *self {
            BreakRule::SingleMidDayBreak {
                drive_before_break,
                break_hours,
            } if driving_today > drive_before_break => vec![
                DaySegment::Driving {
                    hours: drive_before_break,
                },
                DaySegment::OffDutyBreak { hours: break_hours },
                DaySegment::Driving {
                    hours: driving_today - drive_before_break,
                },
            ],
            _ => vec![DaySegment::Driving {
                hours: driving_today,
            }],
        }
    }
}

/// Ubicaciones con nombre del viaje
#[derive(Debug, Clone)]
pub struct TripLocations {
    pub current: String,
    pub pickup: String,
    pub dropoff: String,
}

impl TripLocations {
    pub fn from_points(current: &RoutePoint, pickup: &RoutePoint, dropoff: &RoutePoint) -> Self {
        Self {
            current: current.label_or("Current Location"),
            pickup: pickup.label_or("Pickup Location"),
            dropoff: dropoff.label_or("Dropoff Location"),
        }
    }
}

pub struct DutyLogService<'a> {
    config: &'a PlanningConfig,
    rule: BreakRule,
}

impl<'a> DutyLogService<'a> {
    pub fn new(config: &'a PlanningConfig) -> Self {
        Self {
            config,
            rule: BreakRule::from_config(config),
        }
    }

    pub fn with_rule(mut self, rule: BreakRule) -> Self {
        self.rule = rule;
        self
    }

    /// Generar los registros diarios a partir de `start_date`
    pub fn generate_logs(
        &self,
        total_miles: f64,
        total_hours: f64,
        locations: &TripLocations,
        start_date: NaiveDate,
    ) -> Vec<DayLog> {
        let mut logs = Vec::new();
        if !is_positive(total_miles) || !is_positive(total_hours) {
            log::warn!(
                "⚠️ Ruta sin distancia o duración positiva ({} mi, {} h), sin registros",
                total_miles,
                total_hours
            );
            return logs;
        }

        let cap = if is_positive(self.config.daily_driving_cap_hours) {
            self.config.daily_driving_cap_hours
        } else {
            total_hours
        };

        let mut odometer = self.config.odometer_base;
        let mut miles_remaining = total_miles;
        let mut hours_remaining = total_hours;
        let mut day_index: i64 = 0;

        while hours_remaining > 0.0 && miles_remaining > 0.0 {
            let driving_today = hours_remaining.min(cap);
            let mut clock = self.config.day_start;
            let mut events = Vec::new();

            let pre_trip_location = if day_index == 0 {
                locations.current.clone()
            } else {
                TRUCK_STOP.to_string()
            };
            events.push(DutyEvent {
                time: clock,
                status: DutyStatus::OnDuty,
                location: pre_trip_location,
                odometer,
            });
            clock = advance(clock, self.config.pre_trip_hours);

            for segment in self.rule.segments(driving_today) {
                match segment {
                    DaySegment::Driving { hours } => {
                        let miles_driven = (hours * self.config.average_speed_mph).trunc();
                        odometer += miles_driven as i64;
                        let mile_marker = total_miles - miles_remaining + miles_driven;

                        events.push(DutyEvent {
                            time: clock,
                            status: DutyStatus::Driving,
                            location: format!("Highway Mile {}", mile_marker.trunc() as i64),
                            odometer,
                        });

                        clock = advance(clock, hours);
                        miles_remaining -= miles_driven;
                        hours_remaining -= hours;
                    }
                    DaySegment::OffDutyBreak { hours } => {
                        events.push(DutyEvent {
                            time: clock,
                            status: DutyStatus::OffDuty,
                            location: REST_STOP.to_string(),
                            odometer,
                        });
                        clock = advance(clock, hours);
                    }
                }
            }

            if hours_remaining < HOURS_EPSILON {
                hours_remaining = 0.0;
            }

            let arrived = miles_remaining <= 0.0;
            events.push(DutyEvent {
                time: clock,
                status: DutyStatus::OnDuty,
                location: if arrived {
                    locations.dropoff.clone()
                } else {
                    FUEL_STOP.to_string()
                },
                odometer,
            });
            clock = advance(clock, self.config.post_trip_hours);

            events.push(DutyEvent {
                time: clock,
                status: DutyStatus::Sleeper,
                location: if arrived {
                    locations.dropoff.clone()
                } else {
                    TRUCK_STOP.to_string()
                },
                odometer,
            });

            logs.push(DayLog {
                date: start_date + Duration::days(day_index),
                driver_name: self.config.driver_name.clone(),
                truck_number: self.config.truck_number.clone(),
                events,
                total_driving_hours: driving_today,
                total_on_duty_hours: driving_today + self.config.daily_on_duty_overhead(),
            });

            day_index += 1;
        }

        log::info!(
            "📋 Generados {} registros diarios (odómetro final {})",
            logs.len(),
            odometer
        );
        logs
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Avanzar el reloj del día; se redondea al segundo
fn advance(clock: NaiveTime, hours: f64) -> NaiveTime {
    let seconds = (hours * 3600.0).round() as i64;
    clock.overflowing_add_signed(Duration::seconds(seconds)).0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locations() -> TripLocations {
        TripLocations {
            current: "Chicago, IL".to_string(),
            pickup: "Indianapolis, IN".to_string(),
            dropoff: "Atlanta, GA".to_string(),
        }
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn statuses(log: &DayLog) -> Vec<DutyStatus> {
        log.events.iter().map(|e| e.status).collect()
    }

    fn times(log: &DayLog) -> Vec<String> {
        log.events
            .iter()
            .map(|e| e.time.format("%H:%M").to_string())
            .collect()
    }

    #[test]
    fn test_break_rule_segments() {
        let rule = BreakRule::SingleMidDayBreak {
            drive_before_break: 4.5,
            break_hours: 0.5,
        };
        assert_eq!(
            rule.segments(9.0),
            vec![
                DaySegment::Driving { hours: 4.5 },
                DaySegment::OffDutyBreak { hours: 0.5 },
                DaySegment::Driving { hours: 4.5 },
            ]
        );
        assert_eq!(rule.segments(4.5), vec![DaySegment::Driving { hours: 4.5 }]);
        assert_eq!(rule.segments(2.0), vec![DaySegment::Driving { hours: 2.0 }]);
        assert_eq!(BreakRule::None.segments(9.0), vec![DaySegment::Driving { hours: 9.0 }]);
    }

    #[test]
    fn test_three_day_scenario() {
        let config = PlanningConfig::default();
        let service = DutyLogService::new(&config);

        let logs = service.generate_logs(1200.0, 24.0, &locations(), start());
        assert_eq!(logs.len(), 3);

        let driving: Vec<f64> = logs.iter().map(|l| l.total_driving_hours).collect();
        assert_eq!(driving, vec![9.0, 9.0, 6.0]);
        let on_duty: Vec<f64> = logs.iter().map(|l| l.total_on_duty_hours).collect();
        assert_eq!(on_duty, vec![10.5, 10.5, 7.5]);

        use DutyStatus::*;
        for log in &logs {
            assert_eq!(statuses(log), vec![OnDuty, Driving, OffDuty, Driving, OnDuty, Sleeper]);
        }

        assert_eq!(
            times(&logs[0]),
            vec!["06:00", "06:30", "11:00", "11:30", "16:00", "17:00"]
        );
        assert_eq!(
            times(&logs[2]),
            vec!["06:00", "06:30", "11:00", "11:30", "13:00", "14:00"]
        );

        assert_eq!(logs[0].date, start());
        assert_eq!(logs[2].date, NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
        assert_eq!(logs[0].driver_name, "John Doe");
        assert_eq!(logs[0].truck_number, "TRK001");
    }

    #[test]
    fn test_locations_and_odometer() {
        let config = PlanningConfig::default();
        let service = DutyLogService::new(&config);
        let logs = service.generate_logs(1200.0, 24.0, &locations(), start());

        assert_eq!(logs[0].events[0].location, "Chicago, IL");
        assert_eq!(logs[1].events[0].location, "Truck Stop");
        assert_eq!(logs[0].events[1].location, "Highway Mile 225");
        assert_eq!(logs[0].events[2].location, "Rest Stop");
        assert_eq!(logs[0].events[3].location, "Highway Mile 450");
        assert_eq!(logs[0].events[4].location, "Fuel Stop");
        assert_eq!(logs[0].events[5].location, "Truck Stop");

        let last = logs.last().unwrap();
        assert_eq!(last.events[4].location, "Atlanta, GA");
        assert_eq!(last.events[5].location, "Atlanta, GA");

        assert_eq!(logs[0].events[0].odometer, 123_456);
        assert_eq!(logs[0].final_odometer(), Some(123_456 + 450));
        assert_eq!(last.final_odometer(), Some(123_456 + 1200));

        let odometers: Vec<i64> = logs
            .iter()
            .flat_map(|l| l.events.iter().map(|e| e.odometer))
            .collect();
        assert!(odometers.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_short_trip_single_segment() {
        let config = PlanningConfig::default();
        let service = DutyLogService::new(&config);
        let logs = service.generate_logs(150.0, 3.0, &locations(), start());

        assert_eq!(logs.len(), 1);
        use DutyStatus::*;
        assert_eq!(statuses(&logs[0]), vec![OnDuty, Driving, OnDuty, Sleeper]);
        assert_eq!(times(&logs[0]), vec!["06:00", "06:30", "09:30", "10:30"]);
        assert_eq!(logs[0].events[2].location, "Atlanta, GA");
    }

    #[test]
    fn test_last_day_takes_remainder() {
        let config = PlanningConfig::default();
        let service = DutyLogService::new(&config);
        let logs = service.generate_logs(2000.0, 20.3, &locations(), start());

        let driving: Vec<f64> = logs.iter().map(|l| l.total_driving_hours).collect();
        assert_eq!(driving.len(), 3);
        assert_eq!(&driving[..2], &[9.0, 9.0]);
        assert!((driving[2] - 2.3).abs() < 1e-9);
        let total: f64 = driving.iter().sum();
        assert!((total - 20.3).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_totals_yield_no_logs() {
        let config = PlanningConfig::default();
        let service = DutyLogService::new(&config);
        assert!(service.generate_logs(0.0, 10.0, &locations(), start()).is_empty());
        assert!(service.generate_logs(100.0, 0.0, &locations(), start()).is_empty());
        assert!(service.generate_logs(-5.0, -1.0, &locations(), start()).is_empty());
        assert!(service.generate_logs(f64::NAN, 10.0, &locations(), start()).is_empty());
    }

    #[test]
    fn test_terminates_for_odd_inputs() {
        let config = PlanningConfig::default();
        let service = DutyLogService::new(&config);
        for (miles, hours) in [(0.01, 0.01), (1e6, 3.3), (12.7, 100.0), (5000.0, 77.77)] {
            let logs = service.generate_logs(miles, hours, &locations(), start());
            assert!(!logs.is_empty());
            assert!(logs.len() <= (hours / 9.0).ceil() as usize);
            for log in &logs {
                let odo: Vec<i64> = log.events.iter().map(|e| e.odometer).collect();
                assert!(odo.windows(2).all(|w| w[0] <= w[1]));
                assert!(log.events.windows(2).all(|w| w[0].time <= w[1].time));
            }
        }
    }

    #[test]
    fn test_without_break_rule() {
        let config = PlanningConfig::default();
        let service = DutyLogService::new(&config).with_rule(BreakRule::None);
        let logs = service.generate_logs(450.0, 9.0, &locations(), start());

        use DutyStatus::*;
        assert_eq!(statuses(&logs[0]), vec![OnDuty, Driving, OnDuty, Sleeper]);
        assert_eq!(times(&logs[0]), vec!["06:00", "06:30", "15:30", "16:30"]);
    }
}
