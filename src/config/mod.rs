//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y las reglas fijas
//! del planificador de viajes.

pub mod environment;
pub mod planning;

pub use environment::*;
pub use planning::PlanningConfig;
