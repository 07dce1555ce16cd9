//! Planificador de viajes de camión
//!
//! Calcula la ruta (vía OSRM), las paradas de combustible/descanso y los
//! registros diarios de servicio del conductor.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
