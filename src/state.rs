//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todo es inmutable; cada request recalcula
//! su plan desde cero.

use std::sync::Arc;
use std::time::Duration;

use crate::clients::{OsrmClient, RoutingProvider};
use crate::config::environment::EnvironmentConfig;
use crate::config::PlanningConfig;
use crate::utils::errors::RoutingError;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub planning: Arc<PlanningConfig>,
    pub routing: Arc<dyn RoutingProvider>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, routing: Arc<dyn RoutingProvider>) -> Self {
        Self {
            config,
            planning: Arc::new(PlanningConfig::default()),
            routing,
        }
    }

    /// Estado con el cliente OSRM configurado desde el entorno
    pub fn from_config(config: EnvironmentConfig) -> Result<Self, RoutingError> {
        let client = OsrmClient::new(
            config.osrm_base_url.clone(),
            Duration::from_secs(config.routing_timeout_secs),
        )?;
        Ok(Self::new(config, Arc::new(client)))
    }
}
