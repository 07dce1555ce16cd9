//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores del resolvedor de rutas
#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("Invalid route input: {0}")]
    InvalidInput(String),

    #[error("Routing failed: {0}")]
    Failure(String),
}

impl From<reqwest::Error> for RoutingError {
    fn from(e: reqwest::Error) -> Self {
        RoutingError::Failure(e.to_string())
    }
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing coordinates")]
    MissingInput,

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Routing(#[from] RoutingError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingInput | AppError::Validation(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Routing(RoutingError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            AppError::Routing(RoutingError::Failure(_)) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::MissingInput => "MISSING_INPUT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Routing(RoutingError::InvalidInput(_)) => "INVALID_ROUTE_INPUT",
            AppError::Routing(RoutingError::Failure(_)) => "ROUTING_FAILED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let error_response = match self {
            AppError::Validation(errors) => {
                log::warn!("⚠️ Validation error: {}", errors);
                ErrorResponse {
                    error: "The provided data is invalid".to_string(),
                    code,
                    details: serde_json::to_value(&errors).ok(),
                }
            }
            AppError::Routing(RoutingError::Failure(msg)) => {
                log::error!("❌ Routing failed: {}", msg);
                ErrorResponse {
                    error: "Routing failed".to_string(),
                    code,
                    details: Some(serde_json::json!({ "routing_error": msg })),
                }
            }
            AppError::Internal(msg) => {
                log::error!("❌ Internal error: {}", msg);
                ErrorResponse {
                    error: msg,
                    code,
                    details: None,
                }
            }
            other => {
                log::warn!("⚠️ {}", other);
                ErrorResponse {
                    error: other.to_string(),
                    code,
                    details: None,
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, error: validator::ValidationError) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);
    AppError::Validation(errors)
}

/// Función helper para crear errores internos
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}
