//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! geográficos y numéricos del request de viaje.

use validator::ValidationError;

/// Validar que un valor esté en un rango específico
pub fn validate_range<T: PartialOrd + std::fmt::Display + serde::Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar un par `[lon, lat]` y devolverlo como tupla
pub fn validate_coordinates(value: &[f64]) -> Result<(f64, f64), ValidationError> {
    if value.len() != 2 {
        let mut error = ValidationError::new("coordinates");
        error.add_param("expected".into(), &"[longitude, latitude]".to_string());
        error.add_param("actual_len".into(), &value.len());
        return Err(error);
    }

    let (lon, lat) = (value[0], value[1]);
    if !lon.is_finite() || !lat.is_finite() {
        return Err(ValidationError::new("finite"));
    }
    validate_range(lon, -180.0, 180.0)?;
    validate_range(lat, -90.0, 90.0)?;

    Ok((lon, lat))
}
