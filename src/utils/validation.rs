//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::ValidationError;

/// Validar y convertir string a datetime UTC
pub fn validate_datetime(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            let mut error = ValidationError::new("datetime");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"RFC3339".to_string());
            error
        })
}

/// Validar que un string no esté vacío después de recortarlo
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de coordenadas GPS
pub fn validate_coordinates(lat: f64, lng: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&lat) {
        let mut error = ValidationError::new("latitude");
        error.add_param("value".into(), &lat);
        error.add_param("range".into(), &"-90.0 to 90.0".to_string());
        return Err(error);
    }

    if !(-180.0..=180.0).contains(&lng) {
        let mut error = ValidationError::new("longitude");
        error.add_param("value".into(), &lng);
        error.add_param("range".into(), &"-180.0 to 180.0".to_string());
        return Err(error);
    }

    Ok(())
}
