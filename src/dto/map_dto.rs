use serde::{Deserialize, Serialize};

use crate::models::geo::LatLng;
use crate::services::directions_service::RouteSummary;

/// Resultado de la petición de geolocalización del dispositivo: una
/// posición única, o un fallo clasificado
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GeolocationReport {
    Position { lat: f64, lng: f64 },
    Failure { reason: GeolocationFailure },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeolocationFailure {
    PermissionDenied,
    Timeout,
    Unsupported,
}

impl GeolocationFailure {
    /// Todas las variantes ofrecen el botón "Try Again"
    pub fn is_retryable(&self) -> bool {
        true
    }

    pub fn message(&self) -> &'static str {
        match self {
            GeolocationFailure::PermissionDenied => {
                "Unable to retrieve your location. Please enable location services."
            }
            GeolocationFailure::Timeout => "Timed out while retrieving your location.",
            GeolocationFailure::Unsupported => "Geolocation is not supported by your browser.",
        }
    }
}

// Request de la vista del mapa: el área elegida (si hay) y el resultado
// de geolocalización reportado por el cliente
#[derive(Debug, Deserialize)]
pub struct MapViewRequest {
    pub area_id: Option<String>,
    pub geolocation: Option<GeolocationReport>,
}

#[derive(Debug, Serialize)]
pub struct GeolocationErrorResponse {
    pub reason: GeolocationFailure,
    pub message: &'static str,
    pub retryable: bool,
}

#[derive(Debug, Serialize)]
pub struct MapViewResponse {
    pub center: LatLng,
    pub zoom: u8,
    pub origin: Option<LatLng>,
    pub destination: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geolocation_error: Option<GeolocationErrorResponse>,
}

// Request de ruta entre dos puntos ya conocidos
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub origin: LatLng,
    pub destination: LatLng,
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub distance: String,
    pub duration: String,
}

impl From<RouteSummary> for RouteResponse {
    fn from(summary: RouteSummary) -> Self {
        Self {
            distance: summary.distance_text,
            duration: summary.duration_text,
        }
    }
}
