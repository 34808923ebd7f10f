//! Modelo de Area
//!
//! Un área es una ubicación de estacionamiento con nombre y coordenadas
//! opcionales. Es data de referencia de solo lectura.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::geo::LatLng;

/// Area principal - mapea exactamente a la tabla areas
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Area {
    pub area_id: String,
    pub area_name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Area {
    /// Coordenadas del área, si ambas están registradas
    pub fn coordinates(&self) -> Option<LatLng> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(LatLng { lat, lng }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_require_both_components() {
        let mut area = Area {
            area_id: "A1".to_string(),
            area_name: "Downtown Lot".to_string(),
            latitude: Some(12.97),
            longitude: None,
        };
        assert!(area.coordinates().is_none());

        area.longitude = Some(77.59);
        let coords = area.coordinates().unwrap();
        assert_eq!(coords.lat, 12.97);
        assert_eq!(coords.lng, 77.59);
    }
}
