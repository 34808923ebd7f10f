//! Cálculo de centro y zoom del mapa
//!
//! Funciones puras: el centro es el punto medio entre el origen (la
//! ubicación del dispositivo) y el destino (el área elegida), y el zoom
//! es una función escalonada de la distancia de gran círculo entre
//! ambos.

use crate::models::geo::LatLng;

/// Centro por defecto cuando no se conoce ningún extremo
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 20.5937,
    lng: 78.9629,
};

/// Zoom por defecto cuando falta el origen o el destino
pub const DEFAULT_ZOOM: u8 = 12;

/// Radio terrestre en kilómetros para la fórmula de haversine
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distancia de gran círculo entre dos puntos, en kilómetros
pub fn haversine_km(a: LatLng, b: LatLng) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Centro del mapa según los extremos conocidos
pub fn map_center(origin: Option<LatLng>, destination: Option<LatLng>) -> LatLng {
    match (origin, destination) {
        (Some(o), Some(d)) => LatLng::new((o.lat + d.lat) / 2.0, (o.lng + d.lng) / 2.0),
        (Some(o), None) => o,
        (None, Some(d)) => d,
        (None, None) => DEFAULT_CENTER,
    }
}

/// Zoom para una distancia conocida entre origen y destino
pub fn zoom_for_distance_km(distance: f64) -> u8 {
    if distance > 100.0 {
        8
    } else if distance > 50.0 {
        9
    } else if distance > 20.0 {
        10
    } else if distance > 10.0 {
        11
    } else if distance > 5.0 {
        12
    } else if distance > 2.0 {
        13
    } else {
        14
    }
}

/// Zoom del mapa; si falta algún extremo se usa el valor por defecto
pub fn zoom_level(origin: Option<LatLng>, destination: Option<LatLng>) -> u8 {
    match (origin, destination) {
        (Some(o), Some(d)) => zoom_for_distance_km(haversine_km(o, d)),
        _ => DEFAULT_ZOOM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps() {
        assert_eq!(zoom_for_distance_km(0.0), 14);
        assert_eq!(zoom_for_distance_km(3.0), 13);
        assert_eq!(zoom_for_distance_km(6.0), 12);
        assert_eq!(zoom_for_distance_km(25.0), 10);
        assert_eq!(zoom_for_distance_km(120.0), 8);
    }

    #[test]
    fn test_zoom_defaults_when_an_endpoint_is_unknown() {
        let point = Some(LatLng::new(12.0, 77.0));
        assert_eq!(zoom_level(None, point), DEFAULT_ZOOM);
        assert_eq!(zoom_level(point, None), DEFAULT_ZOOM);
        assert_eq!(zoom_level(None, None), DEFAULT_ZOOM);
    }

    #[test]
    fn test_center_is_the_midpoint() {
        let center = map_center(
            Some(LatLng::new(12.0, 77.0)),
            Some(LatLng::new(12.0, 78.0)),
        );
        assert_eq!(center, LatLng::new(12.0, 77.5));
    }

    #[test]
    fn test_center_falls_back_to_the_known_endpoint() {
        let origin = LatLng::new(12.0, 77.0);
        assert_eq!(map_center(Some(origin), None), origin);
        assert_eq!(map_center(None, Some(origin)), origin);
        assert_eq!(map_center(None, None), DEFAULT_CENTER);
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        // Un grado de latitud mide ~111.2 km
        let a = LatLng::new(12.0, 77.0);
        let b = LatLng::new(13.0, 77.0);
        let distance = haversine_km(a, b);
        assert!((distance - 111.2).abs() < 0.5, "distance was {}", distance);
    }

    #[test]
    fn test_haversine_is_symmetric_and_zero_on_self() {
        let a = LatLng::new(12.97, 77.59);
        let b = LatLng::new(13.08, 80.27);
        assert_eq!(haversine_km(a, a), 0.0);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }
}
