use sqlx::PgPool;

use crate::dto::map_dto::{
    GeolocationErrorResponse, GeolocationReport, MapViewRequest, MapViewResponse, RouteRequest,
    RouteResponse,
};
use crate::models::geo::LatLng;
use crate::repositories::area_repository::AreaRepository;
use crate::services::directions_service::DirectionsService;
use crate::services::map_view_service::{map_center, zoom_level};
use crate::utils::errors::{validation_error, AppError, AppResult};
use crate::utils::validation::validate_coordinates;

pub struct MapController {
    areas: AreaRepository,
    api_key: String,
}

impl MapController {
    pub fn new(pool: PgPool, api_key: String) -> Self {
        Self {
            areas: AreaRepository::new(pool),
            api_key,
        }
    }

    /// Centro y zoom del mapa para el área elegida y la geolocalización
    /// reportada por el cliente
    pub async fn view(&self, request: MapViewRequest) -> AppResult<MapViewResponse> {
        // El destino existe recién cuando el área elegida tiene
        // coordenadas registradas
        let destination = match &request.area_id {
            Some(area_id) => self
                .areas
                .find_by_id(area_id)
                .await?
                .and_then(|area| area.coordinates()),
            None => None,
        };

        let (origin, geolocation_error) = match request.geolocation {
            Some(GeolocationReport::Position { lat, lng }) => {
                validate_coordinates(lat, lng)
                    .map_err(|_| validation_error("geolocation", "coordinates out of range"))?;
                (Some(LatLng::new(lat, lng)), None)
            }
            Some(GeolocationReport::Failure { reason }) => {
                log::warn!("📍 Geolocalización fallida: {:?}", reason);
                (
                    None,
                    Some(GeolocationErrorResponse {
                        reason,
                        message: reason.message(),
                        retryable: reason.is_retryable(),
                    }),
                )
            }
            None => (None, None),
        };

        Ok(MapViewResponse {
            center: map_center(origin, destination),
            zoom: zoom_level(origin, destination),
            origin,
            destination,
            geolocation_error,
        })
    }

    /// Ruta en auto entre el origen y el destino vía el proveedor
    pub async fn route(&self, request: RouteRequest) -> AppResult<RouteResponse> {
        validate_coordinates(request.origin.lat, request.origin.lng)
            .map_err(|_| validation_error("origin", "coordinates out of range"))?;
        validate_coordinates(request.destination.lat, request.destination.lng)
            .map_err(|_| validation_error("destination", "coordinates out of range"))?;

        let service = DirectionsService::new(self.api_key.clone());
        let summary = service
            .driving_route(request.origin, request.destination)
            .await
            .map_err(|e| {
                log::error!("❌ Error calculating route: {}", e);
                AppError::ExternalApi(e.to_string())
            })?;

        Ok(RouteResponse::from(summary))
    }
}
