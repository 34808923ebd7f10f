use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::map_controller::MapController;
use crate::dto::map_dto::{MapViewRequest, MapViewResponse, RouteRequest, RouteResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_map_router() -> Router<AppState> {
    Router::new()
        .route("/view", post(map_view))
        .route("/route", post(map_route))
}

/// Una credencial ausente o malformada deshabilita el widget completo:
/// ambos endpoints responden el panel de error estático
fn maps_controller(state: &AppState) -> Result<MapController, AppError> {
    let api_key = state
        .config
        .maps_api_key()
        .map_err(|reason| AppError::MapsDisabled(reason.to_string()))?;
    Ok(MapController::new(state.pool.clone(), api_key.to_string()))
}

async fn map_view(
    State(state): State<AppState>,
    Json(request): Json<MapViewRequest>,
) -> Result<Json<MapViewResponse>, AppError> {
    let controller = maps_controller(&state)?;
    let response = controller.view(request).await?;
    Ok(Json(response))
}

async fn map_route(
    State(state): State<AppState>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let controller = maps_controller(&state)?;
    let response = controller.route(request).await?;
    Ok(Json(response))
}
