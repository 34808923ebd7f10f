use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::area_controller::AreaController;
use crate::dto::area_dto::{AreaResponse, SlotResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_area_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_areas))
        .route("/:id", get(get_area))
        .route("/:id/slots", get(list_area_slots))
}

async fn list_areas(State(state): State<AppState>) -> Result<Json<Vec<AreaResponse>>, AppError> {
    let controller = AreaController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_area(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AreaResponse>, AppError> {
    let controller = AreaController::new(state.pool.clone());
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn list_area_slots(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    let controller = AreaController::new(state.pool.clone());
    let response = controller.list_available_slots(&id).await?;
    Ok(Json(response))
}
