use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::wizard_controller::WizardController;
use crate::dto::area_dto::ApiResponse;
use crate::dto::wizard_dto::{WizardEventRequest, WizardViewResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_wizard_router() -> Router<AppState> {
    Router::new()
        .route("/", post(start_wizard))
        .route("/:id", get(get_wizard))
        .route("/:id", delete(discard_wizard))
        .route("/:id/events", post(apply_wizard_event))
}

async fn start_wizard(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<WizardViewResponse>>, AppError> {
    let controller = WizardController::new(state);
    let view = controller.start().await?;
    Ok(Json(ApiResponse::success(view)))
}

async fn get_wizard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardViewResponse>, AppError> {
    let controller = WizardController::new(state);
    let view = controller.view(id).await?;
    Ok(Json(view))
}

async fn apply_wizard_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<WizardEventRequest>,
) -> Result<Json<WizardViewResponse>, AppError> {
    let controller = WizardController::new(state);
    let view = controller.handle_event(id, request).await?;
    Ok(Json(view))
}

async fn discard_wizard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = WizardController::new(state);
    controller.discard(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Wizard session discarded"
    })))
}
