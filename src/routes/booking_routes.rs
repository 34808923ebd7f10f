use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::BookingResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new().route("/", get(list_bookings))
}

async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
