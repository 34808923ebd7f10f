use sqlx::PgPool;

use crate::dto::booking_dto::BookingResponse;
use crate::repositories::booking_repository::BookingRepository;
use crate::utils::errors::AppResult;

pub struct BookingController {
    bookings: BookingRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            bookings: BookingRepository::new(pool),
        }
    }

    /// Listado de reservas, las más recientes primero
    pub async fn list(&self) -> AppResult<Vec<BookingResponse>> {
        let bookings = self.bookings.find_recent().await?;
        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }
}
