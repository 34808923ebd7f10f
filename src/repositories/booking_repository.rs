use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::booking::{Booking, NewBooking, BOOKING_STATUS_BOOKED, PAYMENT_STATUS_PENDING};
use crate::utils::errors::AppError;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        let id = Uuid::new_v4();

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (id, vehicle_number, slot_id, entry_time, exit_time, status, payment_status, amount_paid, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, vehicle_number, slot_id, entry_time, exit_time, status, payment_status, amount_paid, created_at
            "#,
        )
        .bind(id)
        .bind(new_booking.vehicle_number)
        .bind(new_booking.slot_id)
        .bind(new_booking.entry_time)
        .bind(new_booking.exit_time)
        .bind(BOOKING_STATUS_BOOKED)
        .bind(PAYMENT_STATUS_PENDING)
        .bind(new_booking.amount_paid)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Reservas más recientes primero, para el listado al que navega el
    /// asistente tras el envío
    pub async fn find_recent(&self) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, vehicle_number, slot_id, entry_time, exit_time, status, payment_status, amount_paid, created_at
            FROM bookings
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }
}
