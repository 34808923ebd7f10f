//! Modelo de Booking
//!
//! Una reserva enlaza una plaza, una ventana de tiempo y el estado de
//! pago. Los timestamps se guardan en UTC; la conversión a la zona de
//! presentación ocurre recién en los DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado inicial de una reserva recién creada
pub const BOOKING_STATUS_BOOKED: &str = "booked";

/// Estado de pago inicial: se paga en el lugar
pub const PAYMENT_STATUS_PENDING: &str = "pending";

/// Booking principal - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub vehicle_number: String,
    pub slot_id: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
    pub status: String,
    pub payment_status: String,
    pub amount_paid: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Datos para insertar una reserva nueva
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub vehicle_number: String,
    pub slot_id: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
    pub amount_paid: Decimal,
}
