use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::booking::Booking;
use crate::utils::time::to_ist_display;

// Response de reserva: timestamps en UTC más su versión de presentación
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub vehicle_number: String,
    pub slot_id: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
    pub entry_time_display: String,
    pub exit_time_display: String,
    pub status: String,
    pub payment_status: String,
    pub amount_paid: Decimal,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            vehicle_number: booking.vehicle_number,
            slot_id: booking.slot_id,
            entry_time: booking.entry_time,
            exit_time: booking.exit_time,
            entry_time_display: to_ist_display(booking.entry_time),
            exit_time_display: to_ist_display(booking.exit_time),
            status: booking.status,
            payment_status: booking.payment_status,
            amount_paid: booking.amount_paid,
        }
    }
}
