//! Modelo de Vehicle
//!
//! La clave natural es la matrícula: el registro se crea una sola vez y
//! este flujo nunca lo actualiza después.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub vehicle_number: String,
    pub customer_name: String,
    pub contact_number: String,
    pub created_at: DateTime<Utc>,
}
