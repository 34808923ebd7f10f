use sqlx::PgPool;

use crate::models::slot::{ParkingSlot, SLOT_STATUS_AVAILABLE};
use crate::utils::errors::AppError;

pub struct SlotRepository {
    pool: PgPool,
}

impl SlotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Plazas libres de un área, la misma consulta para la carga inicial
    /// y para el control de refresco del paso 2
    pub async fn find_available(&self, area_id: &str) -> Result<Vec<ParkingSlot>, AppError> {
        let slots = sqlx::query_as::<_, ParkingSlot>(
            r#"
            SELECT slot_id, area_id, status FROM parking_slots
            WHERE area_id = $1 AND status = $2
            ORDER BY slot_id
            "#,
        )
        .bind(area_id)
        .bind(SLOT_STATUS_AVAILABLE)
        .fetch_all(&self.pool)
        .await?;

        Ok(slots)
    }

    pub async fn count_available(&self, area_id: &str) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM parking_slots WHERE area_id = $1 AND status = $2",
        )
        .bind(area_id)
        .bind(SLOT_STATUS_AVAILABLE)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    /// Cambiar el estado de una plaza. No hay verificación del estado
    /// anterior: dos flujos que reservan la misma plaza tienen éxito
    /// los dos.
    pub async fn update_status(&self, slot_id: &str, status: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE parking_slots SET status = $2 WHERE slot_id = $1")
            .bind(slot_id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
