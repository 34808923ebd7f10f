use sqlx::PgPool;

use crate::models::area::Area;
use crate::utils::errors::AppError;

pub struct AreaRepository {
    pool: PgPool,
}

impl AreaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listar todas las áreas (data de referencia, solo lectura)
    pub async fn find_all(&self) -> Result<Vec<Area>, AppError> {
        let areas = sqlx::query_as::<_, Area>(
            "SELECT area_id, area_name, latitude, longitude FROM areas ORDER BY area_name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(areas)
    }

    pub async fn find_by_id(&self, area_id: &str) -> Result<Option<Area>, AppError> {
        let area = sqlx::query_as::<_, Area>(
            "SELECT area_id, area_name, latitude, longitude FROM areas WHERE area_id = $1",
        )
        .bind(area_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(area)
    }
}
