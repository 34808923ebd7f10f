use chrono::Utc;
use sqlx::PgPool;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_number(&self, vehicle_number: &str) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT vehicle_number, customer_name, contact_number, created_at FROM vehicles WHERE vehicle_number = $1",
        )
        .bind(vehicle_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Registrar un vehículo nuevo. El registro existente de una
    /// matrícula nunca se sobreescribe desde este flujo.
    pub async fn insert(
        &self,
        vehicle_number: &str,
        customer_name: &str,
        contact_number: &str,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (vehicle_number, customer_name, contact_number, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING vehicle_number, customer_name, contact_number, created_at
            "#,
        )
        .bind(vehicle_number)
        .bind(customer_name)
        .bind(contact_number)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }
}
