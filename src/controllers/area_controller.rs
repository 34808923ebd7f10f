use futures::future::join_all;
use sqlx::PgPool;

use crate::dto::area_dto::{AreaResponse, SlotResponse};
use crate::repositories::area_repository::AreaRepository;
use crate::repositories::slot_repository::SlotRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct AreaController {
    areas: AreaRepository,
    slots: SlotRepository,
}

impl AreaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            areas: AreaRepository::new(pool.clone()),
            slots: SlotRepository::new(pool),
        }
    }

    /// Listar todas las áreas con su conteo de plazas libres
    pub async fn list(&self) -> AppResult<Vec<AreaResponse>> {
        let areas = self.areas.find_all().await?;

        // Conteo de plazas libres por área, en paralelo
        let counts = join_all(
            areas
                .iter()
                .map(|area| self.slots.count_available(&area.area_id)),
        )
        .await;

        let mut response = Vec::with_capacity(areas.len());
        for (area, count) in areas.into_iter().zip(counts) {
            response.push(AreaResponse::from_area(area, count?));
        }

        log::info!("🏢 {} áreas cargadas", response.len());
        Ok(response)
    }

    pub async fn get_by_id(&self, area_id: &str) -> AppResult<AreaResponse> {
        let area = self
            .areas
            .find_by_id(area_id)
            .await?
            .ok_or_else(|| not_found_error("Area", area_id))?;

        let count = self.slots.count_available(&area.area_id).await?;
        Ok(AreaResponse::from_area(area, count))
    }

    /// Plazas libres de un área: la misma consulta sirve para la carga
    /// inicial del paso 2 y para el control de refresco
    pub async fn list_available_slots(&self, area_id: &str) -> AppResult<Vec<SlotResponse>> {
        let slots = self.slots.find_available(area_id).await?;
        log::info!("🅿️ {} plazas disponibles en el área {}", slots.len(), area_id);
        Ok(slots.into_iter().map(SlotResponse::from).collect())
    }
}
