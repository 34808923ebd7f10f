//! Modelo de ParkingSlot
//!
//! Una plaza pertenece exactamente a un área; su estado se muta al
//! reservar. El flujo no maneja la transición inversa (cancelación).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado de una plaza libre para reservar
pub const SLOT_STATUS_AVAILABLE: &str = "available";

/// Estado de una plaza ya reservada
pub const SLOT_STATUS_BOOKED: &str = "booked";

/// ParkingSlot principal - mapea exactamente a la tabla parking_slots
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ParkingSlot {
    pub slot_id: String,
    pub area_id: String,
    pub status: Option<String>,
}

impl ParkingSlot {
    /// Etiqueta corta mostrada en la cuadrícula de plazas: el segmento
    /// después del último guion del id ("A1-03" -> "03")
    pub fn display_label(&self) -> &str {
        self.slot_id
            .rsplit('-')
            .next()
            .unwrap_or(self.slot_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str) -> ParkingSlot {
        ParkingSlot {
            slot_id: id.to_string(),
            area_id: "A1".to_string(),
            status: Some(SLOT_STATUS_AVAILABLE.to_string()),
        }
    }

    #[test]
    fn test_display_label_takes_last_segment() {
        assert_eq!(slot("A1-03").display_label(), "03");
        assert_eq!(slot("LOT-B-12").display_label(), "12");
    }

    #[test]
    fn test_display_label_without_dash_is_the_id() {
        assert_eq!(slot("7").display_label(), "7");
    }
}
