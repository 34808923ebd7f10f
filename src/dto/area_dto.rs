use serde::Serialize;

use crate::models::area::Area;
use crate::models::slot::ParkingSlot;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

// Response de área con el conteo de plazas libres
#[derive(Debug, Serialize)]
pub struct AreaResponse {
    pub area_id: String,
    pub area_name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub available_slots: i64,
}

impl AreaResponse {
    pub fn from_area(area: Area, available_slots: i64) -> Self {
        Self {
            area_id: area.area_id,
            area_name: area.area_name,
            latitude: area.latitude,
            longitude: area.longitude,
            available_slots,
        }
    }
}

// Response de plaza con la etiqueta corta de la cuadrícula
#[derive(Debug, Serialize)]
pub struct SlotResponse {
    pub slot_id: String,
    pub area_id: String,
    pub label: String,
    pub status: Option<String>,
}

impl From<ParkingSlot> for SlotResponse {
    fn from(slot: ParkingSlot) -> Self {
        let label = slot.display_label().to_string();
        Self {
            slot_id: slot.slot_id,
            area_id: slot.area_id,
            label,
            status: slot.status,
        }
    }
}
