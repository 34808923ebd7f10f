use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::area_dto::SlotResponse;
use crate::state::WizardSession;
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::time::to_ist_display;
use crate::utils::validation::{validate_datetime, validate_not_empty, validate_positive};
use crate::wizard::{BookingMode, NoticeLevel, WizardEvent, DURATION_OPTIONS_MINUTES};

/// Evento del asistente tal como llega por HTTP. Las fechas viajan como
/// strings RFC3339 y se validan antes de construir el evento interno.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardEventRequest {
    SelectArea { area_id: String },
    SelectSlot { slot_id: String },
    SetEntryTime { entry_time: String },
    SetExitTime { exit_time: String },
    ChooseDuration { minutes: i64 },
    SetBookingMode { mode: BookingMode },
    SetVehicleNumber { value: String },
    SetCustomerName { value: String },
    SetContactNumber { value: String },
    Next,
    Back,
    RefreshSlots,
    Submit,
}

impl WizardEventRequest {
    pub fn into_event(self) -> AppResult<WizardEvent> {
        match self {
            WizardEventRequest::SelectArea { area_id } => {
                validate_not_empty(&area_id)
                    .map_err(|_| validation_error("area_id", "must not be empty"))?;
                Ok(WizardEvent::SelectArea { area_id })
            }
            WizardEventRequest::SelectSlot { slot_id } => {
                validate_not_empty(&slot_id)
                    .map_err(|_| validation_error("slot_id", "must not be empty"))?;
                Ok(WizardEvent::SelectSlot { slot_id })
            }
            WizardEventRequest::SetEntryTime { entry_time } => {
                let entry_time = validate_datetime(&entry_time)
                    .map_err(|_| validation_error("entry_time", "must be an RFC3339 datetime"))?;
                Ok(WizardEvent::SetEntryTime { entry_time })
            }
            WizardEventRequest::SetExitTime { exit_time } => {
                let exit_time = validate_datetime(&exit_time)
                    .map_err(|_| validation_error("exit_time", "must be an RFC3339 datetime"))?;
                Ok(WizardEvent::SetExitTime { exit_time })
            }
            WizardEventRequest::ChooseDuration { minutes } => {
                validate_positive(minutes)
                    .map_err(|_| validation_error("minutes", "must be a positive number"))?;
                // Solo se aceptan las duraciones del selector
                if !DURATION_OPTIONS_MINUTES.contains(&minutes) {
                    return Err(validation_error("minutes", "is not an offered duration"));
                }
                Ok(WizardEvent::ChooseDuration { minutes })
            }
            WizardEventRequest::SetBookingMode { mode } => {
                Ok(WizardEvent::SetBookingMode { mode })
            }
            WizardEventRequest::SetVehicleNumber { value } => {
                Ok(WizardEvent::SetVehicleNumber { value })
            }
            WizardEventRequest::SetCustomerName { value } => {
                Ok(WizardEvent::SetCustomerName { value })
            }
            WizardEventRequest::SetContactNumber { value } => {
                Ok(WizardEvent::SetContactNumber { value })
            }
            WizardEventRequest::Next => Ok(WizardEvent::Next),
            WizardEventRequest::Back => Ok(WizardEvent::Back),
            WizardEventRequest::RefreshSlots => Ok(WizardEvent::RefreshSlots),
            WizardEventRequest::Submit => Ok(WizardEvent::Submit),
        }
    }
}

/// Notificación transitoria producida al aplicar un evento
#[derive(Debug, Serialize)]
pub struct NoticeResponse {
    pub level: NoticeLevel,
    pub message: String,
}

/// Vista del asistente que el cliente renderiza después de cada evento
#[derive(Debug, Serialize)]
pub struct WizardViewResponse {
    pub session_id: Uuid,
    pub step: u8,
    pub step_title: &'static str,
    pub area_id: Option<String>,
    pub slot_id: Option<String>,
    pub entry_time: Option<DateTime<Utc>>,
    pub exit_time: Option<DateTime<Utc>>,
    pub entry_time_display: Option<String>,
    pub exit_time_display: Option<String>,
    pub duration_minutes: Option<i64>,
    pub booking_mode: BookingMode,
    pub booking_cost: Option<i64>,
    pub vehicle_number: Option<String>,
    pub customer_name: Option<String>,
    pub contact_number: Option<String>,
    pub slots: Vec<SlotResponse>,
    pub notices: Vec<NoticeResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
}

impl WizardViewResponse {
    pub fn from_session(
        session_id: Uuid,
        session: &WizardSession,
        notices: Vec<NoticeResponse>,
        redirect_to: Option<String>,
    ) -> Self {
        let state = &session.state;
        Self {
            session_id,
            step: state.step(),
            step_title: state.step_title(),
            area_id: state.area_id().map(|s| s.to_string()),
            slot_id: state.slot_id().map(|s| s.to_string()),
            entry_time: state.entry_time(),
            exit_time: state.exit_time(),
            entry_time_display: state.entry_time().map(to_ist_display),
            exit_time_display: state.exit_time().map(to_ist_display),
            duration_minutes: state.duration_minutes(),
            booking_mode: state.booking_mode(),
            booking_cost: state.booking_cost(),
            vehicle_number: state.vehicle_number().map(|s| s.to_string()),
            customer_name: state.customer_name().map(|s| s.to_string()),
            contact_number: state.contact_number().map(|s| s.to_string()),
            slots: session
                .slots
                .iter()
                .cloned()
                .map(SlotResponse::from)
                .collect(),
            notices,
            redirect_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    #[test]
    fn test_event_request_deserializes_from_json() {
        let event: WizardEventRequest =
            serde_json::from_str(r#"{ "type": "select_area", "area_id": "A1" }"#).unwrap();
        assert!(matches!(
            event.into_event().unwrap(),
            WizardEvent::SelectArea { .. }
        ));

        let event: WizardEventRequest = serde_json::from_str(r#"{ "type": "next" }"#).unwrap();
        assert!(matches!(event.into_event().unwrap(), WizardEvent::Next));
    }

    #[test]
    fn test_empty_area_id_is_rejected() {
        let event = WizardEventRequest::SelectArea {
            area_id: "  ".to_string(),
        };
        assert!(matches!(event.into_event(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_bad_datetime_is_rejected() {
        let event = WizardEventRequest::SetEntryTime {
            entry_time: "tomorrow at noon".to_string(),
        };
        assert!(matches!(event.into_event(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_entry_time_parses_rfc3339() {
        let event = WizardEventRequest::SetEntryTime {
            entry_time: "2024-01-01T10:00:00Z".to_string(),
        };
        match event.into_event().unwrap() {
            WizardEvent::SetEntryTime { entry_time } => {
                assert_eq!(entry_time.to_rfc3339(), "2024-01-01T10:00:00+00:00");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_duration_must_come_from_the_menu() {
        let event = WizardEventRequest::ChooseDuration { minutes: 45 };
        assert!(matches!(event.into_event(), Err(AppError::Validation(_))));

        let event = WizardEventRequest::ChooseDuration { minutes: 60 };
        assert!(matches!(
            event.into_event().unwrap(),
            WizardEvent::ChooseDuration { minutes: 60 }
        ));
    }

    #[test]
    fn test_non_positive_duration_is_rejected() {
        let event = WizardEventRequest::ChooseDuration { minutes: 0 };
        assert!(matches!(event.into_event(), Err(AppError::Validation(_))));

        let event = WizardEventRequest::ChooseDuration { minutes: -30 };
        assert!(matches!(event.into_event(), Err(AppError::Validation(_))));
    }
}
