use std::collections::VecDeque;
use uuid::Uuid;

use crate::dto::wizard_dto::{NoticeResponse, WizardEventRequest, WizardViewResponse};
use crate::repositories::slot_repository::SlotRepository;
use crate::services::booking_service::{submit_booking, PgParkingStore};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppResult};
use crate::wizard::{self, Effect, NoticeLevel};

/// Orquesta la máquina de estados del asistente: aplica los eventos y
/// ejecuta los comandos de efecto que la transición devuelve.
pub struct WizardController {
    state: AppState,
}

impl WizardController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Crear una sesión nueva del asistente en el paso 1
    pub async fn start(&self) -> AppResult<WizardViewResponse> {
        let (id, session) = self.state.insert_wizard_session().await;
        Ok(WizardViewResponse::from_session(id, &session, Vec::new(), None))
    }

    pub async fn view(&self, id: Uuid) -> AppResult<WizardViewResponse> {
        let session = self
            .state
            .get_wizard_session(id)
            .await
            .ok_or_else(|| not_found_error("Wizard session", &id.to_string()))?;

        Ok(WizardViewResponse::from_session(id, &session, Vec::new(), None))
    }

    /// Aplicar un evento y ejecutar sus efectos. Si un efecto de carga
    /// falla, la sesión guardada queda como estaba antes del evento y el
    /// usuario puede repetir la acción.
    pub async fn handle_event(
        &self,
        id: Uuid,
        request: WizardEventRequest,
    ) -> AppResult<WizardViewResponse> {
        let mut session = self
            .state
            .get_wizard_session(id)
            .await
            .ok_or_else(|| not_found_error("Wizard session", &id.to_string()))?;

        let event = request.into_event()?;
        let transition = wizard::apply(session.state.clone(), event);
        session.state = transition.state;

        let mut notices: Vec<NoticeResponse> = Vec::new();
        let mut redirect_to: Option<String> = None;
        let mut submitted = false;

        let mut queue: VecDeque<Effect> = transition.effects.into();
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::LoadSlots { area_id } => {
                    let slots = SlotRepository::new(self.state.pool.clone())
                        .find_available(&area_id)
                        .await?;
                    log::info!("🅿️ {} plazas disponibles en el área {}", slots.len(), area_id);
                    session.slots = slots;
                }
                Effect::Notify { level, message } => {
                    notices.push(NoticeResponse { level, message });
                }
                Effect::PersistBooking { request } => {
                    let store = PgParkingStore::new(self.state.pool.clone());
                    match submit_booking(&store, &request).await {
                        Ok(outcome) => {
                            submitted = true;
                            queue.push_back(Effect::Notify {
                                level: NoticeLevel::Success,
                                message: format!(
                                    "Booking {}! Slot {} at {}",
                                    request.mode.confirmation_word(),
                                    outcome.booking.slot_id,
                                    outcome.area_name
                                ),
                            });
                            queue.push_back(Effect::GoToBookings);
                        }
                        Err(e) => {
                            // El envío falló: la sesión sigue en el paso 5
                            // y el usuario puede reintentar. Las escrituras
                            // que alcanzaron a ejecutarse no se revierten.
                            log::error!("❌ Error creating booking: {}", e);
                            queue.push_back(Effect::Notify {
                                level: NoticeLevel::Error,
                                message: format!("Booking failed: {}", e),
                            });
                        }
                    }
                }
                Effect::GoToBookings => {
                    redirect_to = Some("/bookings".to_string());
                }
            }
        }

        if submitted {
            // El envío exitoso destruye la sesión
            self.state.remove_wizard_session(id).await;
        } else {
            self.state.store_wizard_session(id, session.clone()).await;
        }

        Ok(WizardViewResponse::from_session(
            id,
            &session,
            notices,
            redirect_to,
        ))
    }

    /// Descartar una sesión al navegar fuera del asistente
    pub async fn discard(&self, id: Uuid) -> AppResult<()> {
        self.state
            .remove_wizard_session(id)
            .await
            .ok_or_else(|| not_found_error("Wizard session", &id.to_string()))?;
        Ok(())
    }
}
