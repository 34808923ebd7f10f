//! Máquina de estados del asistente de reserva
//!
//! Este módulo modela el flujo de reserva de cinco pasos
//! (Área → Plaza → Horario → Datos → Confirmación) como un enum con una
//! función de transición total. Los efectos secundarios (cargar plazas,
//! notificar al usuario, persistir la reserva) se devuelven como comandos
//! explícitos en lugar de ejecutarse dentro de la transición.

pub mod cost;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use self::cost::booking_cost;

/// Modalidad de la reserva elegida en el paso 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingMode {
    Immediate,
    Reserve,
}

impl Default for BookingMode {
    fn default() -> Self {
        BookingMode::Immediate
    }
}

impl BookingMode {
    /// Palabra usada en la notificación de éxito
    pub fn confirmation_word(&self) -> &'static str {
        match self {
            BookingMode::Immediate => "confirmed",
            BookingMode::Reserve => "reserved",
        }
    }
}

/// Duraciones ofrecidas en el selector del paso 3, en minutos
pub const DURATION_OPTIONS_MINUTES: [i64; 11] =
    [2, 5, 30, 60, 90, 120, 180, 240, 360, 720, 1440];

/// Selecciones de horario todavía incompletas (paso 3)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeDraft {
    pub entry_time: Option<DateTime<Utc>>,
    pub exit_time: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i64>,
    pub mode: BookingMode,
}

/// Ventana de tiempo ya validada: la salida es estrictamente posterior
/// a la entrada
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    entry_time: DateTime<Utc>,
    exit_time: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(entry_time: DateTime<Utc>, exit_time: DateTime<Utc>) -> Option<Self> {
        if exit_time > entry_time {
            Some(Self {
                entry_time,
                exit_time,
            })
        } else {
            None
        }
    }

    pub fn entry_time(&self) -> DateTime<Utc> {
        self.entry_time
    }

    pub fn exit_time(&self) -> DateTime<Utc> {
        self.exit_time
    }

    pub fn cost(&self) -> i64 {
        booking_cost(self.entry_time, self.exit_time)
    }
}

/// Campos de contacto del paso 4, sin validar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailsDraft {
    pub vehicle_number: String,
    pub customer_name: String,
    pub contact_number: String,
}

impl DetailsDraft {
    /// Recorta los tres campos y devuelve los datos validados,
    /// o None si alguno queda vacío
    pub fn validate(&self) -> Option<ContactDetails> {
        let vehicle_number = self.vehicle_number.trim();
        let customer_name = self.customer_name.trim();
        let contact_number = self.contact_number.trim();

        if vehicle_number.is_empty() || customer_name.is_empty() || contact_number.is_empty() {
            return None;
        }

        Some(ContactDetails {
            vehicle_number: vehicle_number.to_string(),
            customer_name: customer_name.to_string(),
            contact_number: contact_number.to_string(),
        })
    }
}

/// Datos de contacto ya validados (no vacíos, recortados)
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDetails {
    pub vehicle_number: String,
    pub customer_name: String,
    pub contact_number: String,
}

impl ContactDetails {
    fn as_draft(&self) -> DetailsDraft {
        DetailsDraft {
            vehicle_number: self.vehicle_number.clone(),
            customer_name: self.customer_name.clone(),
            contact_number: self.contact_number.clone(),
        }
    }
}

/// Estado del asistente. Cada variante lleva únicamente las selecciones
/// que ya fueron validadas, así que los estados ilegales (por ejemplo
/// llegar a la confirmación sin plaza) no son representables.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardState {
    SelectingArea {
        area_id: Option<String>,
    },
    SelectingSlot {
        area_id: String,
        slot_id: Option<String>,
    },
    SelectingTime {
        area_id: String,
        slot_id: String,
        draft: TimeDraft,
    },
    EnteringDetails {
        area_id: String,
        slot_id: String,
        window: TimeWindow,
        mode: BookingMode,
        draft: DetailsDraft,
    },
    Confirming {
        area_id: String,
        slot_id: String,
        window: TimeWindow,
        mode: BookingMode,
        details: ContactDetails,
    },
}

impl WizardState {
    pub fn initial() -> Self {
        WizardState::SelectingArea { area_id: None }
    }

    /// Número de paso visible (1..=5)
    pub fn step(&self) -> u8 {
        match self {
            WizardState::SelectingArea { .. } => 1,
            WizardState::SelectingSlot { .. } => 2,
            WizardState::SelectingTime { .. } => 3,
            WizardState::EnteringDetails { .. } => 4,
            WizardState::Confirming { .. } => 5,
        }
    }

    pub fn step_title(&self) -> &'static str {
        match self {
            WizardState::SelectingArea { .. } => "Select Area",
            WizardState::SelectingSlot { .. } => "Choose Slot",
            WizardState::SelectingTime { .. } => "Set Time",
            WizardState::EnteringDetails { .. } => "Enter Details",
            WizardState::Confirming { .. } => "Confirm",
        }
    }

    pub fn area_id(&self) -> Option<&str> {
        match self {
            WizardState::SelectingArea { area_id } => area_id.as_deref(),
            WizardState::SelectingSlot { area_id, .. }
            | WizardState::SelectingTime { area_id, .. }
            | WizardState::EnteringDetails { area_id, .. }
            | WizardState::Confirming { area_id, .. } => Some(area_id),
        }
    }

    pub fn slot_id(&self) -> Option<&str> {
        match self {
            WizardState::SelectingArea { .. } => None,
            WizardState::SelectingSlot { slot_id, .. } => slot_id.as_deref(),
            WizardState::SelectingTime { slot_id, .. }
            | WizardState::EnteringDetails { slot_id, .. }
            | WizardState::Confirming { slot_id, .. } => Some(slot_id),
        }
    }

    pub fn entry_time(&self) -> Option<DateTime<Utc>> {
        match self {
            WizardState::SelectingTime { draft, .. } => draft.entry_time,
            WizardState::EnteringDetails { window, .. }
            | WizardState::Confirming { window, .. } => Some(window.entry_time()),
            _ => None,
        }
    }

    pub fn exit_time(&self) -> Option<DateTime<Utc>> {
        match self {
            WizardState::SelectingTime { draft, .. } => draft.exit_time,
            WizardState::EnteringDetails { window, .. }
            | WizardState::Confirming { window, .. } => Some(window.exit_time()),
            _ => None,
        }
    }

    pub fn booking_mode(&self) -> BookingMode {
        match self {
            WizardState::SelectingTime { draft, .. } => draft.mode,
            WizardState::EnteringDetails { mode, .. }
            | WizardState::Confirming { mode, .. } => *mode,
            _ => BookingMode::default(),
        }
    }

    /// Costo derivado: se recalcula cada vez que cambian la entrada o la
    /// salida, como `ceil(horas) * tarifa`
    pub fn booking_cost(&self) -> Option<i64> {
        match (self.entry_time(), self.exit_time()) {
            (Some(entry), Some(exit)) => Some(booking_cost(entry, exit)),
            _ => None,
        }
    }

    pub fn duration_minutes(&self) -> Option<i64> {
        match self {
            WizardState::SelectingTime { draft, .. } => draft.duration_minutes,
            _ => None,
        }
    }

    pub fn vehicle_number(&self) -> Option<&str> {
        match self {
            WizardState::EnteringDetails { draft, .. } => Some(&draft.vehicle_number),
            WizardState::Confirming { details, .. } => Some(&details.vehicle_number),
            _ => None,
        }
    }

    pub fn customer_name(&self) -> Option<&str> {
        match self {
            WizardState::EnteringDetails { draft, .. } => Some(&draft.customer_name),
            WizardState::Confirming { details, .. } => Some(&details.customer_name),
            _ => None,
        }
    }

    pub fn contact_number(&self) -> Option<&str> {
        match self {
            WizardState::EnteringDetails { draft, .. } => Some(&draft.contact_number),
            WizardState::Confirming { details, .. } => Some(&details.contact_number),
            _ => None,
        }
    }
}

/// Eventos que el asistente acepta
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    SelectArea { area_id: String },
    SelectSlot { slot_id: String },
    SetEntryTime { entry_time: DateTime<Utc> },
    SetExitTime { exit_time: DateTime<Utc> },
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

/// Nivel de una notificación transitoria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Datos completos listos para la secuencia de persistencia
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub area_id: String,
    pub slot_id: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
    pub mode: BookingMode,
    pub vehicle_number: String,
    pub customer_name: String,
    pub contact_number: String,
    pub amount: i64,
}

/// Comandos que la transición devuelve para que el intérprete los ejecute
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Cargar las plazas disponibles del área (al entrar al paso 2 y al
    /// refrescar). La plaza seleccionada anteriormente queda descartada.
    LoadSlots { area_id: String },
    /// Mostrar una notificación transitoria al usuario
    Notify { level: NoticeLevel, message: String },
    /// Ejecutar la secuencia de escrituras de la reserva
    PersistBooking { request: BookingRequest },
    /// Navegar al listado de reservas tras el éxito
    GoToBookings,
}

/// Resultado de aplicar un evento: el siguiente estado más sus efectos
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: WizardState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(state: WizardState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn with(state: WizardState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }

    /// Guarda violada: el estado no cambia y se emite un aviso de error
    fn rejected(state: WizardState, message: impl Into<String>) -> Self {
        Self {
            state,
            effects: vec![Effect::Notify {
                level: NoticeLevel::Error,
                message: message.into(),
            }],
        }
    }
}

/// Función de transición total del asistente
pub fn apply(state: WizardState, event: WizardEvent) -> Transition {
    use WizardEvent::*;

    match (state, event) {
        // Paso 1: selección de área
        (WizardState::SelectingArea { .. }, SelectArea { area_id }) => {
            Transition::to(WizardState::SelectingArea {
                area_id: Some(area_id),
            })
        }
        (state @ WizardState::SelectingArea { area_id: None }, Next) => {
            Transition::rejected(state, "Please select an area")
        }
        (WizardState::SelectingArea { area_id: Some(area_id) }, Next) => Transition::with(
            WizardState::SelectingSlot {
                area_id: area_id.clone(),
                slot_id: None,
            },
            vec![Effect::LoadSlots { area_id }],
        ),

        // Paso 2: selección de plaza
        (WizardState::SelectingSlot { area_id, .. }, SelectSlot { slot_id }) => {
            Transition::to(WizardState::SelectingSlot {
                area_id,
                slot_id: Some(slot_id),
            })
        }
        (WizardState::SelectingSlot { area_id, .. }, RefreshSlots) => Transition::with(
            WizardState::SelectingSlot {
                area_id: area_id.clone(),
                slot_id: None,
            },
            vec![Effect::LoadSlots { area_id }],
        ),
        (state @ WizardState::SelectingSlot { slot_id: None, .. }, Next) => {
            Transition::rejected(state, "Please select a slot")
        }
        (
            WizardState::SelectingSlot {
                area_id,
                slot_id: Some(slot_id),
            },
            Next,
        ) => Transition::to(WizardState::SelectingTime {
            area_id,
            slot_id,
            draft: TimeDraft::default(),
        }),
        (WizardState::SelectingSlot { area_id, .. }, Back) => {
            Transition::to(WizardState::SelectingArea {
                area_id: Some(area_id),
            })
        }

        // Paso 3: horario y modalidad
        (
            WizardState::SelectingTime {
                area_id,
                slot_id,
                mut draft,
            },
            SetEntryTime { entry_time },
        ) => {
            draft.entry_time = Some(entry_time);
            Transition::to(WizardState::SelectingTime {
                area_id,
                slot_id,
                draft,
            })
        }
        (
            WizardState::SelectingTime {
                area_id,
                slot_id,
                mut draft,
            },
            SetExitTime { exit_time },
        ) => {
            // Una salida explícita descarta la duración elegida
            draft.exit_time = Some(exit_time);
            draft.duration_minutes = None;
            Transition::to(WizardState::SelectingTime {
                area_id,
                slot_id,
                draft,
            })
        }
        (
            WizardState::SelectingTime {
                area_id,
                slot_id,
                mut draft,
            },
            ChooseDuration { minutes },
        ) => match draft.entry_time {
            Some(entry) => {
                draft.exit_time = Some(entry + Duration::minutes(minutes));
                draft.duration_minutes = Some(minutes);
                Transition::to(WizardState::SelectingTime {
                    area_id,
                    slot_id,
                    draft,
                })
            }
            None => Transition::rejected(
                WizardState::SelectingTime {
                    area_id,
                    slot_id,
                    draft,
                },
                "Please select entry date and time first",
            ),
        },
        (
            WizardState::SelectingTime {
                area_id,
                slot_id,
                mut draft,
            },
            SetBookingMode { mode },
        ) => {
            draft.mode = mode;
            Transition::to(WizardState::SelectingTime {
                area_id,
                slot_id,
                draft,
            })
        }
        (
            WizardState::SelectingTime {
                area_id,
                slot_id,
                draft,
            },
            Next,
        ) => match (draft.entry_time, draft.exit_time) {
            (None, _) => Transition::rejected(
                WizardState::SelectingTime {
                    area_id,
                    slot_id,
                    draft,
                },
                "Please select entry date and time",
            ),
            (_, None) => Transition::rejected(
                WizardState::SelectingTime {
                    area_id,
                    slot_id,
                    draft,
                },
                "Please select exit date and time",
            ),
            (Some(entry), Some(exit)) => match TimeWindow::new(entry, exit) {
                Some(window) => Transition::to(WizardState::EnteringDetails {
                    area_id,
                    slot_id,
                    window,
                    mode: draft.mode,
                    draft: DetailsDraft::default(),
                }),
                None => Transition::rejected(
                    WizardState::SelectingTime {
                        area_id,
                        slot_id,
                        draft,
                    },
                    "Exit time must be after entry time",
                ),
            },
        },
        (
            WizardState::SelectingTime {
                area_id, slot_id, ..
            },
            Back,
        ) => Transition::to(WizardState::SelectingSlot {
            area_id,
            slot_id: Some(slot_id),
        }),

        // Paso 4: datos de contacto
        (
            WizardState::EnteringDetails {
                area_id,
                slot_id,
                window,
                mode,
                mut draft,
            },
            SetVehicleNumber { value },
        ) => {
            draft.vehicle_number = value;
            Transition::to(WizardState::EnteringDetails {
                area_id,
                slot_id,
                window,
                mode,
                draft,
            })
        }
        (
            WizardState::EnteringDetails {
                area_id,
                slot_id,
                window,
                mode,
                mut draft,
            },
            SetCustomerName { value },
        ) => {
            draft.customer_name = value;
            Transition::to(WizardState::EnteringDetails {
                area_id,
                slot_id,
                window,
                mode,
                draft,
            })
        }
        (
            WizardState::EnteringDetails {
                area_id,
                slot_id,
                window,
                mode,
                mut draft,
            },
            SetContactNumber { value },
        ) => {
            draft.contact_number = value;
            Transition::to(WizardState::EnteringDetails {
                area_id,
                slot_id,
                window,
                mode,
                draft,
            })
        }
        (
            WizardState::EnteringDetails {
                area_id,
                slot_id,
                window,
                mode,
                draft,
            },
            Next,
        ) => match draft.validate() {
            Some(details) => Transition::to(WizardState::Confirming {
                area_id,
                slot_id,
                window,
                mode,
                details,
            }),
            None => Transition::rejected(
                WizardState::EnteringDetails {
                    area_id,
                    slot_id,
                    window,
                    mode,
                    draft,
                },
                "Please fill in all required fields",
            ),
        },
        (
            WizardState::EnteringDetails {
                area_id,
                slot_id,
                window,
                mode,
                ..
            },
            Back,
        ) => Transition::to(WizardState::SelectingTime {
            area_id,
            slot_id,
            draft: TimeDraft {
                entry_time: Some(window.entry_time()),
                exit_time: Some(window.exit_time()),
                duration_minutes: None,
                mode,
            },
        }),

        // Paso 5: confirmación
        (
            WizardState::Confirming {
                area_id,
                slot_id,
                window,
                mode,
                details,
            },
            Submit,
        ) => {
            // Revalidación defensiva de los campos del paso 4 antes de
            // emitir la secuencia de escrituras
            match details.as_draft().validate() {
                Some(valid) => {
                    let request = BookingRequest {
                        area_id: area_id.clone(),
                        slot_id: slot_id.clone(),
                        entry_time: window.entry_time(),
                        exit_time: window.exit_time(),
                        mode,
                        vehicle_number: valid.vehicle_number,
                        customer_name: valid.customer_name,
                        contact_number: valid.contact_number,
                        amount: window.cost(),
                    };
                    Transition::with(
                        WizardState::Confirming {
                            area_id,
                            slot_id,
                            window,
                            mode,
                            details,
                        },
                        vec![Effect::PersistBooking { request }],
                    )
                }
                None => Transition::rejected(
                    WizardState::Confirming {
                        area_id,
                        slot_id,
                        window,
                        mode,
                        details,
                    },
                    "Please fill in all required fields",
                ),
            }
        }
        (
            WizardState::Confirming {
                area_id,
                slot_id,
                window,
                mode,
                details,
            },
            Back,
        ) => Transition::to(WizardState::EnteringDetails {
            area_id,
            slot_id,
            window,
            mode,
            draft: details.as_draft(),
        }),

        // Cualquier otro par (estado, evento) no cambia nada
        (state, _) => Transition::rejected(state, "This action is not available at this step"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, h, m, 0).unwrap()
    }

    fn error_message(transition: &Transition) -> Option<&str> {
        transition.effects.iter().find_map(|e| match e {
            Effect::Notify {
                level: NoticeLevel::Error,
                message,
            } => Some(message.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_next_without_area_is_rejected() {
        let state = WizardState::initial();
        let t = apply(state.clone(), WizardEvent::Next);
        assert_eq!(t.state, state);
        assert!(error_message(&t).is_some());
    }

    #[test]
    fn test_next_with_area_loads_slots() {
        let state = apply(
            WizardState::initial(),
            WizardEvent::SelectArea {
                area_id: "A1".to_string(),
            },
        )
        .state;
        let t = apply(state, WizardEvent::Next);
        assert_eq!(t.state.step(), 2);
        assert_eq!(
            t.effects,
            vec![Effect::LoadSlots {
                area_id: "A1".to_string()
            }]
        );
    }

    #[test]
    fn test_next_without_slot_is_rejected() {
        let state = WizardState::SelectingSlot {
            area_id: "A1".to_string(),
            slot_id: None,
        };
        let t = apply(state.clone(), WizardEvent::Next);
        assert_eq!(t.state, state);
        assert!(error_message(&t).is_some());
    }

    #[test]
    fn test_refresh_clears_selected_slot_and_reloads() {
        let state = WizardState::SelectingSlot {
            area_id: "A1".to_string(),
            slot_id: Some("A1-03".to_string()),
        };
        let t = apply(state, WizardEvent::RefreshSlots);
        assert_eq!(
            t.state,
            WizardState::SelectingSlot {
                area_id: "A1".to_string(),
                slot_id: None,
            }
        );
        assert_eq!(
            t.effects,
            vec![Effect::LoadSlots {
                area_id: "A1".to_string()
            }]
        );
        // Refrescar no cambia de paso
        assert_eq!(t.state.step(), 2);
    }

    #[test]
    fn test_exit_must_be_after_entry() {
        let base = WizardState::SelectingTime {
            area_id: "A1".to_string(),
            slot_id: "A1-03".to_string(),
            draft: TimeDraft {
                entry_time: Some(utc(10, 0)),
                exit_time: Some(utc(10, 0)),
                duration_minutes: None,
                mode: BookingMode::Immediate,
            },
        };
        // Salida igual a la entrada: rechazado
        let t = apply(base.clone(), WizardEvent::Next);
        assert_eq!(t.state, base);
        assert_eq!(error_message(&t), Some("Exit time must be after entry time"));

        // Salida anterior a la entrada: rechazado
        let earlier = apply(
            base,
            WizardEvent::SetExitTime {
                exit_time: utc(9, 0),
            },
        )
        .state;
        let t = apply(earlier, WizardEvent::Next);
        assert_eq!(t.state.step(), 3);
        assert!(error_message(&t).is_some());
    }

    #[test]
    fn test_missing_times_are_rejected() {
        let state = WizardState::SelectingTime {
            area_id: "A1".to_string(),
            slot_id: "A1-03".to_string(),
            draft: TimeDraft::default(),
        };
        let t = apply(state, WizardEvent::Next);
        assert_eq!(t.state.step(), 3);
        assert_eq!(error_message(&t), Some("Please select entry date and time"));
    }

    #[test]
    fn test_duration_computes_exit_time() {
        let state = WizardState::SelectingTime {
            area_id: "A1".to_string(),
            slot_id: "A1-03".to_string(),
            draft: TimeDraft {
                entry_time: Some(utc(10, 0)),
                ..TimeDraft::default()
            },
        };
        let t = apply(state, WizardEvent::ChooseDuration { minutes: 60 });
        assert_eq!(t.state.exit_time(), Some(utc(11, 0)));
        assert_eq!(t.state.booking_cost(), Some(50));
    }

    #[test]
    fn test_duration_without_entry_is_rejected() {
        let state = WizardState::SelectingTime {
            area_id: "A1".to_string(),
            slot_id: "A1-03".to_string(),
            draft: TimeDraft::default(),
        };
        let t = apply(state.clone(), WizardEvent::ChooseDuration { minutes: 60 });
        assert_eq!(t.state, state);
        assert!(error_message(&t).is_some());
    }

    #[test]
    fn test_details_guard_rejects_blank_fields() {
        let window = TimeWindow::new(utc(10, 0), utc(11, 0)).unwrap();
        let state = WizardState::EnteringDetails {
            area_id: "A1".to_string(),
            slot_id: "A1-03".to_string(),
            window,
            mode: BookingMode::Immediate,
            draft: DetailsDraft {
                vehicle_number: "KA01AB1234".to_string(),
                customer_name: "   ".to_string(),
                contact_number: "9999999999".to_string(),
            },
        };
        let t = apply(state.clone(), WizardEvent::Next);
        assert_eq!(t.state, state);
        assert_eq!(error_message(&t), Some("Please fill in all required fields"));
    }

    #[test]
    fn test_back_returns_one_step() {
        let window = TimeWindow::new(utc(10, 0), utc(11, 0)).unwrap();
        let state = WizardState::EnteringDetails {
            area_id: "A1".to_string(),
            slot_id: "A1-03".to_string(),
            window,
            mode: BookingMode::Reserve,
            draft: DetailsDraft::default(),
        };
        let t = apply(state, WizardEvent::Back);
        assert_eq!(t.state.step(), 3);
        // Las selecciones de horario y modalidad sobreviven al retroceso
        assert_eq!(t.state.entry_time(), Some(utc(10, 0)));
        assert_eq!(t.state.exit_time(), Some(utc(11, 0)));
        assert_eq!(t.state.booking_mode(), BookingMode::Reserve);
    }

    #[test]
    fn test_back_on_first_step_is_rejected() {
        let state = WizardState::initial();
        let t = apply(state.clone(), WizardEvent::Back);
        assert_eq!(t.state, state);
        assert!(error_message(&t).is_some());
    }

    #[test]
    fn test_full_flow_emits_persist_effect() {
        let mut state = WizardState::initial();
        let events = vec![
            WizardEvent::SelectArea {
                area_id: "A1".to_string(),
            },
            WizardEvent::Next,
            WizardEvent::SelectSlot {
                slot_id: "A1-03".to_string(),
            },
            WizardEvent::Next,
            WizardEvent::SetEntryTime {
                entry_time: utc(10, 0),
            },
            WizardEvent::ChooseDuration { minutes: 60 },
            WizardEvent::Next,
            WizardEvent::SetVehicleNumber {
                value: "KA01AB1234".to_string(),
            },
            WizardEvent::SetCustomerName {
                value: "Asha".to_string(),
            },
            WizardEvent::SetContactNumber {
                value: "9999999999".to_string(),
            },
            WizardEvent::Next,
        ];
        for event in events {
            state = apply(state, event).state;
        }
        assert_eq!(state.step(), 5);

        let t = apply(state, WizardEvent::Submit);
        let request = t
            .effects
            .iter()
            .find_map(|e| match e {
                Effect::PersistBooking { request } => Some(request.clone()),
                _ => None,
            })
            .expect("submit should emit a persist effect");
        assert_eq!(request.slot_id, "A1-03");
        assert_eq!(request.entry_time, utc(10, 0));
        assert_eq!(request.exit_time, utc(11, 0));
        assert_eq!(request.amount, 50);
        assert_eq!(request.vehicle_number, "KA01AB1234");
    }

    #[test]
    fn test_event_outside_its_step_leaves_state_unchanged() {
        let state = WizardState::initial();
        let t = apply(
            state.clone(),
            WizardEvent::SelectSlot {
                slot_id: "A1-03".to_string(),
            },
        );
        assert_eq!(t.state, state);
        assert!(error_message(&t).is_some());
    }

    #[test]
    fn test_confirmation_word_follows_mode() {
        assert_eq!(BookingMode::Immediate.confirmation_word(), "confirmed");
        assert_eq!(BookingMode::Reserve.confirmation_word(), "reserved");
    }
}
