//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum, incluido el almacén en memoria de las
//! sesiones vivas del asistente de reserva.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::models::slot::ParkingSlot;
use crate::wizard::WizardState;

/// Sesión viva del asistente de reserva. Se crea al montar el asistente,
/// muta con cada evento y se descarta al enviar la reserva con éxito,
/// al navegar fuera o al expirar por inactividad.
#[derive(Clone, Debug)]
pub struct WizardSession {
    pub state: WizardState,
    /// Últimas plazas disponibles cargadas para el área seleccionada
    pub slots: Vec<ParkingSlot>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl WizardSession {
    pub fn new(ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            state: WizardState::initial(),
            slots: Vec::new(),
            created_at: now,
            expires_at: now + chrono::Duration::minutes(ttl_minutes),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Extender la expiración tras actividad del usuario
    pub fn touch(&mut self, ttl_minutes: i64) {
        self.expires_at = Utc::now() + chrono::Duration::minutes(ttl_minutes);
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub wizard_sessions: Arc<RwLock<HashMap<Uuid, WizardSession>>>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            pool,
            config,
            wizard_sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Crear una sesión nueva del asistente
    pub async fn insert_wizard_session(&self) -> (Uuid, WizardSession) {
        let id = Uuid::new_v4();
        let session = WizardSession::new(self.config.wizard_session_ttl_minutes);

        let mut sessions = self.wizard_sessions.write().await;
        sessions.insert(id, session.clone());
        log::info!("🧙 Sesión del asistente creada: {}", id);

        (id, session)
    }

    /// Obtener una sesión viva; una sesión expirada cuenta como ausente
    pub async fn get_wizard_session(&self, id: Uuid) -> Option<WizardSession> {
        let sessions = self.wizard_sessions.read().await;
        match sessions.get(&id) {
            Some(session) if !session.is_expired() => Some(session.clone()),
            Some(_) => {
                log::warn!("⏰ Sesión del asistente expirada: {}", id);
                None
            }
            None => None,
        }
    }

    /// Guardar el estado actualizado de una sesión
    pub async fn store_wizard_session(&self, id: Uuid, mut session: WizardSession) {
        session.touch(self.config.wizard_session_ttl_minutes);
        let mut sessions = self.wizard_sessions.write().await;
        sessions.insert(id, session);
    }

    /// Descartar una sesión (envío exitoso o navegación fuera)
    pub async fn remove_wizard_session(&self, id: Uuid) -> Option<WizardSession> {
        let mut sessions = self.wizard_sessions.write().await;
        let removed = sessions.remove(&id);
        if let Some(session) = &removed {
            log::info!(
                "🗑️ Sesión del asistente descartada: {} (creada {})",
                id,
                session.created_at
            );
        }
        removed
    }

    /// Limpiar sesiones expiradas; devuelve cuántas se eliminaron
    pub async fn cleanup_expired_sessions(&self) -> usize {
        let mut sessions = self.wizard_sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired());
        before - sessions.len()
    }
}
