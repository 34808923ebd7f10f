mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;
mod wizard;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Cada cuántos segundos se barren las sesiones expiradas del asistente
const SESSION_CLEANUP_INTERVAL_SECS: u64 = 300;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🅿️ Smart Parking - Reservas de estacionamiento");
    info!("===============================================");

    let config = EnvironmentConfig::default();

    // El mapa queda deshabilitado si la credencial falta o es inválida;
    // la aplicación sigue funcionando sin él
    match config.maps_api_key() {
        Ok(_) => info!("🗺️ Credencial del proveedor de mapas válida"),
        Err(reason) => info!("⚠️ Mapa deshabilitado: {}", reason),
    }

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // CORS: permisivo en desarrollo, orígenes explícitos en producción
    let cors = if config.is_production() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let port = config.port;
    let app_state = AppState::new(pool, config);

    // Barrido periódico de sesiones expiradas del asistente
    let cleanup_state = app_state.clone();
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(SESSION_CLEANUP_INTERVAL_SECS));
        loop {
            interval.tick().await;
            let removed = cleanup_state.cleanup_expired_sessions().await;
            if removed > 0 {
                info!("🧹 {} sesiones del asistente expiradas", removed);
            }
        }
    });

    // Crear router de la API
    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/area", routes::area_routes::create_area_router())
        .nest("/api/wizard", routes::wizard_routes::create_wizard_router())
        .nest("/api/map", routes::map_routes::create_map_router())
        .nest("/api/booking", routes::booking_routes::create_booking_router())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🏢 Endpoints - Area:");
    info!("   GET  /api/area - Listar áreas con plazas libres");
    info!("   GET  /api/area/:id - Obtener área");
    info!("   GET  /api/area/:id/slots - Plazas disponibles del área");
    info!("🧙 Endpoints - Asistente de reserva:");
    info!("   POST   /api/wizard - Crear sesión del asistente");
    info!("   GET    /api/wizard/:id - Vista actual del asistente");
    info!("   POST   /api/wizard/:id/events - Aplicar un evento");
    info!("   DELETE /api/wizard/:id - Descartar la sesión");
    info!("🗺️ Endpoints - Mapa:");
    info!("   POST /api/map/view - Centro y zoom del mapa");
    info!("   POST /api/map/route - Ruta en auto con distancia y ETA");
    info!("📋 Endpoints - Reservas:");
    info!("   GET  /api/booking - Listar reservas");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Smart Parking API funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "smart_parking"
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
