//! Servicio para Google Maps Directions API
//!
//! Este módulo maneja la comunicación con el endpoint de direcciones
//! del proveedor de mapas: una ruta en auto entre el origen y el
//! destino, de la que se extraen la distancia y la duración del primer
//! tramo de la primera ruta.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::geo::LatLng;

const DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Resumen de la ruta mostrado junto al mapa
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub distance_text: String,
    pub duration_text: String,
}

#[derive(Debug, Deserialize)]
struct GoogleDirectionsResponse {
    status: String,
    routes: Vec<GoogleRoute>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleRoute {
    legs: Vec<GoogleLeg>,
}

#[derive(Debug, Deserialize)]
struct GoogleLeg {
    distance: Option<GoogleTextValue>,
    duration: Option<GoogleTextValue>,
}

#[derive(Debug, Deserialize)]
struct GoogleTextValue {
    text: String,
}

pub struct DirectionsService {
    api_key: String,
    client: Client,
}

impl DirectionsService {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { api_key, client }
    }

    /// Pedir la ruta en auto entre origen y destino
    pub async fn driving_route(&self, origin: LatLng, destination: LatLng) -> Result<RouteSummary> {
        let url = format!(
            "{}?origin={},{}&destination={},{}&mode=driving&key={}",
            DIRECTIONS_URL,
            origin.lat,
            origin.lng,
            destination.lat,
            destination.lng,
            self.api_key
        );

        log::info!(
            "🗺️ Calculando ruta en auto hacia ({}, {})",
            destination.lat,
            destination.lng
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "SmartParking/1.0")
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        log::info!("📡 Directions response status: {}", status);
        log::debug!("📄 Directions response body: {}", response_text);

        if !status.is_success() {
            return Err(anyhow!("Directions API error {}: {}", status, response_text));
        }

        let parsed: GoogleDirectionsResponse = serde_json::from_str(&response_text)
            .map_err(|e| anyhow!("Error parsing directions response: {}", e))?;

        let summary = summarize(parsed)?;

        log::info!(
            "✅ Ruta calculada: {} / {}",
            summary.distance_text,
            summary.duration_text
        );

        Ok(summary)
    }
}

/// Extraer el resumen del primer tramo de la primera ruta
fn summarize(response: GoogleDirectionsResponse) -> Result<RouteSummary> {
    if response.status != "OK" {
        return Err(anyhow!(
            "Directions API status {}: {}",
            response.status,
            response.error_message.unwrap_or_default()
        ));
    }

    let leg = response
        .routes
        .first()
        .and_then(|route| route.legs.first())
        .ok_or_else(|| anyhow!("Directions response contained no route legs"))?;

    Ok(RouteSummary {
        distance_text: leg
            .distance
            .as_ref()
            .map(|d| d.text.clone())
            .unwrap_or_else(|| "Unknown distance".to_string()),
        duration_text: leg
            .duration
            .as_ref()
            .map(|d| d.text.clone())
            .unwrap_or_else(|| "Unknown duration".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_extracts_first_leg() {
        let body = r#"{
            "status": "OK",
            "routes": [
                {
                    "legs": [
                        { "distance": { "text": "12.4 km" }, "duration": { "text": "28 mins" } },
                        { "distance": { "text": "1 km" }, "duration": { "text": "2 mins" } }
                    ]
                }
            ]
        }"#;
        let parsed: GoogleDirectionsResponse = serde_json::from_str(body).unwrap();
        let summary = summarize(parsed).unwrap();
        assert_eq!(summary.distance_text, "12.4 km");
        assert_eq!(summary.duration_text, "28 mins");
    }

    #[test]
    fn test_summarize_fills_unknown_fields() {
        let body = r#"{ "status": "OK", "routes": [ { "legs": [ {} ] } ] }"#;
        let parsed: GoogleDirectionsResponse = serde_json::from_str(body).unwrap();
        let summary = summarize(parsed).unwrap();
        assert_eq!(summary.distance_text, "Unknown distance");
        assert_eq!(summary.duration_text, "Unknown duration");
    }

    #[test]
    fn test_summarize_rejects_non_ok_status() {
        let body = r#"{ "status": "REQUEST_DENIED", "routes": [], "error_message": "bad key" }"#;
        let parsed: GoogleDirectionsResponse = serde_json::from_str(body).unwrap();
        assert!(summarize(parsed).is_err());
    }

    #[test]
    fn test_summarize_rejects_empty_routes() {
        let body = r#"{ "status": "OK", "routes": [] }"#;
        let parsed: GoogleDirectionsResponse = serde_json::from_str(body).unwrap();
        assert!(summarize(parsed).is_err());
    }

    #[tokio::test]
    async fn test_directions_service_live() {
        // Este test requiere una credencial válida del proveedor
        let key = std::env::var("GOOGLE_MAPS_API_KEY").unwrap_or_default();
        if key.is_empty() {
            println!("⚠️ Skipping test: GOOGLE_MAPS_API_KEY not set");
            return;
        }

        let service = DirectionsService::new(key);
        let origin = LatLng::new(12.9716, 77.5946);
        let destination = LatLng::new(13.0827, 80.2707);

        match service.driving_route(origin, destination).await {
            Ok(summary) => {
                println!("✅ Route result: {:?}", summary);
                assert!(!summary.distance_text.is_empty());
            }
            Err(e) => {
                println!("❌ Route error: {}", e);
            }
        }
    }
}
