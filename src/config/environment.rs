//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de
//! configuración, incluida la credencial del proveedor de mapas.

use lazy_static::lazy_static;
use regex::Regex;
use std::env;

lazy_static! {
    /// Formato de una credencial válida del proveedor de mapas:
    /// prefijo "AIza" seguido de al menos 27 caracteres alfanuméricos,
    /// guion o guion bajo
    static ref MAPS_API_KEY_PATTERN: Regex =
        Regex::new(r"^AIza[A-Za-z0-9_-]{27,}$").expect("maps key pattern is valid");
}

/// Minutos de inactividad antes de descartar una sesión del asistente
const DEFAULT_WIZARD_SESSION_TTL_MINUTES: i64 = 30;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub google_maps_api_key: Option<String>,
    pub wizard_session_ttl_minutes: i64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").expect("ENVIRONMENT must be set"),
            port: env::var("PORT")
                .expect("PORT must be set")
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").expect("HOST must be set"),
            cors_origins: env::var("CORS_ORIGINS")
                .expect("CORS_ORIGINS must be set")
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY").ok(),
            wizard_session_ttl_minutes: env::var("WIZARD_SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_WIZARD_SESSION_TTL_MINUTES),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Credencial del proveedor de mapas lista para usar, o el motivo
    /// por el que el mapa queda deshabilitado. Una credencial ausente o
    /// malformada deshabilita el mapa con un error visible en lugar de
    /// tumbar la aplicación.
    pub fn maps_api_key(&self) -> Result<&str, &'static str> {
        match &self.google_maps_api_key {
            None => Err("GOOGLE_MAPS_API_KEY is not set"),
            Some(key) if MAPS_API_KEY_PATTERN.is_match(key) => Ok(key),
            Some(_) => Err("GOOGLE_MAPS_API_KEY has an invalid format"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "development".to_string(),
            port: 3000,
            host: "localhost".to_string(),
            cors_origins: vec![],
            google_maps_api_key: key.map(|k| k.to_string()),
            wizard_session_ttl_minutes: DEFAULT_WIZARD_SESSION_TTL_MINUTES,
        }
    }

    #[test]
    fn test_valid_maps_key_is_accepted() {
        let config = config_with_key(Some("AIzaSyA1234567890abcdefghijklmnopq"));
        assert!(config.maps_api_key().is_ok());
    }

    #[test]
    fn test_missing_maps_key_disables_the_map() {
        let config = config_with_key(None);
        assert_eq!(config.maps_api_key(), Err("GOOGLE_MAPS_API_KEY is not set"));
    }

    #[test]
    fn test_malformed_maps_key_disables_the_map() {
        // Prefijo incorrecto
        let config = config_with_key(Some("BIzaSyA1234567890abcdefghijklmnopq"));
        assert!(config.maps_api_key().is_err());

        // Demasiado corta después del prefijo
        let config = config_with_key(Some("AIzaShort"));
        assert!(config.maps_api_key().is_err());

        // Caracteres fuera del alfabeto permitido
        let config = config_with_key(Some("AIzaSyA1234567890abcdefghij!lmnopq"));
        assert!(config.maps_api_key().is_err());
    }
}
