//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Se resuelve una sola vez
//! al arrancar el proceso y se inyecta en el estado de la aplicación.

use anyhow::{Context, Result};
use std::env;
use tracing::Level;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    /// Secreto estático que debe llegar en `Authorization: Bearer <token>`
    pub auth_token: String,
    pub log_level: Level,
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construir la configuración a partir de una función de búsqueda de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid number, got '{}'", raw))?,
            None => 3000,
        };
        let auth_token = lookup("AUTH_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .context("AUTH_TOKEN must be set")?;
        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => raw
                .trim()
                .parse::<Level>()
                .map_err(|_| anyhow::anyhow!("LOG_LEVEL must be one of trace, debug, info, warn, error; got '{}'", raw))?,
            None => Level::INFO,
        };

        Ok(Self {
            environment,
            port,
            host,
            auth_token,
            log_level,
        })
    }

    /// Configuración mínima con el secreto indicado, útil para pruebas
    pub fn with_token(auth_token: impl Into<String>) -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "127.0.0.1".to_string(),
            auth_token: auth_token.into(),
            log_level: Level::INFO,
        }
    }

    /// Valor exacto que debe traer el header `Authorization`
    pub fn expected_authorization(&self) -> String {
        format!("Bearer {}", self.auth_token)
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
