//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum y de cada etapa del pipeline.

use axum::extract::FromRef;
use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::middleware::audit::{AuditSink, TracingAuditSink};
use crate::repositories::usuario_repository::UsuarioRepository;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
    pub usuarios: UsuarioRepository,
    pub audit: Arc<dyn AuditSink>,
}

impl AppState {
    /// Estado con almacén vacío y auditoría hacia `tracing`
    pub fn new(config: EnvironmentConfig) -> Self {
        Self::with_parts(config, UsuarioRepository::new(), Arc::new(TracingAuditSink))
    }

    pub fn with_parts(
        config: EnvironmentConfig,
        usuarios: UsuarioRepository,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            usuarios,
            audit,
        }
    }
}

impl FromRef<AppState> for Arc<EnvironmentConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for UsuarioRepository {
    fn from_ref(state: &AppState) -> Self {
        state.usuarios.clone()
    }
}

impl FromRef<AppState> for Arc<dyn AuditSink> {
    fn from_ref(state: &AppState) -> Self {
        state.audit.clone()
    }
}
