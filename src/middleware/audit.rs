//! Middleware de auditoría
//!
//! Registra método, ruta y código de estado de cada petición que pasó la
//! autenticación. El registro ocurre exactamente una vez por petición, incluso
//! si el handler falla con un panic (se registra como 500).

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Línea de auditoría
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub method: String,
    pub path: String,
    pub status: u16,
    pub timestamp: DateTime<Utc>,
}

/// Destino de las líneas de auditoría
pub trait AuditSink: Send + Sync {
    fn record(&self, entry: &AuditEntry);
}

/// Emite cada entrada como evento `tracing` con target `audit`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, entry: &AuditEntry) {
        tracing::info!(
            target: "audit",
            method = %entry.method,
            path = %entry.path,
            status = entry.status,
            timestamp = %entry.timestamp.to_rfc3339(),
            "Auditoría: Método={}, Ruta={}, Estado={}",
            entry.method,
            entry.path,
            entry.status
        );
    }
}

/// Registra al completarse o, si no se completó, al destruirse
struct AuditGuard {
    sink: Arc<dyn AuditSink>,
    method: String,
    path: String,
    recorded: bool,
}

impl AuditGuard {
    fn complete(&mut self, status: StatusCode) {
        self.emit(status);
    }

    fn emit(&mut self, status: StatusCode) {
        if self.recorded {
            return;
        }
        self.recorded = true;
        self.sink.record(&AuditEntry {
            method: std::mem::take(&mut self.method),
            path: std::mem::take(&mut self.path),
            status: status.as_u16(),
            timestamp: Utc::now(),
        });
    }
}

impl Drop for AuditGuard {
    fn drop(&mut self) {
        self.emit(StatusCode::INTERNAL_SERVER_ERROR);
    }
}

pub async fn audit_middleware(
    State(sink): State<Arc<dyn AuditSink>>,
    request: Request,
    next: Next,
) -> Response {
    let mut guard = AuditGuard {
        sink,
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        recorded: false,
    };

    let response = next.run(request).await;
    guard.complete(response.status());
    response
}
