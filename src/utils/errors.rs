//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema
//! y su conversión a respuestas HTTP con cuerpo `{"error": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Mensaje fijo para fallos internos; nunca se expone el detalle
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Mensaje fijo para métodos no soportados por una ruta existente
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "method not allowed";

/// Mensaje fijo para peticiones sin credencial válida
pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Mensaje visible para el cliente
    pub fn public_message(&self) -> &str {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Conflict(msg) => msg,
            AppError::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE,
            AppError::Unauthorized => UNAUTHORIZED_MESSAGE,
            AppError::Internal(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(detail) => tracing::error!("Internal error: {}", detail),
            AppError::Unauthorized => tracing::debug!("Unauthorized access"),
            other => tracing::debug!("{}", other),
        }

        error_response(self.status_code(), self.public_message())
    }
}

/// Construir una respuesta de error JSON
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} not found", resource))
}

/// Función helper para crear errores de conflicto
pub fn conflict_error(resource: &str) -> AppError {
    AppError::Conflict(format!("{} already exists", resource))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

/// Función helper para crear errores internos
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}
