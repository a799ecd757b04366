//! Middleware de autenticación
//!
//! Compara el header `Authorization` con el secreto configurado. Si falta o
//! no coincide, responde 401 sin invocar las etapas siguientes.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{config::EnvironmentConfig, utils::errors::AppError};

pub async fn auth_middleware(
    State(config): State<Arc<EnvironmentConfig>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value == config.expected_authorization())
        .unwrap_or(false);

    if !authorized {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Petición rechazada: credencial ausente o inválida"
        );
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
