//! Middleware de contención de errores
//!
//! Etapa más externa del pipeline. Cualquier fallo no controlado (panic) que
//! ocurra más abajo se convierte en un 500 con cuerpo fijo; el detalle solo
//! va al log.

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;

use crate::utils::errors::{error_response, INTERNAL_ERROR_MESSAGE};

pub async fn error_handler_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            tracing::error!(
                method = %method,
                path = %path,
                detail = %panic_message(panic.as_ref()),
                "Excepción no controlada capturada por el middleware de errores"
            );
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
