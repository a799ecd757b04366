//! Composición de la aplicación
//!
//! Une las rutas con las etapas del pipeline. Orden de entrada de cada
//! petición: contención de errores, autenticación, auditoría, CORS y
//! finalmente el handler. CORS queda dentro de la autenticación, así que
//! los preflight `OPTIONS` también necesitan credencial.

use axum::{middleware, Router};

use crate::middleware::{audit_middleware, auth_middleware, cors_middleware, error_handler_middleware};
use crate::routes::usuario_routes::create_usuario_router;
use crate::state::AppState;

/// Router completo del servicio
pub fn create_app(state: AppState) -> Router {
    with_pipeline(create_usuario_router(), state)
}

/// Envuelve cualquier router con el pipeline.
/// `Router::layer` aplica las capas de adentro hacia afuera: la última es la más externa.
pub fn with_pipeline(router: Router<AppState>, state: AppState) -> Router {
    router
        .layer(cors_middleware())
        .layer(middleware::from_fn_with_state(state.clone(), audit_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .layer(middleware::from_fn(error_handler_middleware))
        .with_state(state)
}
