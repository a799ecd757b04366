//! Middleware del sistema
//!
//! Etapas del pipeline, de afuera hacia adentro: contención de errores,
//! autenticación y auditoría. CORS envuelve todo el pipeline.

pub mod audit;
pub mod auth;
pub mod cors;
pub mod error_handler;

pub use audit::*;
pub use auth::*;
pub use cors::*;
pub use error_handler::*;
