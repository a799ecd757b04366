//! API de gestión de usuarios
//!
//! CRUD de registros `Usuario` en memoria, detrás de un pipeline de
//! contención de errores, autenticación por token y auditoría.

pub mod app;
pub mod config;
pub mod controllers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use app::{create_app, with_pipeline};
pub use state::AppState;
