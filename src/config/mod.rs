//! Configuración del proyecto
//!
//! Este módulo contiene la configuración resuelta desde variables de entorno.

pub mod environment;

pub use environment::*;
