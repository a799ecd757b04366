//! Modelos del sistema

pub mod usuario;
