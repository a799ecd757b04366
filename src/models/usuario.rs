//! Modelo de Usuario
//!
//! Registro de usuario identificado por un `id` entero asignado por el cliente.

use serde::{Deserialize, Serialize};

/// Usuario - forma en el cable `{ "id": 1, "nombre": "Ana", "email": "ana@x.com" }`
///
/// Los campos ausentes en el payload se decodifican con su valor por defecto
/// (`0` / cadena vacía) para que sea la validación quien los rechace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usuario {
    pub id: i32,
    pub nombre: String,
    pub email: String,
}

impl Usuario {
    pub fn new(id: i32, nombre: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            nombre: nombre.into(),
            email: email.into(),
        }
    }

    /// Ruta canónica del recurso, usada en el header `Location`
    pub fn location(&self) -> String {
        format!("/users/{}", self.id)
    }
}
