use std::collections::BTreeSet;

use crate::models::usuario::Usuario;
use crate::repositories::usuario_repository::{StoreError, UsuarioRepository};
use crate::utils::errors::{
    bad_request_error, conflict_error, internal_error, not_found_error, AppError, AppResult,
};
use crate::utils::validation::{validate_usuario, ValidationResult};

pub const INVALID_IDS_MESSAGE: &str = "one or more IDs are invalid";

pub struct UsuarioController {
    repository: UsuarioRepository,
}

impl UsuarioController {
    pub fn new(repository: UsuarioRepository) -> Self {
        Self { repository }
    }

    /// Lista todos los usuarios, o solo los indicados en `ids`
    pub async fn list(&self, ids: &[String]) -> AppResult<Vec<Usuario>> {
        if ids.is_empty() {
            return Ok(self.repository.list().await);
        }

        let parsed = parse_ids(ids)?;
        Ok(self.repository.get_many(&parsed).await)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Usuario> {
        self.repository.get(id).await.map_err(store_error)
    }

    pub async fn create(&self, usuario: Option<Usuario>) -> AppResult<Usuario> {
        if let ValidationResult::Invalid(reason) = validate_usuario(usuario.as_ref(), true) {
            return Err(AppError::BadRequest(reason));
        }
        let usuario = usuario.ok_or_else(|| internal_error("validated user payload is missing"))?;

        self.repository.insert(usuario).await.map_err(store_error)
    }

    pub async fn update(&self, id: i32, usuario: Option<Usuario>) -> AppResult<Usuario> {
        if let ValidationResult::Invalid(reason) = validate_usuario(usuario.as_ref(), false) {
            return Err(AppError::BadRequest(reason));
        }
        let usuario = usuario.ok_or_else(|| internal_error("validated user payload is missing"))?;

        self.repository.replace(id, usuario).await.map_err(store_error)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.delete(id).await.map_err(store_error)?;
        Ok(())
    }
}

/// Un solo token inválido invalida todo el filtro
fn parse_ids(ids: &[String]) -> AppResult<BTreeSet<i32>> {
    ids.iter()
        .map(|token| token.trim().parse::<i32>())
        .collect::<Result<BTreeSet<_>, _>>()
        .map_err(|_| bad_request_error(INVALID_IDS_MESSAGE))
}

fn store_error(error: StoreError) -> AppError {
    match error {
        StoreError::NotFound(_) => not_found_error("user"),
        StoreError::Conflict(_) => conflict_error("user"),
    }
}
