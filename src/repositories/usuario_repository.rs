//! Almacén en memoria de usuarios
//!
//! Dueño exclusivo de los registros `Usuario`, indexados por id. Las lecturas
//! comparten el lock; las escrituras lo toman en exclusiva, así que nunca se
//! observa una escritura a medias.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::usuario::Usuario;

/// Resultados tipados del almacén
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("user {0} not found")]
    NotFound(i32),

    #[error("user {0} already exists")]
    Conflict(i32),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Handle clonable sobre el mapa de usuarios. `list` y `get_many`
/// devuelven los registros ordenados por id ascendente.
#[derive(Clone, Default)]
pub struct UsuarioRepository {
    usuarios: Arc<RwLock<BTreeMap<i32, Usuario>>>,
}

impl UsuarioRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Usuario> {
        let usuarios = self.usuarios.read().await;
        usuarios.values().cloned().collect()
    }

    pub async fn get(&self, id: i32) -> StoreResult<Usuario> {
        let usuarios = self.usuarios.read().await;
        usuarios.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Registros para los ids existentes; los desconocidos se ignoran
    pub async fn get_many(&self, ids: &BTreeSet<i32>) -> Vec<Usuario> {
        let usuarios = self.usuarios.read().await;
        ids.iter().filter_map(|id| usuarios.get(id).cloned()).collect()
    }

    pub async fn insert(&self, usuario: Usuario) -> StoreResult<Usuario> {
        let mut usuarios = self.usuarios.write().await;
        if usuarios.contains_key(&usuario.id) {
            return Err(StoreError::Conflict(usuario.id));
        }
        usuarios.insert(usuario.id, usuario.clone());
        Ok(usuario)
    }

    /// Reemplaza el registro completo; el id siempre es el de la ruta
    pub async fn replace(&self, id: i32, usuario: Usuario) -> StoreResult<Usuario> {
        let mut usuarios = self.usuarios.write().await;
        let stored = usuarios.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *stored = Usuario { id, ..usuario };
        Ok(stored.clone())
    }

    pub async fn delete(&self, id: i32) -> StoreResult<Usuario> {
        let mut usuarios = self.usuarios.write().await;
        usuarios.remove(&id).ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Usuario {
        Usuario::new(1, "Ana", "ana@x.com")
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trip() {
        let repo = UsuarioRepository::new();
        repo.insert(ana()).await.unwrap();
        assert_eq!(repo.get(1).await.unwrap(), ana());
    }

    #[tokio::test]
    async fn test_duplicate_insert_keeps_original() {
        let repo = UsuarioRepository::new();
        repo.insert(ana()).await.unwrap();

        let result = repo.insert(Usuario::new(1, "Otra", "otra@x.com")).await;
        assert_eq!(result, Err(StoreError::Conflict(1)));
        assert_eq!(repo.get(1).await.unwrap(), ana());
        assert_eq!(repo.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_replace_absent_creates_nothing() {
        let repo = UsuarioRepository::new();
        let result = repo.replace(5, ana()).await;
        assert_eq!(result, Err(StoreError::NotFound(5)));
        assert!(repo.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_replace_forces_path_id() {
        let repo = UsuarioRepository::new();
        repo.insert(ana()).await.unwrap();

        let updated = repo.replace(1, Usuario::new(99, "Ana María", "ana.maria@x.com")).await.unwrap();
        assert_eq!(updated, Usuario::new(1, "Ana María", "ana.maria@x.com"));
        assert_eq!(repo.get(1).await.unwrap(), updated);
        assert_eq!(repo.get(99).await, Err(StoreError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let repo = UsuarioRepository::new();
        repo.insert(ana()).await.unwrap();
        assert_eq!(repo.delete(1).await.unwrap(), ana());
        assert_eq!(repo.get(1).await, Err(StoreError::NotFound(1)));
        assert_eq!(repo.delete(1).await, Err(StoreError::NotFound(1)));
    }

    #[tokio::test]
    async fn test_list_and_get_many_are_ordered_by_id() {
        let repo = UsuarioRepository::new();
        repo.insert(Usuario::new(3, "Carla", "carla@x.com")).await.unwrap();
        repo.insert(ana()).await.unwrap();
        repo.insert(Usuario::new(2, "Beto", "beto@x.com")).await.unwrap();

        let ids: Vec<i32> = repo.list().await.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let filtro: BTreeSet<i32> = [3, 1, 42].into_iter().collect();
        let ids: Vec<i32> = repo.get_many(&filtro).await.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_clones_share_the_same_store() {
        let repo = UsuarioRepository::new();
        let handle = repo.clone();
        handle.insert(ana()).await.unwrap();
        assert_eq!(repo.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_are_serialized() {
        let repo = UsuarioRepository::new();
        let tasks: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert(Usuario::new(i % 10 + 1, "Ana", "ana@x.com")).await.is_ok()
                })
            })
            .collect();

        let mut inserted = 0;
        for task in tasks {
            if task.await.unwrap() {
                inserted += 1;
            }
        }
        assert_eq!(inserted, 10);
        assert_eq!(repo.list().await.len(), 10);
    }
}
