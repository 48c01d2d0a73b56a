//! Pet service - seam between HTTP handlers and the repository
//!
//! Handlers only ever see `dyn PetService`. The default implementation
//! forwards every call to `PetRepo` untouched; validation, authorization or
//! caching can be layered in here without changing either side.

use async_trait::async_trait;

use crate::db::{DbError, PetRepo};
use crate::models::{Analytics, NewPet, Pet, PetId, PetUpdate};

#[async_trait]
pub trait PetService: Send + Sync {
    async fn create_pet(&self, pet: NewPet) -> Result<Pet, DbError>;

    async fn get_all_pets(&self) -> Result<Vec<Pet>, DbError>;

    /// `Ok(None)` when no pet has this id.
    async fn update_pet(&self, id: PetId, update: PetUpdate) -> Result<Option<Pet>, DbError>;

    /// `Ok(false)` when there was nothing to delete.
    async fn delete_pet(&self, id: PetId) -> Result<bool, DbError>;

    async fn get_analytics(&self) -> Result<Analytics, DbError>;
}

/// Pass-through service backed by PostgreSQL
#[derive(Clone)]
pub struct RepoPetService {
    repo: PetRepo,
}

impl RepoPetService {
    pub fn new(repo: PetRepo) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PetService for RepoPetService {
    async fn create_pet(&self, pet: NewPet) -> Result<Pet, DbError> {
        self.repo.create_pet(pet).await
    }

    async fn get_all_pets(&self) -> Result<Vec<Pet>, DbError> {
        self.repo.get_all_pets().await
    }

    async fn update_pet(&self, id: PetId, update: PetUpdate) -> Result<Option<Pet>, DbError> {
        self.repo.update_pet(id, update).await
    }

    async fn delete_pet(&self, id: PetId) -> Result<bool, DbError> {
        self.repo.delete_pet(id).await
    }

    async fn get_analytics(&self) -> Result<Analytics, DbError> {
        self.repo.get_analytics().await
    }
}
