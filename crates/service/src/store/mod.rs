//! Record Store: durable keyed storage for user records.
//!
//! Implementations must enforce uniqueness of `cpf` and `email` themselves;
//! callers' pre-checks are only an early exit.

pub mod memory;
pub mod seaorm;

use async_trait::async_trait;

use crate::domain::{NewUser, UserRecord};
use crate::errors::RegistryError;

pub use memory::MemoryRecordStore;
pub use seaorm::SeaOrmRecordStore;

/// Outcome of a storage health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreHealth {
    pub ok: bool,
    pub message: String,
}

impl StoreHealth {
    pub fn ok() -> Self { Self { ok: true, message: "connected".into() } }
    pub fn failed(message: impl Into<String>) -> Self { Self { ok: false, message: message.into() } }
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a new record under the next id. Fails with `DuplicateKey` when
    /// `cpf` or `email` is taken; nothing is written in that case.
    async fn insert(&self, user: NewUser) -> Result<UserRecord, RegistryError>;
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<UserRecord>, RegistryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RegistryError>;
    /// All records ordered by id ascending.
    async fn list_all(&self) -> Result<Vec<UserRecord>, RegistryError>;
    async fn count(&self) -> Result<u64, RegistryError>;
    async fn health_check(&self) -> StoreHealth;
}
