use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::domain::{RawUserFields, UserRecord};
use crate::errors::{RegistryError, UniqueField};
use crate::store::{RecordStore, StoreHealth};
use crate::validation;

/// Registry business service independent of web framework.
///
/// Holds nothing but a shared handle to the store; safe to share across
/// request handlers.
pub struct RegistryService<S: RecordStore + ?Sized> {
    store: Arc<S>,
}

impl<S: RecordStore + ?Sized> Clone for RegistryService<S> {
    fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: RecordStore + ?Sized> RegistryService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    pub fn store(&self) -> &Arc<S> { &self.store }

    /// Validate and register a new user.
    ///
    /// # Examples
    /// ```
    /// use service::{RegistryService, domain::RawUserFields, store::MemoryRecordStore};
    /// use std::sync::Arc;
    /// let svc = RegistryService::new(Arc::new(MemoryRecordStore::new()));
    /// let raw = RawUserFields {
    ///     cpf: Some("12345678901".into()),
    ///     first_name: Some("Ana".into()),
    ///     last_name: Some("Silva".into()),
    ///     email: Some("ana@x.com".into()),
    ///     data_nascimento: None,
    /// };
    /// let user = tokio_test::block_on(svc.create_user(raw)).unwrap();
    /// assert_eq!(user.id, 1);
    /// ```
    #[instrument(skip(self, raw))]
    pub async fn create_user(&self, raw: RawUserFields) -> Result<UserRecord, RegistryError> {
        let new_user = validation::validate(raw).inspect_err(|e| {
            warn!(reason = %e, "user_rejected");
        })?;

        // Early exit only; the store's own constraint is authoritative.
        if self.store.find_by_cpf(&new_user.cpf).await?.is_some() {
            warn!(field = "cpf", "user_rejected_duplicate");
            return Err(RegistryError::DuplicateKey(UniqueField::Cpf));
        }
        if self.store.find_by_email(&new_user.email).await?.is_some() {
            warn!(field = "email", "user_rejected_duplicate");
            return Err(RegistryError::DuplicateKey(UniqueField::Email));
        }

        let created = self.store.insert(new_user).await.inspect_err(|e| match e {
            RegistryError::Storage(msg) => error!(error = %msg, "user_insert_failed"),
            other => warn!(reason = %other, "user_rejected"),
        })?;
        info!(user_id = created.id, "user_created");
        Ok(created)
    }

    /// Look up a user by cpf.
    #[instrument(skip(self))]
    pub async fn get_user(&self, cpf: &str) -> Result<UserRecord, RegistryError> {
        let found = self.store.find_by_cpf(cpf).await?;
        debug!(found = found.is_some(), "user_lookup");
        found.ok_or(RegistryError::NotFound)
    }

    /// All users, ordered by id.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, RegistryError> {
        self.store.list_all().await
    }

    pub async fn health(&self) -> StoreHealth {
        self.store.health_check().await
    }
}
