use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RecordStore, StoreHealth};
use crate::domain::{NewUser, UserRecord};
use crate::errors::{RegistryError, UniqueField};

/// In-memory store for tests, doc examples and benchmarks.
///
/// The uniqueness check and the insert happen under one write lock.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<i32, UserRecord>,
    last_id: i32,
    outage: Option<String>,
}

impl Inner {
    fn available(&self) -> Result<(), RegistryError> {
        match &self.outage {
            Some(msg) => Err(RegistryError::Storage(msg.clone())),
            None => Ok(()),
        }
    }
}

impl MemoryRecordStore {
    pub fn new() -> Self { Self::default() }

    /// Make every subsequent call fail as if the backend were unreachable;
    /// `None` restores service.
    pub async fn set_outage(&self, message: Option<String>) {
        self.inner.write().await.outage = message;
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn insert(&self, user: NewUser) -> Result<UserRecord, RegistryError> {
        let mut inner = self.inner.write().await;
        inner.available()?;
        if inner.rows.values().any(|r| r.cpf == user.cpf) {
            return Err(RegistryError::DuplicateKey(UniqueField::Cpf));
        }
        if inner.rows.values().any(|r| r.email == user.email) {
            return Err(RegistryError::DuplicateKey(UniqueField::Email));
        }
        inner.last_id += 1;
        let record = UserRecord::from_new(inner.last_id, user);
        inner.rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<UserRecord>, RegistryError> {
        let inner = self.inner.read().await;
        inner.available()?;
        Ok(inner.rows.values().find(|r| r.cpf == cpf).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RegistryError> {
        let inner = self.inner.read().await;
        inner.available()?;
        Ok(inner.rows.values().find(|r| r.email == email).cloned())
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, RegistryError> {
        let inner = self.inner.read().await;
        inner.available()?;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn count(&self) -> Result<u64, RegistryError> {
        let inner = self.inner.read().await;
        inner.available()?;
        Ok(inner.rows.len() as u64)
    }

    async fn health_check(&self) -> StoreHealth {
        match self.inner.read().await.available() {
            Ok(()) => StoreHealth::ok(),
            Err(e) => StoreHealth::failed(e.to_string()),
        }
    }
}
