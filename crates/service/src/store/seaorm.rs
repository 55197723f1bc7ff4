use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::error;

use models::{db, user};

use super::{RecordStore, StoreHealth};
use crate::domain::{NewUser, UserRecord};
use crate::errors::RegistryError;

/// SeaORM-backed store; the `users` table's unique constraints guard `cpf`
/// and `email`.
#[derive(Clone, Debug)]
pub struct SeaOrmRecordStore {
    pub db: DatabaseConnection,
}

impl SeaOrmRecordStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl RecordStore for SeaOrmRecordStore {
    async fn insert(&self, new_user: NewUser) -> Result<UserRecord, RegistryError> {
        let created = user::insert(&self.db, new_user.into()).await?;
        Ok(created.into())
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<UserRecord>, RegistryError> {
        Ok(user::find_by_cpf(&self.db, cpf).await?.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RegistryError> {
        Ok(user::find_by_email(&self.db, email).await?.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, RegistryError> {
        let rows = user::list_all(&self.db).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RegistryError> {
        Ok(user::count(&self.db).await?)
    }

    async fn health_check(&self) -> StoreHealth {
        match db::ping(&self.db).await {
            Ok(()) => StoreHealth::ok(),
            Err(e) => {
                error!(error = %e, "database ping failed");
                StoreHealth::failed(e.to_string())
            }
        }
    }
}
