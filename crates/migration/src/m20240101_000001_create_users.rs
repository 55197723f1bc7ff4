//! Create `users` table.
//!
//! `cpf` and `email` carry unique constraints; these are the authoritative
//! guard against duplicate registrations.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_len(Users::Cpf, 11).unique_key().not_null())
                    .col(string_len(Users::FirstName, 255).not_null())
                    .col(string_len(Users::LastName, 255).not_null())
                    .col(string_len(Users::Email, 255).unique_key().not_null())
                    .col(ColumnDef::new(Users::DataNascimento).date().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Users { Table, Id, Cpf, FirstName, LastName, Email, DataNascimento }
