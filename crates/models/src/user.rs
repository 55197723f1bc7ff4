use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub cpf: String,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub data_nascimento: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Column values for a row that has not been stored yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewRow {
    pub cpf: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub data_nascimento: Option<Date>,
}

/// Insert a row; the id comes from the table's auto-increment sequence.
///
/// A unique-constraint violation is reported as [`ModelError::UniqueViolation`]
/// naming the offending column.
pub async fn insert(db: &DatabaseConnection, row: NewRow) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        cpf: Set(row.cpf),
        first_name: Set(row.first_name),
        last_name: Set(row.last_name),
        email: Set(row.email),
        data_nascimento: Set(row.data_nascimento),
    };
    am.insert(db).await.map_err(map_insert_err)
}

pub async fn find_by_cpf(db: &DatabaseConnection, cpf: &str) -> Result<Option<Model>, ModelError> {
    let found = Entity::find().filter(Column::Cpf.eq(cpf)).one(db).await?;
    Ok(found)
}

pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, ModelError> {
    let found = Entity::find().filter(Column::Email.eq(email)).one(db).await?;
    Ok(found)
}

/// All rows, oldest first.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find().order_by_asc(Column::Id).all(db).await?;
    Ok(rows)
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, ModelError> {
    let n = Entity::find().count(db).await?;
    Ok(n)
}

fn map_insert_err(e: DbErr) -> ModelError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => match unique_column(&msg) {
            Some(col) => ModelError::UniqueViolation(col.to_string()),
            None => ModelError::Db(msg),
        },
        _ => ModelError::Db(e.to_string()),
    }
}

/// Postgres reports `... constraint "users_cpf_key"`, SQLite reports
/// `UNIQUE constraint failed: users.cpf`; both name the column.
fn unique_column(msg: &str) -> Option<&'static str> {
    let lower = msg.to_lowercase();
    if lower.contains("cpf") {
        Some("cpf")
    } else if lower.contains("email") {
        Some("email")
    } else {
        None
    }
}
