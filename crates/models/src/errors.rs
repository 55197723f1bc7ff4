use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A unique constraint rejected the write; carries the column name.
    #[error("unique constraint violated on {0}")]
    UniqueViolation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self {
        ModelError::Db(e.to_string())
    }
}
