use std::fmt;

use thiserror::Error;

use models::errors::ModelError;

/// Column guarded by a uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Cpf,
    Email,
}

impl UniqueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UniqueField::Cpf => "cpf",
            UniqueField::Email => "email",
        }
    }

    fn from_column(col: &str) -> Option<Self> {
        match col {
            "cpf" => Some(UniqueField::Cpf),
            "email" => Some(UniqueField::Email),
            _ => None,
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures surfaced by the registry.
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid date format for data_nascimento: '{0}' (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),
    #[error("invalid cpf '{0}': must be exactly 11 characters")]
    InvalidCpf(String),
    #[error("a user with this {0} already exists")]
    DuplicateKey(UniqueField),
    #[error("User not found")]
    NotFound,
    #[error("storage error: {0}")]
    Storage(String),
}

impl RegistryError {
    /// Validation and duplicate errors are the caller's fault; retrying won't help.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, RegistryError::NotFound | RegistryError::Storage(_))
    }

    /// Short stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryError::MissingField(_) => "missing_field",
            RegistryError::InvalidDateFormat(_) => "invalid_date_format",
            RegistryError::InvalidCpf(_) => "invalid_cpf",
            RegistryError::DuplicateKey(_) => "duplicate_key",
            RegistryError::NotFound => "not_found",
            RegistryError::Storage(_) => "storage",
        }
    }
}

impl From<ModelError> for RegistryError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::UniqueViolation(col) => match UniqueField::from_column(&col) {
                Some(field) => RegistryError::DuplicateKey(field),
                None => RegistryError::Storage(format!("unique constraint violated on {col}")),
            },
            ModelError::Db(msg) => RegistryError::Storage(msg),
        }
    }
}
