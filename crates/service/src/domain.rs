use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw field set of a registration request, as received on the wire.
///
/// Every field is optional here; presence and shape are checked by
/// [`crate::validation::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawUserFields {
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub data_nascimento: Option<String>,
}

/// Validated user, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub cpf: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
}

/// Stored user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i32,
    pub cpf: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
}

impl UserRecord {
    pub(crate) fn from_new(id: i32, user: NewUser) -> Self {
        Self {
            id,
            cpf: user.cpf,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            birth_date: user.birth_date,
        }
    }
}

impl From<models::user::Model> for UserRecord {
    fn from(m: models::user::Model) -> Self {
        Self {
            id: m.id,
            cpf: m.cpf,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            birth_date: m.data_nascimento,
        }
    }
}

impl From<NewUser> for models::user::NewRow {
    fn from(u: NewUser) -> Self {
        Self {
            cpf: u.cpf,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            data_nascimento: u.birth_date,
        }
    }
}
