//! JSON shapes of the HTTP API and the record → wire conversions.

use serde::{Deserialize, Serialize};
use service::domain::UserRecord;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: i32,
    pub cpf: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// ISO `YYYY-MM-DD`, or `null` when not supplied
    pub data_nascimento: Option<String>,
}

impl From<&UserRecord> for UserResponse {
    fn from(r: &UserRecord) -> Self {
        Self {
            id: r.id,
            cpf: r.cpf.clone(),
            first_name: r.first_name.clone(),
            last_name: r.last_name.clone(),
            email: r.email.clone(),
            data_nascimento: r.birth_date.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

impl UsersResponse {
    pub fn from_records(records: &[UserRecord]) -> Self {
        Self { users: records.iter().map(UserResponse::from).collect() }
    }
}
