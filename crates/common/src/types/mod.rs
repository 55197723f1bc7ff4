use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub db_connection: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok".into(), db_connection: "connected".into() }
    }

    pub fn error(diagnostic: impl Into<String>) -> Self {
        Self { status: "error".into(), db_connection: diagnostic.into() }
    }

    pub fn is_ok(&self) -> bool { self.status == "ok" }
}

/// Body of every non-2xx JSON response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}
