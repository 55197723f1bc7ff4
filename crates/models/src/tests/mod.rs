

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh, migrated in-memory SQLite database.
pub(crate) async fn sqlite_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = crate::db::connect_with_config(&cfg).await?;
    crate::db::migrate(&db).await?;
    Ok(db)
}

pub(crate) fn row(cpf: &str, email: &str) -> crate::user::NewRow {
    crate::user::NewRow {
        cpf: cpf.to_string(),
        first_name: "Ana".to_string(),
        last_name: "Silva".to_string(),
        email: email.to_string(),
        data_nascimento: None,
    }
}
