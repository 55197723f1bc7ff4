use std::net::SocketAddr;

use serde_json::{json, Value};
use tokio::net::TcpListener;
use reqwest::StatusCode as HttpStatusCode;

use configs::{AppConfig, DatabaseConfig};
use server::startup::{build_app, build_state};

struct TestApp {
    base_url: String,
}

/// Serve the real router on an ephemeral port. Uses `DATABASE_URL` when
/// set, otherwise an in-memory SQLite database.
async fn start_server() -> anyhow::Result<TestApp> {
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) if std::env::var("SKIP_DB_TESTS").is_err() => url,
        _ => "sqlite::memory:".to_string(),
    };
    let cfg = AppConfig {
        database: DatabaseConfig { url, ..Default::default() },
        ..Default::default()
    };
    let app = build_app(build_state(&cfg).await?);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

/// 11-digit cpf unique per call within this process.
fn fresh_cpf() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{:011}", nanos % 100_000_000_000)
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_connection"], "connected");
    Ok(())
}

#[tokio::test]
async fn e2e_register_fetch_and_list() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let cpf = fresh_cpf();
    let email = format!("e2e_{cpf}@example.com");

    let res = c.post(format!("{}/user", app.base_url))
        .json(&json!({"cpf": cpf, "first_name": "Ana", "last_name": "Silva", "email": email, "data_nascimento": "1990-05-17"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    assert_eq!(created["cpf"], cpf.as_str());
    assert_eq!(created["data_nascimento"], "1990-05-17");

    let res = c.post(format!("{}/user", app.base_url))
        .json(&json!({"cpf": cpf, "first_name": "Ana", "last_name": "Silva", "email": email}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c.get(format!("{}/user/{}", app.base_url, cpf)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    let res = c.get(format!("{}/users", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    let users = body["users"].as_array().cloned().unwrap_or_default();
    assert!(users.iter().any(|u| u["cpf"] == cpf.as_str()));
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_user_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/user/{}", app.base_url, "cpf-missing")).await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({"message": "User not found"}));
    Ok(())
}
