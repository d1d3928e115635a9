#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use showcase::config::Config;
use showcase::store::{MemoryProjectStore, PgProjectStore, ProjectStore};

pub const INDEX_HTML: &str = "<!doctype html><title>Aura</title>";

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub static_dir: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET /api/projects, return (body, status).
    pub async fn list_projects(&self) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url("/api/projects"))
            .send()
            .await
            .expect("list request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST /api/projects with a JSON body, return (body, status).
    pub async fn add_project(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/projects"))
            .json(data)
            .send()
            .await
            .expect("add project request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST /api/projects with an arbitrary raw body, return (body, status).
    pub async fn post_raw(&self, body: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/projects"))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("raw post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config(static_dir: PathBuf, database_url: Option<String>) -> Config {
    Config {
        database_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        static_dir,
        max_body_size: 65_536,
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app backed by a seeded in-memory catalog.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(Arc::new(MemoryProjectStore::seeded()), None).await
}

pub async fn spawn_app_with(store: Arc<dyn ProjectStore>, database_url: Option<String>) -> TestApp {
    let static_dir = std::env::temp_dir().join(format!("showcase_static_{}", Uuid::now_v7().simple()));
    std::fs::create_dir_all(&static_dir).expect("Failed to create static dir");
    std::fs::write(static_dir.join("index.html"), INDEX_HTML).expect("Failed to write index.html");

    let app = showcase::build_app(store, &test_config(static_dir.clone(), database_url));

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        static_dir,
    }
}

/// Remove the temporary static directory.
pub fn cleanup(app: TestApp) {
    let _ = std::fs::remove_dir_all(&app.static_dir);
}

/// A dedicated, migrated Postgres database for one test.
pub struct TestDb {
    pub pool: PgPool,
    pub url: String,
    pub db_name: String,
    admin_url: String,
}

/// Create a fresh temporary database, or `None` when DATABASE_URL is not set.
pub async fn create_test_db() -> Option<TestDb> {
    let _ = dotenvy::dotenv();

    let Ok(base_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping Postgres test");
        return None;
    };

    let db_name = format!("showcase_test_{}", Uuid::now_v7().simple());

    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    Some(TestDb {
        pool,
        url,
        db_name,
        admin_url,
    })
}

/// Spawn a test app backed by a seeded Postgres catalog.
pub async fn spawn_pg_app() -> Option<(TestApp, TestDb)> {
    let db = create_test_db().await?;
    let store = PgProjectStore::new(db.pool.clone());
    store.seed_if_empty().await.expect("Failed to seed test database");

    let app = spawn_app_with(Arc::new(store), Some(db.url.clone())).await;
    Some((app, db))
}

/// Drop the test database after the test completes.
pub async fn drop_test_db(db: TestDb) {
    db.pool.close().await;

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&db.admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{}\" WITH (FORCE)", db.db_name))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
