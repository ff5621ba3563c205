// tests/support/helpers.rs
use std::net::SocketAddr;
use std::sync::Arc;

use ant_hub::application::services::{ApplicationServices, Repositories};
use ant_hub::domain::chapter::ChapterPolicy;
use ant_hub::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCatalogReadRepository,
        SqliteCatalogWriteRepository, SqliteContentReadRepository, SqliteContentWriteRepository,
    },
};
use ant_hub::presentation::http::{
    routes::{RouterOptions, build_router_with_options, build_router_with_rate_limiter},
    state::HttpState,
};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt as _;

pub struct TestApp {
    pub router: Router,
    pub pool: Arc<SqlitePool>,
}

pub async fn memory_pool() -> Arc<SqlitePool> {
    let pool = database::init_pool("sqlite::memory:")
        .await
        .expect("in-memory pool");
    database::run_migrations(&pool).await.expect("migrations");
    Arc::new(pool)
}

pub async fn memory_cache_pool() -> Arc<SqlitePool> {
    let pool = database::init_pool("sqlite::memory:")
        .await
        .expect("in-memory pool");
    database::run_cache_migrations(&pool)
        .await
        .expect("cache migrations");
    Arc::new(pool)
}

pub async fn test_app() -> TestApp {
    test_app_with_policy(ChapterPolicy::default()).await
}

pub async fn test_app_with_policy(policy: ChapterPolicy) -> TestApp {
    let (state, pool) = test_state(policy).await;
    let router = build_router_with_rate_limiter(state, false);
    TestApp { router, pool }
}

pub fn sqlite_repositories(pool: &Arc<SqlitePool>) -> Repositories {
    Repositories {
        catalog_write: Arc::new(SqliteCatalogWriteRepository::new(Arc::clone(pool))),
        catalog_read: Arc::new(SqliteCatalogReadRepository::new(Arc::clone(pool))),
        article_write: Arc::new(SqliteArticleWriteRepository::new(Arc::clone(pool))),
        article_read: Arc::new(SqliteArticleReadRepository::new(Arc::clone(pool))),
        content_write: Arc::new(SqliteContentWriteRepository::new(Arc::clone(pool))),
        content_read: Arc::new(SqliteContentReadRepository::new(Arc::clone(pool))),
    }
}

/// App over `pool` with repositories swapped in by the caller.
pub fn test_app_with_repositories(repos: Repositories, pool: Arc<SqlitePool>) -> TestApp {
    let services = Arc::new(ApplicationServices::new(repos, ChapterPolicy::default()));
    let router = build_router_with_rate_limiter(HttpState { services }, false);
    TestApp { router, pool }
}

async fn test_state(policy: ChapterPolicy) -> (HttpState, Arc<SqlitePool>) {
    let pool = memory_pool().await;
    let services = Arc::new(ApplicationServices::new(sqlite_repositories(&pool), policy));
    (HttpState { services }, pool)
}

/// The full router listening on an ephemeral local port.
pub struct LiveServer {
    pub base_url: String,
    pub pool: Arc<SqlitePool>,
}

impl LiveServer {
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&*self.pool)
            .await
            .unwrap()
    }
}

pub async fn serve_app(options: &RouterOptions) -> LiveServer {
    let (state, pool) = test_state(ChapterPolicy::default()).await;
    let router = build_router_with_options(state, options);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });
    LiveServer {
        base_url: format!("http://{address}/"),
        pool,
    }
}

impl TestApp {
    /// Sends a request and returns the status with the decoded JSON body
    /// (`Value::Null` for empty bodies, a string for plain-text rejections).
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&*self.pool)
            .await
            .unwrap()
    }
}

/// Asserts the `{error, message}` body shape and status of a failed call.
pub fn assert_error(result: &(StatusCode, Value), expected_status: StatusCode) {
    let (status, body) = result;
    assert_eq!(*status, expected_status, "unexpected status, body: {body}");
    assert_eq!(
        body["error"].as_str(),
        expected_status.canonical_reason(),
        "unexpected error field: {body}"
    );
    assert!(
        body["message"].as_str().is_some_and(|msg| !msg.is_empty()),
        "expected a non-empty message: {body}"
    );
}
