use std::sync::Arc;

use ant_hub::application::services::Repositories;
use axum::http::StatusCode;
use serde_json::json;

mod support;

use support::{
    TestApp, VanishingRowWriter, assert_error, memory_pool, seed_article, seed_catalog,
    seed_content, sqlite_repositories, test_app_with_repositories,
};

async fn racing_app() -> TestApp {
    let pool = memory_pool().await;
    let writer = Arc::new(VanishingRowWriter::new(Arc::clone(&pool)));
    let repos = Repositories {
        catalog_write: writer.clone(),
        article_write: writer.clone(),
        content_write: writer,
        ..sqlite_repositories(&pool)
    };
    let app = test_app_with_repositories(repos, pool);

    seed_catalog(&app, 1, "Main").await;
    seed_catalog(&app, 2, "Spare").await;
    seed_article(&app, 1, 1, "Has content").await;
    seed_article(&app, 2, 1, "Bare").await;
    seed_content(&app, 1, 1, "https://img/1.jpg").await;
    app
}

#[tokio::test]
async fn catalog_removed_before_update_is_a_server_error() {
    let app = racing_app().await;

    let result = app
        .put("/api/catalogs/2", json!({ "id": 2, "name": "Renamed" }))
        .await;

    assert_error(&result, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(result.1["message"].as_str().unwrap().contains("catalog 2"));
    assert_eq!(app.count("catalogs").await, 1);
}

#[tokio::test]
async fn article_removed_before_update_is_a_server_error() {
    let app = racing_app().await;

    let result = app
        .put(
            "/api/articles/2",
            json!({
                "id": 2,
                "catalog": { "id": 1 },
                "title": "Renamed",
                "description": "",
                "dateOrBanner": "2024-01-01"
            }),
        )
        .await;

    assert_error(&result, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.count("articles").await, 1);
}

#[tokio::test]
async fn content_removed_before_update_is_a_server_error() {
    let app = racing_app().await;

    let result = app
        .put(
            "/api/contents/1",
            json!({ "id": 1, "articleId": 1, "data": "https://img/2.jpg" }),
        )
        .await;

    assert_error(&result, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.count("contents").await, 0);
}
