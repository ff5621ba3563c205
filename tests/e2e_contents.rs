use axum::http::StatusCode;
use serde_json::json;

mod support;

use support::{assert_error, seed_article, seed_catalog, seed_content, test_app};

#[tokio::test]
async fn content_crud_round() {
    let app = test_app().await;
    seed_catalog(&app, 1, "Main").await;
    seed_article(&app, 2, 1, "Mass").await;

    let (status, created) = app
        .post("/api/contents", json!({ "id": 0, "articleId": 2, "data": "https://img/1.jpg" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["articleId"], 2);
    let id = created["id"].as_i64().unwrap();

    let (status, list) = app.get("/api/contents").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = app
        .put(
            &format!("/api/contents/{id}"),
            json!({ "id": id, "articleId": 2, "data": "Text paragraph" }),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, fetched) = app.get(&format!("/api/contents/{id}")).await;
    assert_eq!(fetched["data"], "Text paragraph");

    let (status, _) = app.delete(&format!("/api/contents/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_error(&app.get(&format!("/api/contents/{id}")).await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn content_for_unknown_article_or_blank_data_is_rejected() {
    let app = test_app().await;
    seed_catalog(&app, 1, "Main").await;
    seed_article(&app, 2, 1, "Mass").await;

    assert_error(
        &app.post("/api/contents", json!({ "articleId": 77, "data": "x" })).await,
        StatusCode::BAD_REQUEST,
    );
    assert_error(
        &app.post("/api/contents", json!({ "articleId": 2, "data": " " })).await,
        StatusCode::BAD_REQUEST,
    );
    assert_error(
        &app.post("/api/contents", json!({ "id": -1, "articleId": 2, "data": "x" })).await,
        StatusCode::BAD_REQUEST,
    );
    assert_eq!(app.count("contents").await, 0);
}

#[tokio::test]
async fn content_update_statuses() {
    let app = test_app().await;
    seed_catalog(&app, 1, "Main").await;
    seed_article(&app, 2, 1, "Mass").await;
    seed_content(&app, 3, 2, "x").await;

    assert_error(
        &app.put("/api/contents/3", json!({ "id": 4, "articleId": 2, "data": "y" })).await,
        StatusCode::BAD_REQUEST,
    );
    assert_error(
        &app.put("/api/contents/3", json!({ "id": 3, "articleId": 50, "data": "y" })).await,
        StatusCode::BAD_REQUEST,
    );
    assert_error(
        &app.put("/api/contents/9", json!({ "id": 9, "articleId": 2, "data": "y" })).await,
        StatusCode::NOT_FOUND,
    );
    assert_error(&app.delete("/api/contents/0").await, StatusCode::BAD_REQUEST);
}
