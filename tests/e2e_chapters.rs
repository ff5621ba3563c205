use ant_hub::domain::chapter::ChapterPolicy;
use axum::http::StatusCode;
use serde_json::{Value, json};

mod support;

use support::{
    TestApp, assert_error, seed_article, seed_catalog, seed_content, test_app,
    test_app_with_policy,
};

fn ids(chapters: &Value) -> Vec<i64> {
    chapters
        .as_array()
        .unwrap()
        .iter()
        .map(|chapter| chapter["id"].as_i64().unwrap())
        .collect()
}

/// Catalog 1 aggregates; catalogs 2 and 5 are excluded; 3 and 4 are regular.
async fn parish_app() -> TestApp {
    let app = test_app().await;
    for (id, name) in [(1, "Home"), (2, "Hidden"), (3, "News"), (4, "Youth"), (5, "Archive")] {
        seed_catalog(&app, id, name).await;
    }
    seed_article(&app, 1, 1, "Welcome").await;
    seed_article(&app, 2, 2, "Hidden one").await;
    seed_article(&app, 3, 3, "News one").await;
    seed_article(&app, 4, 3, "News two").await;
    seed_article(&app, 5, 3, "News three").await;
    seed_article(&app, 6, 4, "Youth one").await;
    seed_article(&app, 7, 5, "Archived").await;
    app
}

#[tokio::test]
async fn single_article_without_content_becomes_one_chapter() {
    let app = test_app().await;
    seed_catalog(&app, 1, "Main").await;
    app.post(
        "/api/articles",
        json!({
            "id": 1,
            "catalog": { "id": 1, "name": "Main" },
            "title": "T",
            "description": "D",
            "dateOrBanner": "2024-01-01",
            "content": []
        }),
    )
    .await;

    let (status, page) = app.get("/api/chapters/1?pageNumber=1&pageSize=50").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        page,
        json!({
            "pageNumber": 1,
            "pageSize": 1,
            "totalRecords": 1,
            "data": [{
                "id": 1,
                "catalog": { "id": 1, "name": "Main" },
                "title": "T",
                "description": "D",
                "dateOrBanner": "2024-01-01",
                "content": []
            }]
        })
    );
}

#[tokio::test]
async fn aggregate_catalog_skips_excluded_catalogs_regardless_of_paging() {
    let app = parish_app().await;

    for uri in [
        "/api/chapters/1",
        "/api/chapters/1?pageNumber=1&pageSize=2",
        "/api/chapters/1?pageNumber=3&pageSize=1",
    ] {
        let (status, page) = app.get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(ids(&page["data"]), [1, 3, 4, 5, 6], "{uri}");
        assert_eq!(page["pageSize"], 5);
        assert_eq!(page["totalRecords"], 7);
    }
}

#[tokio::test]
async fn regular_catalog_is_paginated() {
    let app = parish_app().await;

    let (_, first) = app.get("/api/chapters/3?pageNumber=1&pageSize=2").await;
    assert_eq!(ids(&first["data"]), [3, 4]);
    assert_eq!(first["pageNumber"], 1);
    assert_eq!(first["pageSize"], 2);
    assert_eq!(first["totalRecords"], 7);

    let (_, second) = app.get("/api/chapters/3?pageNumber=2&pageSize=2").await;
    assert_eq!(ids(&second["data"]), [5]);
    assert_eq!(second["pageNumber"], 2);
    assert_eq!(second["pageSize"], 1);

    let (_, short) = app.get("/api/chapters/3?pageNumber=9&pageSize=10").await;
    assert_eq!(ids(&short["data"]), [3, 4, 5]);

    assert_error(
        &app.get("/api/chapters/3?pageNumber=3&pageSize=2").await,
        StatusCode::NOT_FOUND,
    );
}

#[tokio::test]
async fn chapters_carry_content_grouped_per_article() {
    let app = parish_app().await;
    seed_content(&app, 2, 4, "b").await;
    seed_content(&app, 1, 4, "a").await;
    seed_content(&app, 3, 3, "c").await;

    let (_, page) = app.get("/api/chapters/3").await;
    let data = page["data"].as_array().unwrap();
    assert_eq!(data[0]["content"], json!(["c"]));
    assert_eq!(data[1]["content"], json!(["a", "b"]));
    assert_eq!(data[2]["content"], json!([]));
}

#[tokio::test]
async fn unknown_or_empty_catalog_is_not_found() {
    let app = parish_app().await;
    seed_catalog(&app, 9, "Empty").await;

    assert_error(&app.get("/api/chapters/42").await, StatusCode::NOT_FOUND);
    assert_error(&app.get("/api/chapters/9").await, StatusCode::NOT_FOUND);
    assert_error(&app.get("/api/chapters/0").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_paging_is_a_bad_request() {
    let app = parish_app().await;

    assert_error(
        &app.get("/api/chapters/3?pageNumber=0").await,
        StatusCode::BAD_REQUEST,
    );
    assert_error(
        &app.get("/api/chapters/3?pageSize=-1").await,
        StatusCode::BAD_REQUEST,
    );
    assert_error(
        &app.get("/api/chapters/3?pageNumber=abc").await,
        StatusCode::BAD_REQUEST,
    );
    assert_error(
        &app.get("/api/chapters/3?pageSize=1.5").await,
        StatusCode::BAD_REQUEST,
    );
}

#[tokio::test]
async fn all_chapters_lists_everything_or_not_found() {
    let empty = test_app().await;
    assert_error(&empty.get("/api/chapters").await, StatusCode::NOT_FOUND);

    let app = parish_app().await;
    let (status, chapters) = app.get("/api/chapters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&chapters), [1, 2, 3, 4, 5, 6, 7]);
}

#[tokio::test]
async fn policy_controls_aggregate_and_page_size() {
    let policy = ChapterPolicy::new(4, &[3], 2).unwrap();
    let app = test_app_with_policy(policy).await;
    for (id, name) in [(1, "Home"), (3, "News"), (4, "Youth")] {
        seed_catalog(&app, id, name).await;
    }
    seed_article(&app, 1, 1, "a").await;
    seed_article(&app, 2, 1, "b").await;
    seed_article(&app, 3, 1, "c").await;
    seed_article(&app, 4, 3, "d").await;

    let (_, aggregate) = app.get("/api/chapters/4").await;
    assert_eq!(ids(&aggregate["data"]), [1, 2, 3]);

    let (_, home) = app.get("/api/chapters/1").await;
    assert_eq!(ids(&home["data"]), [1, 2]);
}

#[tokio::test]
async fn large_catalog_pages_without_listing_every_article_id() {
    let app = test_app().await;
    seed_catalog(&app, 3, "News").await;
    sqlx::query(
        "WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < 40000) \
         INSERT INTO articles (article_id, catalog_id, title, description, date_or_banner) \
         SELECT n, 3, 'Article ' || n, '', '2024-01-01' FROM seq",
    )
    .execute(&*app.pool)
    .await
    .unwrap();
    seed_content(&app, 1, 39_999, "https://img/late.jpg").await;

    let (status, page) = app.get("/api/chapters/3?pageNumber=8000&pageSize=5").await;

    assert_eq!(status, StatusCode::OK, "{page}");
    assert_eq!(page["totalRecords"], 40_000);
    assert_eq!(ids(&page["data"]), [39_996, 39_997, 39_998, 39_999, 40_000]);
    assert_eq!(page["data"][3]["content"], json!(["https://img/late.jpg"]));
    assert_eq!(page["data"][4]["content"], json!([]));
}
