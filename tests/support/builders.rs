// tests/support/builders.rs
use ant_hub::domain::sync::{RemotePage, SyncedArticle};
use serde_json::{Value, json};

use super::helpers::TestApp;

pub struct SyncedArticleBuilder {
    id: i64,
    catalog_id: i64,
    catalog_name: String,
    title: String,
    content: Vec<String>,
}

impl SyncedArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            catalog_id: 2,
            catalog_name: "News".into(),
            title: format!("Article {id}"),
            content: Vec::new(),
        }
    }

    pub fn catalog(mut self, id: i64, name: impl Into<String>) -> Self {
        self.catalog_id = id;
        self.catalog_name = name.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, items: &[&str]) -> Self {
        self.content = items.iter().map(|item| (*item).to_string()).collect();
        self
    }

    pub fn build(self) -> SyncedArticle {
        SyncedArticle {
            id: self.id,
            catalog_id: self.catalog_id,
            catalog_name: self.catalog_name,
            title: self.title,
            description: format!("about {}", self.id),
            date_or_banner: "2024-01-01".into(),
            content: self.content,
        }
    }
}

pub fn remote_page(page_number: i64, total_records: i64, articles: Vec<SyncedArticle>) -> RemotePage {
    RemotePage {
        page_number,
        page_size: i64::try_from(articles.len()).unwrap(),
        total_records,
        articles,
    }
}

pub async fn seed_catalog(app: &TestApp, id: i64, name: &str) -> Value {
    let (status, body) = app
        .post("/api/catalogs", json!({ "id": id, "name": name }))
        .await;
    assert_eq!(status.as_u16(), 201, "seeding catalog {id}: {body}");
    body
}

pub async fn seed_article(app: &TestApp, id: i64, catalog_id: i64, title: &str) -> Value {
    let (status, body) = app
        .post(
            "/api/articles",
            json!({
                "id": id,
                "catalog": { "id": catalog_id, "name": "" },
                "title": title,
                "description": format!("{title} description"),
                "dateOrBanner": "2024-01-01",
                "content": []
            }),
        )
        .await;
    assert_eq!(status.as_u16(), 201, "seeding article {id}: {body}");
    body
}

pub async fn seed_content(app: &TestApp, id: i64, article_id: i64, data: &str) -> Value {
    let (status, body) = app
        .post(
            "/api/contents",
            json!({ "id": id, "articleId": article_id, "data": data }),
        )
        .await;
    assert_eq!(status.as_u16(), 201, "seeding content {id}: {body}");
    body
}
