// src/replay/records.rs
//! Scraped records as found in the `PreviouslyParsed*.json` files.
//!
//! The scraper wrote PascalCase keys; the API speaks camelCase. Reading
//! accepts both, writing always produces camelCase.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    #[serde(default, alias = "Id", alias = "ID")]
    pub id: i64,
    #[serde(default, alias = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    #[serde(default, alias = "Id", alias = "ID")]
    pub id: i64,
    #[serde(default, alias = "Catalog")]
    pub catalog: CatalogRecord,
    #[serde(default, alias = "Title")]
    pub title: String,
    #[serde(default, alias = "Description")]
    pub description: String,
    #[serde(default, alias = "DateOrBanner")]
    pub date_or_banner: String,
    #[serde(default, alias = "Content")]
    pub content: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    #[serde(default, alias = "Id", alias = "ID")]
    pub id: i64,
    #[serde(default, alias = "ArticleId", alias = "ArticleID")]
    pub article_id: i64,
    #[serde(default, alias = "Data")]
    pub data: String,
}

impl fmt::Display for CatalogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "catalog {} '{}'", self.id, self.name)
    }
}

impl fmt::Display for ArticleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "article {} '{}' in catalog {}",
            self.id, self.title, self.catalog.id
        )
    }
}

impl fmt::Display for ContentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "content {} of article {}", self.id, self.article_id)
    }
}
