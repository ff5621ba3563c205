use crate::application::dto::CatalogDto;
use crate::domain::article::Article;
use crate::domain::chapter::Chapter;
use crate::domain::sync::SyncedArticle;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub catalog: CatalogDto,
    pub title: String,
    pub description: String,
    pub date_or_banner: String,
    #[serde(default)]
    pub content: Vec<String>,
}

impl ArticleDto {
    pub fn from_article(article: Article, content: Vec<String>) -> Self {
        Self {
            id: article.id.into(),
            catalog: article.catalog.into(),
            title: article.title.into_inner(),
            description: article.description,
            date_or_banner: article.date_or_banner,
            content,
        }
    }
}

impl From<Chapter> for ArticleDto {
    fn from(chapter: Chapter) -> Self {
        Self {
            id: chapter.id.into(),
            catalog: chapter.catalog.into(),
            title: chapter.title.into_inner(),
            description: chapter.description,
            date_or_banner: chapter.date_or_banner,
            content: chapter.content,
        }
    }
}

impl From<SyncedArticle> for ArticleDto {
    fn from(article: SyncedArticle) -> Self {
        Self {
            id: article.id,
            catalog: CatalogDto {
                id: article.catalog_id,
                name: article.catalog_name,
            },
            title: article.title,
            description: article.description,
            date_or_banner: article.date_or_banner,
            content: article.content,
        }
    }
}
