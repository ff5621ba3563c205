use crate::application::dto::CatalogDto;
use crate::domain::chapter::Chapter;
use crate::domain::sync::SyncedArticle;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDto {
    pub id: i64,
    pub catalog: CatalogDto,
    pub title: String,
    pub description: String,
    pub date_or_banner: String,
    #[serde(default)]
    pub content: Vec<String>,
}

impl From<Chapter> for ChapterDto {
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

impl From<ChapterDto> for SyncedArticle {
    fn from(chapter: ChapterDto) -> Self {
        Self {
            id: chapter.id,
            catalog_id: chapter.catalog.id,
            catalog_name: chapter.catalog.name,
            title: chapter.title,
            description: chapter.description,
            date_or_banner: chapter.date_or_banner,
            content: chapter.content,
        }
    }
}
