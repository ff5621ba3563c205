use crate::domain::content::Content;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentDto {
    pub id: i64,
    pub article_id: i64,
    pub data: String,
}

impl From<Content> for ContentDto {
    fn from(content: Content) -> Self {
        Self {
            id: content.id.into(),
            article_id: content.article_id.into(),
            data: content.data.into_inner(),
        }
    }
}
