use crate::domain::article::ArticleId;
use crate::domain::content::value_objects::{ContentData, ContentId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub id: ContentId,
    pub article_id: ArticleId,
    pub data: ContentData,
}

#[derive(Debug, Clone)]
pub struct NewContent {
    pub id: Option<ContentId>,
    pub article_id: ArticleId,
    pub data: ContentData,
}

#[derive(Debug, Clone)]
pub struct ContentUpdate {
    pub id: ContentId,
    pub article_id: ArticleId,
    pub data: ContentData,
}
