use crate::domain::article::{Article, ArticleId, ArticleTitle};
use crate::domain::catalog::Catalog;

/// Read model: an article with the data of its contents inlined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: ArticleId,
    pub catalog: Catalog,
    pub title: ArticleTitle,
    pub description: String,
    pub date_or_banner: String,
    pub content: Vec<String>,
}

impl Chapter {
    pub fn from_article(article: Article, content: Vec<String>) -> Self {
        Self {
            id: article.id,
            catalog: article.catalog,
            title: article.title,
            description: article.description,
            date_or_banner: article.date_or_banner,
            content,
        }
    }
}
