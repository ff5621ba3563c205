// src/domain/chapter/services.rs
use crate::domain::article::{Article, ArticleId};
use crate::domain::chapter::entity::Chapter;
use crate::domain::chapter::policy::PageRequest;
use crate::domain::content::Content;
use std::collections::HashMap;

fn group_content(contents: Vec<Content>) -> HashMap<ArticleId, Vec<String>> {
    let mut grouped: HashMap<ArticleId, Vec<String>> = HashMap::new();
    for content in contents {
        grouped
            .entry(content.article_id)
            .or_default()
            .push(content.data.into_inner());
    }
    grouped
}

/// One chapter per article, in article order. Articles without contents get
/// an empty list.
pub fn assemble_chapters(articles: Vec<Article>, contents: Vec<Content>) -> Vec<Chapter> {
    let mut grouped = group_content(contents);
    articles
        .into_iter()
        .map(|article| {
            let content = grouped.remove(&article.id).unwrap_or_default();
            Chapter::from_article(article, content)
        })
        .collect()
}

/// Slices a catalog's chapters into the requested page.
///
/// A list shorter than one page is returned whole. The window is taken from
/// the loaded list, not from the catalog total.
pub fn paginate(chapters: Vec<Chapter>, page: PageRequest) -> Vec<Chapter> {
    let page_size = page.page_size() as usize;
    if chapters.len() < page_size {
        return chapters;
    }

    let start = (page.page_number() as usize - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(chapters.len());
    if start >= end {
        return Vec::new();
    }

    chapters.into_iter().skip(start).take(end - start).collect()
}
