// src/infrastructure/cache/mod.rs
mod sqlite_article_cache;
mod sqlite_article_status;

pub use sqlite_article_cache::SqliteArticleCache;
pub use sqlite_article_status::SqliteArticleStatusRepository;
