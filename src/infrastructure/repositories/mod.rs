// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;
mod sqlite_catalog;
mod sqlite_content;

pub use error::map_sqlx;
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_catalog::{SqliteCatalogReadRepository, SqliteCatalogWriteRepository};
pub use sqlite_content::{SqliteContentReadRepository, SqliteContentWriteRepository};
