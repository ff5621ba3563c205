pub mod entity;
pub mod repository;

pub use entity::{ArticleStatus, PageKey, RemotePage, SyncedArticle};
pub use repository::{ArticleCache, ArticleStatusRepository, RemoteChapterSource};
