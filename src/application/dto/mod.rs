pub mod articles;
pub mod catalogs;
pub mod chapters;
pub mod contents;
pub mod pagination;

pub use articles::ArticleDto;
pub use catalogs::CatalogDto;
pub use chapters::ChapterDto;
pub use contents::ContentDto;
pub use pagination::PagedResponse;
