mod list;
mod paged;
mod service;

pub use paged::ListPagedChaptersQuery;
pub use service::ChapterQueryService;
