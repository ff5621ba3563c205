pub mod entity;
pub mod policy;
pub mod services;

pub use entity::Chapter;
pub use policy::{
    ChapterPolicy, DEFAULT_AGGREGATE_CATALOG_ID, DEFAULT_EXCLUDED_CATALOG_IDS, DEFAULT_PAGE_SIZE,
    PageRequest,
};
pub use services::{assemble_chapters, paginate};
