pub mod articles;
pub mod catalogs;
pub mod chapters;
pub mod contents;
