pub mod articles;
pub mod catalogs;
pub mod contents;
