// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod catalogs;
pub mod chapters;
pub mod contents;
