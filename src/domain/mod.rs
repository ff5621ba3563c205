pub mod article;
pub mod catalog;
pub mod chapter;
pub mod content;
pub mod errors;
pub mod sync;
pub mod value;
