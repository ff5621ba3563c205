pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Content, ContentUpdate, NewContent};
pub use repository::{ContentReadRepository, ContentWriteRepository};
pub use value_objects::{ContentData, ContentId};
