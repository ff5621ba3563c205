pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Catalog, CatalogUpdate, NewCatalog};
pub use repository::{CatalogReadRepository, CatalogWriteRepository};
pub use value_objects::{CatalogId, CatalogName};
