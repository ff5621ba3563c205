// src/application/commands/catalogs/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateCatalogCommand;
pub use delete::DeleteCatalogCommand;
pub use service::CatalogCommandService;
pub use update::UpdateCatalogCommand;
