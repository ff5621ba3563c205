use crate::domain::catalog::value_objects::{CatalogId, CatalogName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub id: CatalogId,
    pub name: CatalogName,
}

#[derive(Debug, Clone)]
pub struct NewCatalog {
    pub id: Option<CatalogId>,
    pub name: CatalogName,
}

#[derive(Debug, Clone)]
pub struct CatalogUpdate {
    pub id: CatalogId,
    pub name: CatalogName,
}
