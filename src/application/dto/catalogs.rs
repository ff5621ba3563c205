use crate::domain::catalog::Catalog;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDto {
    pub id: i64,
    pub name: String,
}

impl From<Catalog> for CatalogDto {
    fn from(catalog: Catalog) -> Self {
        Self {
            id: catalog.id.into(),
            name: catalog.name.into_inner(),
        }
    }
}
