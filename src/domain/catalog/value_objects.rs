use crate::domain::errors::DomainResult;
use crate::domain::value::{non_blank, positive_id, requested_id};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CatalogId(i64);

impl CatalogId {
    pub fn new(id: i64) -> DomainResult<Self> {
        positive_id(id, "catalog id").map(Self)
    }

    /// Id as sent by a client on create; `None` lets the database assign it.
    pub fn requested(id: i64) -> DomainResult<Option<Self>> {
        Ok(requested_id(id, "catalog id")?.map(Self))
    }

    /// Caller guarantees `id > 0`.
    pub(crate) const fn from_trusted(id: i64) -> Self {
        Self(id)
    }
}

impl From<CatalogId> for i64 {
    fn from(value: CatalogId) -> Self {
        value.0
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogName(String);

impl CatalogName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        non_blank(value.into(), "catalog name").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CatalogName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
