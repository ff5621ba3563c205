// src/domain/chapter/policy.rs
use crate::domain::catalog::CatalogId;
use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_AGGREGATE_CATALOG_ID: i64 = 1;
pub const DEFAULT_EXCLUDED_CATALOG_IDS: [i64; 5] = [2, 5, 7, 8, 13];
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// How the chapter listing treats the home catalog and its paging defaults.
///
/// Requesting the aggregate catalog returns every article outside the
/// excluded catalogs, regardless of the requested page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterPolicy {
    aggregate_catalog_id: CatalogId,
    excluded_catalog_ids: Vec<CatalogId>,
    default_page_size: u32,
}

impl ChapterPolicy {
    pub fn new(
        aggregate_catalog_id: i64,
        excluded_catalog_ids: &[i64],
        default_page_size: u32,
    ) -> DomainResult<Self> {
        if default_page_size == 0 {
            return Err(DomainError::Validation(
                "default page size must be positive".into(),
            ));
        }
        let excluded_catalog_ids = excluded_catalog_ids
            .iter()
            .copied()
            .map(CatalogId::new)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self {
            aggregate_catalog_id: CatalogId::new(aggregate_catalog_id)?,
            excluded_catalog_ids,
            default_page_size,
        })
    }

    pub fn aggregate_catalog_id(&self) -> CatalogId {
        self.aggregate_catalog_id
    }

    pub fn excluded_catalog_ids(&self) -> &[CatalogId] {
        &self.excluded_catalog_ids
    }

    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    pub fn is_aggregate(&self, catalog_id: CatalogId) -> bool {
        self.aggregate_catalog_id == catalog_id
    }
}

impl Default for ChapterPolicy {
    fn default() -> Self {
        Self {
            aggregate_catalog_id: CatalogId::from_trusted(DEFAULT_AGGREGATE_CATALOG_ID),
            excluded_catalog_ids: DEFAULT_EXCLUDED_CATALOG_IDS
                .iter()
                .copied()
                .map(CatalogId::from_trusted)
                .collect(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page_number: i64, page_size: i64) -> DomainResult<Self> {
        let page_number = u32::try_from(page_number)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| DomainError::Validation("pageNumber must be at least 1".into()))?;
        let page_size = u32::try_from(page_size)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| DomainError::Validation("pageSize must be at least 1".into()))?;
        Ok(Self {
            page_number,
            page_size,
        })
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}
