// src/application/queries/chapters/paged.rs
use super::ChapterQueryService;
use crate::{
    application::{
        dto::{ChapterDto, PagedResponse},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        catalog::CatalogId,
        chapter::{PageRequest, assemble_chapters, paginate},
    },
};

pub struct ListPagedChaptersQuery {
    pub catalog_id: i64,
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

impl ChapterQueryService {
    /// Chapters of one catalog.
    ///
    /// An unknown catalog yields an empty list. The aggregate catalog yields
    /// every article outside the excluded catalogs and ignores `page`.
    pub async fn chapters_for_catalog(
        &self,
        catalog_id: i64,
        page: PageRequest,
    ) -> ApplicationResult<Vec<ChapterDto>> {
        let Ok(catalog_id) = CatalogId::new(catalog_id) else {
            return Ok(Vec::new());
        };
        if self.catalog_repo.find_by_id(catalog_id).await?.is_none() {
            return Ok(Vec::new());
        }

        if self.policy.is_aggregate(catalog_id) {
            let excluded = self.policy.excluded_catalog_ids();
            let articles = self.article_repo.list_excluding_catalogs(excluded).await?;
            let contents = self.content_repo.list_excluding_catalogs(excluded).await?;
            return Ok(Self::chapters_of(articles, contents));
        }

        let articles = self.article_repo.list_by_catalog(catalog_id).await?;
        let contents = self.content_repo.list_by_catalog(catalog_id).await?;
        Ok(paginate(assemble_chapters(articles, contents), page)
            .into_iter()
            .map(ChapterDto::from)
            .collect())
    }

    pub async fn paged_chapters(
        &self,
        query: ListPagedChaptersQuery,
    ) -> ApplicationResult<PagedResponse<ChapterDto>> {
        let page_number = query.page_number.unwrap_or(1);
        let page_size = query
            .page_size
            .unwrap_or_else(|| i64::from(self.policy.default_page_size()));
        let page = PageRequest::new(page_number, page_size)?;

        let chapters = self.chapters_for_catalog(query.catalog_id, page).await?;
        if chapters.is_empty() {
            return Err(ApplicationError::not_found(format!(
                "no chapters for catalog {}",
                query.catalog_id
            )));
        }

        let total_records = self.article_repo.count().await?;
        tracing::debug!(
            catalog_id = query.catalog_id,
            page_number,
            returned = chapters.len(),
            total_records,
            "chapter page assembled"
        );
        Ok(PagedResponse::new(page_number, total_records, chapters))
    }
}
