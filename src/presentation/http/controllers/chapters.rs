// src/presentation/http/controllers/chapters.rs
use crate::application::{
    dto::{ChapterDto, PagedResponse},
    queries::chapters::ListPagedChaptersQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::QueryParams;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ChapterPageParams {
    /// Page to return, starting at 1.
    pub page_number: Option<i64>,
    /// Defaults to the configured page size.
    pub page_size: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/chapters",
    responses(
        (status = 200, description = "Every article as a chapter.", body = [ChapterDto]),
        (status = 404, description = "No chapters exist.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Chapters"
)]
pub async fn list_chapters(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ChapterDto>>> {
    state
        .services
        .chapter_queries
        .all_chapters()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/chapters/{catalogId}",
    params(
        ("catalogId" = i64, Path, description = "Catalog id"),
        ChapterPageParams
    ),
    responses(
        (status = 200, description = "One page of chapters.", body = PagedResponse<ChapterDto>),
        (status = 400, description = "Invalid paging parameters.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No chapters for this catalog or page.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Chapters"
)]
pub async fn list_paged_chapters(
    Extension(state): Extension<HttpState>,
    Path(catalog_id): Path<i64>,
    QueryParams(params): QueryParams<ChapterPageParams>,
) -> HttpResult<Json<PagedResponse<ChapterDto>>> {
    let query = ListPagedChaptersQuery {
        catalog_id,
        page_number: params.page_number,
        page_size: params.page_size,
    };

    state
        .services
        .chapter_queries
        .paged_chapters(query)
        .await
        .into_http()
        .map(Json)
}
