// src/presentation/http/controllers/catalogs.rs
use crate::application::{
    commands::catalogs::{CreateCatalogCommand, DeleteCatalogCommand, UpdateCatalogCommand},
    dto::CatalogDto,
    queries::catalogs::GetCatalogByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRequest {
    /// `0` lets the database pick the id on create.
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/catalogs",
    responses(
        (status = 200, description = "All catalogs.", body = [CatalogDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalogs"
)]
pub async fn list_catalogs(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CatalogDto>>> {
    state
        .services
        .catalog_queries
        .list_catalogs()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/catalogs/{id}",
    params(("id" = i64, Path, description = "Catalog id")),
    responses(
        (status = 200, description = "The catalog.", body = CatalogDto),
        (status = 404, description = "No such catalog.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalogs"
)]
pub async fn get_catalog(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<CatalogDto>> {
    state
        .services
        .catalog_queries
        .get_catalog_by_id(GetCatalogByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/catalogs",
    request_body = CatalogRequest,
    responses(
        (status = 201, description = "Catalog created.", body = CatalogDto),
        (status = 400, description = "Invalid payload or duplicate name.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalogs"
)]
pub async fn create_catalog(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CatalogRequest>,
) -> HttpResult<(StatusCode, Json<CatalogDto>)> {
    let command = CreateCatalogCommand {
        id: payload.id,
        name: payload.name,
    };

    state
        .services
        .catalog_commands
        .create_catalog(command)
        .await
        .into_http()
        .map(|catalog| (StatusCode::CREATED, Json(catalog)))
}

#[utoipa::path(
    put,
    path = "/api/catalogs/{id}",
    params(("id" = i64, Path, description = "Catalog id")),
    request_body = CatalogRequest,
    responses(
        (status = 204, description = "Catalog updated."),
        (status = 400, description = "Invalid payload or id mismatch.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such catalog.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Catalog changed concurrently.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalogs"
)]
pub async fn update_catalog(
    Extension(state): Extension<HttpState>,
    Path(path_id): Path<i64>,
    JsonBody(payload): JsonBody<CatalogRequest>,
) -> HttpResult<StatusCode> {
    let command = UpdateCatalogCommand {
        path_id,
        id: payload.id,
        name: payload.name,
    };

    state
        .services
        .catalog_commands
        .update_catalog(command)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/catalogs/{id}",
    params(("id" = i64, Path, description = "Catalog id")),
    responses(
        (status = 204, description = "Catalog deleted."),
        (status = 400, description = "Invalid id or catalog still has articles.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such catalog.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalogs"
)]
pub async fn delete_catalog(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .catalog_commands
        .delete_catalog(DeleteCatalogCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
