// src/presentation/http/controllers/contents.rs
use crate::application::{
    commands::contents::{CreateContentCommand, DeleteContentCommand, UpdateContentCommand},
    dto::ContentDto,
    queries::contents::GetContentByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub article_id: i64,
    #[serde(default)]
    pub data: String,
}

#[utoipa::path(
    get,
    path = "/api/contents",
    responses((status = 200, description = "All content rows.", body = [ContentDto])),
    tag = "Contents"
)]
pub async fn list_contents(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ContentDto>>> {
    state
        .services
        .content_queries
        .list_contents()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/contents/{id}",
    params(("id" = i64, Path, description = "Content id")),
    responses(
        (status = 200, description = "The content row.", body = ContentDto),
        (status = 404, description = "No such content.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn get_content(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContentDto>> {
    state
        .services
        .content_queries
        .get_content_by_id(GetContentByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/contents",
    request_body = ContentRequest,
    responses(
        (status = 201, description = "Content created.", body = ContentDto),
        (status = 400, description = "Invalid payload or unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn create_content(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ContentRequest>,
) -> HttpResult<(StatusCode, Json<ContentDto>)> {
    let command = CreateContentCommand {
        id: payload.id,
        article_id: payload.article_id,
        data: payload.data,
    };

    state
        .services
        .content_commands
        .create_content(command)
        .await
        .into_http()
        .map(|content| (StatusCode::CREATED, Json(content)))
}

#[utoipa::path(
    put,
    path = "/api/contents/{id}",
    params(("id" = i64, Path, description = "Content id")),
    request_body = ContentRequest,
    responses(
        (status = 204, description = "Content updated."),
        (status = 400, description = "Invalid payload or id mismatch.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such content.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Content changed concurrently.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn update_content(
    Extension(state): Extension<HttpState>,
    Path(path_id): Path<i64>,
    JsonBody(payload): JsonBody<ContentRequest>,
) -> HttpResult<StatusCode> {
    let command = UpdateContentCommand {
        path_id,
        id: payload.id,
        article_id: payload.article_id,
        data: payload.data,
    };

    state
        .services
        .content_commands
        .update_content(command)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/contents/{id}",
    params(("id" = i64, Path, description = "Content id")),
    responses(
        (status = 204, description = "Content deleted."),
        (status = 400, description = "Invalid id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such content.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn delete_content(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .content_commands
        .delete_content(DeleteContentCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
