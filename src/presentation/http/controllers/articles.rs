// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// Only the id is read; a `name` sent along with it is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogReference {
    #[serde(default)]
    pub id: i64,
}

/// Article payload. A `content` list sent by clients is ignored; content rows
/// are managed through `/api/contents`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub catalog: CatalogReference,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date_or_banner: String,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    responses(
        (status = 200, description = "All articles with their content.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article with its content.", body = ArticleDto),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid payload or unknown catalog.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        id: payload.id,
        catalog_id: payload.catalog.id,
        title: payload.title,
        description: payload.description,
        date_or_banner: payload.date_or_banner,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ArticleRequest,
    responses(
        (status = 204, description = "Article updated."),
        (status = 400, description = "Invalid payload or id mismatch.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Article changed concurrently.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(path_id): Path<i64>,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> HttpResult<StatusCode> {
    let command = UpdateArticleCommand {
        path_id,
        id: payload.id,
        catalog_id: payload.catalog.id,
        title: payload.title,
        description: payload.description,
        date_or_banner: payload.date_or_banner,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 400, description = "Invalid id or article still has content.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
