// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::catalogs::list_catalogs,
        crate::presentation::http::controllers::catalogs::get_catalog,
        crate::presentation::http::controllers::catalogs::create_catalog,
        crate::presentation::http::controllers::catalogs::update_catalog,
        crate::presentation::http::controllers::catalogs::delete_catalog,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::contents::list_contents,
        crate::presentation::http::controllers::contents::get_content,
        crate::presentation::http::controllers::contents::create_content,
        crate::presentation::http::controllers::contents::update_content,
        crate::presentation::http::controllers::contents::delete_content,
        crate::presentation::http::controllers::chapters::list_chapters,
        crate::presentation::http::controllers::chapters::list_paged_chapters,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::catalogs::CatalogRequest,
            crate::presentation::http::controllers::articles::ArticleRequest,
            crate::presentation::http::controllers::articles::CatalogReference,
            crate::presentation::http::controllers::contents::ContentRequest,
            crate::application::dto::CatalogDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ContentDto,
            crate::application::dto::ChapterDto
        )
    ),
    tags(
        (name = "Catalogs", description = "Catalog management"),
        (name = "Articles", description = "Article management"),
        (name = "Contents", description = "Article content rows"),
        (name = "Chapters", description = "Articles joined with their content"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "Ant Hub API",
        description = "Parish community content API",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Fills `servers` from `PUBLIC_API_URLS` (comma separated), always keeping the local default.
struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();
        urls.push("http://localhost:5066".to_string());

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    write_openapi_to(Path::new(&output_path))?;
    Ok(output_path)
}

pub fn write_openapi_to(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
