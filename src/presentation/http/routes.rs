// src/presentation/http/routes.rs
use crate::presentation::http::middleware::rate_limit::{RateLimitSettings, rate_limit_layer};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, catalogs, chapters, contents},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: Option<RateLimitSettings>,
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, &RouterOptions::default())
}

pub fn build_router_with_rate_limiter(state: HttpState, enable_rate_limiter: bool) -> Router {
    let options = RouterOptions {
        allowed_origins: Vec::new(),
        rate_limit: enable_rate_limiter.then(RateLimitSettings::default),
    };
    build_router_with_options(state, &options)
}

pub fn build_router_with_options(state: HttpState, options: &RouterOptions) -> Router {
    let catalog_collection = get(catalogs::list_catalogs).post(catalogs::create_catalog);
    let article_collection = get(articles::list_articles).post(articles::create_article);
    let content_collection = get(contents::list_contents).post(contents::create_content);

    // Collections also answer with a trailing slash; the replay tool posts to `api/<name>/`.
    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/catalogs", catalog_collection.clone())
        .route("/api/catalogs/", catalog_collection)
        .route(
            "/api/catalogs/{id}",
            get(catalogs::get_catalog)
                .put(catalogs::update_catalog)
                .delete(catalogs::delete_catalog),
        )
        .route("/api/articles", article_collection.clone())
        .route("/api/articles/", article_collection)
        .route(
            "/api/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/api/contents", content_collection.clone())
        .route("/api/contents/", content_collection)
        .route(
            "/api/contents/{id}",
            get(contents::get_content)
                .put(contents::update_content)
                .delete(contents::delete_content),
        )
        .route("/api/chapters", get(chapters::list_chapters))
        .route(
            "/api/chapters/{catalog_id}",
            get(chapters::list_paged_chapters),
        );

    if let Some(settings) = options.rate_limit {
        match rate_limit_layer(settings) {
            Some(layer) => router = router.layer(layer),
            None => tracing::warn!(?settings, "invalid rate limit settings, limiter disabled"),
        }
    }

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
