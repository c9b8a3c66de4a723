use crate::docs::ApiDoc;
use crate::state::AppState;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use tower_http::cors::{Any, CorsLayer};

const INDEX_HTML: &str = include_str!("../templates/index.html");

pub fn configure_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(api_routes())
        .merge(crate::modules::movie::router())
        .merge(crate::modules::language::router())
        .layer(cors)
}

fn api_routes() -> Router<AppState> {
    Router::new().route("/health", get(|| async { "ok" }))
}

async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}
