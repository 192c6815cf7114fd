use axum::{
    Router,
    http::{StatusCode, Uri},
    routing::get,
};
use serde::Serialize;

use crate::{response::ApiResponse, state::AppState};

pub mod api;
pub mod doc;
pub mod health;
pub mod params;
pub mod products;

// Legacy controller/action layout: `/producto/...` and `/api/...`.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/producto", products::router())
        .nest("/api", api::router())
}

/// The full application without the HTTP middleware stack.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

#[derive(Serialize)]
struct NotFoundData {
    path: String,
}

async fn not_found(uri: Uri) -> ApiResponse<NotFoundData> {
    ApiResponse::failure(
        StatusCode::NOT_FOUND,
        "Not Found",
        NotFoundData {
            path: uri.path().to_string(),
        },
    )
}
