// src/presentation/http/routes.rs
use crate::presentation::http::controllers::articles;
use crate::presentation::http::middleware::method_override;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    extract::Request,
    routing::{get, post},
};
use serde::Serialize;
use tower::{ServiceBuilder, util::MapRequest};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// The router wrapped in the form method override.
pub type AppService = MapRequest<Router, fn(Request) -> Request>;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

#[must_use]
pub fn build_router(state: HttpState) -> Router {
    // `{key}` is a slug for GET and a numeric id for PUT/DELETE; the two
    // cannot be registered as separate patterns on the same segment.
    Router::new()
        .route("/health", get(health))
        .route("/", get(articles::index))
        .route("/articles", post(articles::create))
        .route("/articles/new", get(articles::new_form))
        .route("/articles/edit/{id}", get(articles::edit_form))
        .route(
            "/articles/{key}",
            get(articles::show)
                .put(articles::update)
                .delete(articles::delete),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

/// Full application service: method override runs before routing.
#[must_use]
pub fn build_app(state: HttpState) -> AppService {
    ServiceBuilder::new()
        .map_request(method_override as fn(Request) -> Request)
        .service(build_router(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
