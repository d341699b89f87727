// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{InMemoryArticleStore, SteppingClock, UnavailableStore};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use slugpress::application::ports::{markdown::MarkdownRenderer, time::Clock, util::SlugGenerator};
use slugpress::application::services::ApplicationServices;
use slugpress::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use slugpress::infrastructure::{markdown::CmarkRenderer, util::DefaultSlugGenerator};
use slugpress::presentation::http::{
    routes::{AppService, build_app},
    state::HttpState,
};

/// Services over the given repositories with the real slug generator and
/// markdown renderer, and a stepping clock.
pub fn build_services(
    read: Arc<dyn ArticleReadRepository>,
    write: Arc<dyn ArticleWriteRepository>,
) -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let renderer: Arc<dyn MarkdownRenderer> = Arc::new(CmarkRenderer);

    Arc::new(ApplicationServices::new(write, read, clock, slugger, renderer))
}

pub fn in_memory_services() -> (Arc<ApplicationServices>, Arc<InMemoryArticleStore>) {
    let store = Arc::new(InMemoryArticleStore::new());
    let services = build_services(store.clone(), store.clone());
    (services, store)
}

pub fn make_test_app() -> (AppService, Arc<InMemoryArticleStore>) {
    let (services, store) = in_memory_services();
    (build_app(HttpState { services }), store)
}

pub fn make_unavailable_app() -> AppService {
    let store = Arc::new(UnavailableStore);
    let services = build_services(store.clone(), store);
    build_app(HttpState { services })
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// A browser-style form submission.
pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

pub async fn body_text(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Asserts an HTML response with the expected status and returns its body.
pub async fn assert_html(resp: Response, expected_status: StatusCode) -> String {
    let status = resp.status();
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let text = body_text(resp).await;
    assert_eq!(status, expected_status, "unexpected status, body: {text}");
    assert!(ct.starts_with("text/html"), "unexpected content-type: {ct}");
    text
}

pub fn assert_redirect(resp: &Response, expected_location: &str) {
    assert!(
        resp.status().is_redirection(),
        "expected redirect, got {}",
        resp.status()
    );
    assert_eq!(location(resp), expected_location);
}
