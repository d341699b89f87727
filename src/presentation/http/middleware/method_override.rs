// src/presentation/http/middleware/method_override.rs
use axum::http::{Method, Request};

const OVERRIDE_PARAM: &str = "_method";

/// Rewrites `POST ...?_method=PUT|PATCH|DELETE` to the named method.
///
/// Browsers can only submit forms as GET or POST, so the edit and delete
/// forms carry the real verb in the query string. This has to run before
/// routing, which is why it is a request mapper around the whole router
/// rather than a route layer.
#[must_use]
pub fn method_override<B>(mut request: Request<B>) -> Request<B> {
    if request.method() != Method::POST {
        return request;
    }

    let Some(target) = request.uri().query().and_then(override_target) else {
        return request;
    };

    tracing::trace!(method = %target, uri = %request.uri(), "overriding form method");
    *request.method_mut() = target;
    request
}

fn override_target(query: &str) -> Option<Method> {
    let params: Vec<(String, String)> = serde_urlencoded::from_str(query).ok()?;
    let (_, value) = params.into_iter().find(|(key, _)| key == OVERRIDE_PARAM)?;
    let method = Method::from_bytes(value.trim().to_ascii_uppercase().as_bytes()).ok()?;
    [Method::PUT, Method::PATCH, Method::DELETE]
        .contains(&method)
        .then_some(method)
}
