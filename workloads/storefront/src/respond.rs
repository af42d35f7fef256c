//! Response headers.

use dsigner_core::RequestContext;
use dsigner_site::toggle::TOGGLE_PATH;
use http::{header, StatusCode};

pub(crate) type HeaderList = Vec<(String, Vec<u8>)>;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

fn request_id(ctx: &RequestContext) -> (String, Vec<u8>) {
    ("x-request-id".to_string(), ctx.request_id.to_string().into_bytes())
}

/// Headers for a streamed page.
pub(crate) fn page_headers(ctx: &RequestContext, cache_control: &str) -> HeaderList {
    vec![
        (header::CONTENT_TYPE.as_str().to_string(), b"text/html; charset=utf-8".to_vec()),
        request_id(ctx),
        (header::CACHE_CONTROL.as_str().to_string(), cache_control.as_bytes().to_vec()),
    ]
}

/// Headers for the redirect after a wishlist toggle.
pub(crate) fn redirect_headers(ctx: &RequestContext, location: &str) -> HeaderList {
    vec![
        (header::LOCATION.as_str().to_string(), location.as_bytes().to_vec()),
        request_id(ctx),
        (header::CACHE_CONTROL.as_str().to_string(), b"no-store".to_vec()),
    ]
}

/// Methods a path answers to.
pub(crate) fn allowed_methods(path: &str) -> &'static str {
    if path == TOGGLE_PATH {
        "POST"
    } else {
        "GET, HEAD"
    }
}

/// Headers for a bodiless error response.
pub(crate) fn empty_headers(ctx: &RequestContext, status: StatusCode) -> HeaderList {
    let mut headers = vec![request_id(ctx)];
    if status == StatusCode::METHOD_NOT_ALLOWED {
        headers.push((
            header::ALLOW.as_str().to_string(),
            allowed_methods(&ctx.path).as_bytes().to_vec(),
        ));
    }
    headers
}

/// Whether a request body is an urlencoded form. A missing header is accepted.
pub(crate) fn is_form(content_type: Option<&str>) -> bool {
    match content_type {
        None => true,
        Some(value) => value
            .split(';')
            .next()
            .map(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
            .unwrap_or(false),
    }
}
