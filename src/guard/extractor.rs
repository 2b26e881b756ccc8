use axum::http::request::Parts;
use axum::http::Method;
use axum_extra::extract::cookie::CookieJar;

/// Header carrying the CSRF token, as sent by the storefront frontend.
pub const CSRF_HEADER: &str = "x-csrf-token";

/// The slice of an inbound request the guard consumes: method, cookie jar,
/// and the already-extracted CSRF token.
///
/// Build with [`from_parts`](AccessRequest::from_parts) in axum handlers, or
/// construct directly when the CSRF token travels somewhere other than the
/// [`CSRF_HEADER`] header (e.g. a form field).
#[derive(Debug, Clone)]
pub struct AccessRequest {
    pub method: Method,
    pub cookies: CookieJar,
    pub csrf_token: Option<String>,
}

impl AccessRequest {
    #[must_use]
    pub fn new(method: Method, cookies: CookieJar, csrf_token: Option<String>) -> Self {
        Self {
            method,
            cookies,
            csrf_token,
        }
    }

    /// Extract method, cookies, and the `x-csrf-token` header from request parts.
    #[must_use]
    pub fn from_parts(parts: &Parts) -> Self {
        let csrf_token = parts
            .headers
            .get(CSRF_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        Self {
            method: parts.method.clone(),
            cookies: CookieJar::from_headers(&parts.headers),
            csrf_token,
        }
    }

    /// Get the session token from cookies.
    pub(super) fn session_token(&self, cookie_name: &str) -> Option<&str> {
        self.cookies.get(cookie_name).map(|c| c.value())
    }

    /// Safe methods skip CSRF; everything else mutates.
    pub(super) fn is_state_changing(&self) -> bool {
        !matches!(self.method, Method::GET | Method::HEAD | Method::OPTIONS)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    #[test]
    fn from_parts_extracts_cookie_and_csrf() {
        let (parts, ()) = Request::builder()
            .method(Method::POST)
            .uri("/checkout/chk_1")
            .header("cookie", "checkout_session=abc123; other=x")
            .header(CSRF_HEADER, "abc123")
            .body(())
            .unwrap()
            .into_parts();

        let request = AccessRequest::from_parts(&parts);
        assert_eq!(request.session_token("checkout_session"), Some("abc123"));
        assert_eq!(request.csrf_token.as_deref(), Some("abc123"));
        assert!(request.is_state_changing());
    }

    #[test]
    fn safe_methods_are_not_state_changing() {
        for method in [Method::GET, Method::HEAD, Method::OPTIONS] {
            let request = AccessRequest::new(method, CookieJar::new(), None);
            assert!(!request.is_state_changing());
        }
        for method in [Method::POST, Method::PUT, Method::PATCH, Method::DELETE] {
            let request = AccessRequest::new(method, CookieJar::new(), None);
            assert!(request.is_state_changing());
        }
    }
}
