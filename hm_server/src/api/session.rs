//! Session cookie middleware.
//!
//! Identifies the browser session behind each request. An incoming
//! `hangman_session` cookie is parsed into a session id; requests without one
//! get a freshly minted id and a `Set-Cookie` on the response. The id is
//! stored in request extensions so handlers can extract it as [`SessionId`].
//!
//! The cookie carries identity only; game state lives server-side in the
//! session store.

use axum::{
    extract::Request,
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Cookie name for the session id
pub const SESSION_COOKIE: &str = "hangman_session";

/// Parse the session id out of a `Cookie` header, if present and valid
fn session_id_from_headers(headers: &axum::http::HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            Uuid::parse_str(value.trim()).ok()
        } else {
            None
        }
    })
}

/// Middleware that attaches a session id to every request.
///
/// 1. Extracts the session id from the `hangman_session` cookie, or mints a
///    new UUID v4 when the cookie is absent or unparseable
/// 2. Stores the id in request extensions for handler access
/// 3. Sets the cookie on the response when a new id was minted
pub async fn session_middleware(
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let existing = session_id_from_headers(request.headers());
    let session_id = existing.unwrap_or_else(Uuid::new_v4);

    request.extensions_mut().insert(SessionId(session_id));

    let mut response = next.run(request).await;

    if existing.is_none() {
        tracing::debug!(session_id = %session_id, "Minted new session");
        let cookie = format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }

    Ok(response)
}

/// Session id wrapper for extracting from request extensions
#[derive(Clone, Copy, Debug)]
pub struct SessionId(pub Uuid);

impl<S> axum::extract::FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<SessionId>().copied().ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Session id not found in extensions",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;

    #[test]
    fn test_session_id_parsed_from_cookie() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("{SESSION_COOKIE}={id}")).unwrap(),
        );

        assert_eq!(session_id_from_headers(&headers), Some(id));
    }

    #[test]
    fn test_session_id_found_among_other_cookies() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {SESSION_COOKIE}={id}; lang=en")).unwrap(),
        );

        assert_eq!(session_id_from_headers(&headers), Some(id));
    }

    #[test]
    fn test_missing_cookie_yields_none() {
        let headers = HeaderMap::new();
        assert_eq!(session_id_from_headers(&headers), None);
    }

    #[test]
    fn test_garbage_cookie_yields_none() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("{SESSION_COOKIE}=not-a-uuid")).unwrap(),
        );

        assert_eq!(session_id_from_headers(&headers), None);
    }
}
