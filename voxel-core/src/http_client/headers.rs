use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::warn;

use crate::session::SessionProvider;

/// Builds the header set for one request.
///
/// Always sets `Content-Type: application/json`. Adds
/// `Authorization: Bearer <token>` only when the provider currently has a
/// non-empty token that is a legal header value; a missing session is not an
/// error.
pub async fn build_headers(session: &dyn SessionProvider) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let Some(token) = session.current_token().await else {
        return headers;
    };
    if token.is_empty() {
        return headers;
    }

    match HeaderValue::from_str(&token.bearer()) {
        Ok(mut value) => {
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Err(_) => {
            warn!("Session token is not a valid header value, sending request without Authorization");
        }
    }

    headers
}
