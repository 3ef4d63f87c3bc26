//! Basic-Auth middleware.

use axum::extract::{Request, State};
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::Engine as _;
use partdb_auth::Verdict;

use crate::error::GatewayError;
use crate::state::AppState;

/// Authenticate every request before it reaches a handler.
///
/// Missing or unparsable Basic framing and a credential mismatch get
/// the same 401 with the same challenge and body; only a verification
/// failure (store down, broken digest) becomes a 500, and its cause
/// stays in the log.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some((username, password)) = basic_credentials(request.headers()) else {
        return GatewayError::AuthenticationRequired.into_response();
    };

    match state.authenticator().verify(&username, &password).await {
        Ok(Verdict::Authenticated) => next.run(request).await,
        Ok(Verdict::Mismatched) => GatewayError::AuthenticationRequired.into_response(),
        Err(error) => {
            tracing::error!(%error, "credential verification failed");
            GatewayError::Internal.into_response()
        }
    }
}

/// Extract a username/password pair from the `Authorization` header.
///
/// Returns `None` on any framing defect: wrong scheme, bad base64,
/// non-UTF-8 payload, or a payload without a colon.
fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, payload) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}
