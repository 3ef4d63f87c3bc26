//! Error-to-response mapping for the gateway.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Challenge sent with every 401, whether credentials were absent or
/// merely wrong. The two cases must stay indistinguishable.
pub const CHALLENGE: &str = "Basic realm=PartDB-CSV, charset=\"UTF-8\"";

/// Request-terminal errors the gateway can answer with.
///
/// The display strings double as response bodies, so they stay short,
/// human-readable and free of internal detail. Anything diagnostic is
/// logged at the site that raised the error.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No usable Basic-Auth credentials, or a credential mismatch.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Non-GET method on an export route.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Verification or fetch failure; cause already logged.
    #[error("Internal Server Error")]
    Internal,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match self {
            GatewayError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = self.to_string();
        if matches!(self, GatewayError::AuthenticationRequired) {
            (status, [(header::WWW_AUTHENTICATE, CHALLENGE)], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_carries_challenge() {
        let response = GatewayError::AuthenticationRequired.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            CHALLENGE
        );
    }

    #[test]
    fn test_internal_error_is_generic() {
        let response = GatewayError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }
}
