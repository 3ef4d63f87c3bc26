//! Request handlers.

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use partdb_export::{csv_stream, ExportRecord};
use serde::Deserialize;

use crate::error::GatewayError;
use crate::state::AppState;

static INDEX_PAGE: &str = include_str!("../assets/index.html");

/// Query parameters accepted by the export routes.
///
/// `startID` is kept as a raw string: an absent or unparsable value
/// means "from the beginning", never a client error.
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    #[serde(rename = "startID", default)]
    start_id: Option<String>,
}

impl ExportParams {
    fn cursor(&self) -> i64 {
        self.start_id
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or(0)
    }
}

/// Landing page; also serves as the fallback for unmatched paths,
/// mirroring the catch-all root route of earlier deployments.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Explicit 405 for non-GET methods on the export routes.
pub async fn method_not_allowed() -> GatewayError {
    GatewayError::MethodNotAllowed
}

pub async fn parts_csv(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> Result<Response, GatewayError> {
    let records = state
        .inventory()
        .fetch_parts(params.cursor())
        .await
        .map_err(|error| {
            tracing::error!(%error, "fetching parts failed");
            GatewayError::Internal
        })?;
    Ok(csv_response(records, &state))
}

pub async fn locations_csv(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> Result<Response, GatewayError> {
    let records = state
        .inventory()
        .fetch_locations(params.cursor())
        .await
        .map_err(|error| {
            tracing::error!(%error, "fetching locations failed");
            GatewayError::Internal
        })?;
    Ok(csv_response(records, &state))
}

/// Wrap serialized records in a file-download response. The body is
/// streamed row by row; a disconnect mid-transfer stops emission
/// without changing the already-sent status.
fn csv_response<R>(records: Vec<R>, state: &AppState) -> Response
where
    R: ExportRecord + Send + 'static,
{
    let stream = csv_stream(records, state.base_url().to_string(), state.encoding());
    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", R::FILENAME),
            ),
        ],
        Body::from_stream(stream),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_defaults_to_zero() {
        let params = ExportParams { start_id: None };
        assert_eq!(params.cursor(), 0);

        let params = ExportParams {
            start_id: Some("not-a-number".to_string()),
        };
        assert_eq!(params.cursor(), 0);
    }

    #[test]
    fn test_cursor_parses_valid_input() {
        let params = ExportParams {
            start_id: Some("4711".to_string()),
        };
        assert_eq!(params.cursor(), 4711);
    }
}
