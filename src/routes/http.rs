// GET handlers: version, status

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::AppState;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

#[derive(Deserialize)]
pub(super) struct StatusQuery {
    secret: Option<String>,
}

/// GET /status?secret=... — full status snapshot, or 403 with no snapshot
/// fields when the token is rejected.
pub(super) async fn status_handler(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Response {
    match state.assembler.assemble(query.secret.as_deref()).await {
        Ok(snapshot) => axum::Json(snapshot).into_response(),
        Err(e) => {
            tracing::info!(error = %e, "status request rejected");
            (
                StatusCode::FORBIDDEN,
                axum::Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
