use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_models::EnvironmentMode;

use crate::models::ApiFailure;

pub mod contact;
pub mod health;

pub(crate) fn internal_server_error(
    environment: EnvironmentMode,
    err: impl Into<anyhow::Error>,
) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");

    let mut failure = ApiFailure::new("Internal server error");
    if environment.is_development() {
        failure.error = Some(format!("{err:#}"));
    }
    error(StatusCode::INTERNAL_SERVER_ERROR, failure)
}

pub(crate) fn error(code: StatusCode, failure: ApiFailure) -> Response {
    (code, Json(failure)).into_response()
}

pub(crate) async fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, ApiFailure::new("Resource not found"))
}
