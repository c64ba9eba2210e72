use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Extension, Json, Router,
};
use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use folio_models::{
    contact::{ContactReceipt, ContactSubmission},
    EnvironmentMode,
};
use serde::Serialize;

use crate::{
    extractors::user_agent::UserAgent,
    middlewares::client_ip::ClientIp,
    models::{contact::ApiContactRequest, ApiFailure},
    routes::{error, internal_server_error},
};

pub fn router(
    service: Arc<impl ContactFeatureService>,
    environment: EnvironmentMode,
) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .route("/contacts", routing::get(list))
        .with_state((service, environment))
}

#[derive(Serialize)]
struct SubmitResponse {
    success: bool,
    message: &'static str,
    data: ContactReceipt,
}

async fn submit(
    State((service, environment)): State<(Arc<impl ContactFeatureService>, EnvironmentMode)>,
    Extension(client_ip): Extension<ClientIp>,
    user_agent: UserAgent,
    Json(request): Json<ApiContactRequest>,
) -> Response {
    let request = request.into_contact_request(client_ip.0, user_agent.0);

    match service.submit(request).await {
        Ok(receipt) => Json(SubmitResponse {
            success: true,
            message: "Message sent successfully",
            data: receipt,
        })
        .into_response(),
        Err(ContactSubmitError::Invalid(errors)) => {
            let mut failure = ApiFailure::new("Validation failed");
            failure.errors = Some(errors);
            error(StatusCode::BAD_REQUEST, failure)
        }
        Err(ContactSubmitError::Other(err)) => internal_server_error(environment, err),
    }
}

#[derive(Serialize)]
struct ListResponse {
    success: bool,
    data: Vec<ContactSubmission>,
}

/// Debug affordance: the submission log is only exposed in development mode.
async fn list(
    State((service, environment)): State<(Arc<impl ContactFeatureService>, EnvironmentMode)>,
) -> Response {
    if !environment.is_development() {
        return error(StatusCode::FORBIDDEN, ApiFailure::new("Forbidden"));
    }

    match service.list().await {
        Ok(submissions) => Json(ListResponse {
            success: true,
            data: submissions,
        })
        .into_response(),
        Err(err) => internal_server_error(environment, err),
    }
}
