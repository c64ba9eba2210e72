use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use chrono::Utc;
use folio_models::EnvironmentMode;
use serde::Serialize;

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy)]
pub struct ApiInfoConfig {
    pub environment: EnvironmentMode,
    pub email_enabled: bool,
    pub static_files_enabled: bool,
}

pub fn router(config: ApiInfoConfig) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .route("/info", routing::get(info))
        .with_state(config)
}

#[derive(Serialize)]
struct HealthResponse {
    success: bool,
    message: &'static str,
    timestamp: String,
    environment: EnvironmentMode,
    version: &'static str,
}

async fn health(State(config): State<ApiInfoConfig>) -> Response {
    Json(HealthResponse {
        success: true,
        message: "API is up and running",
        timestamp: Utc::now().to_rfc3339(),
        environment: config.environment,
        version: API_VERSION,
    })
    .into_response()
}

#[derive(Serialize)]
struct InfoResponse {
    success: bool,
    data: InfoData,
}

#[derive(Serialize)]
struct InfoData {
    name: &'static str,
    version: &'static str,
    environment: EnvironmentMode,
    features: InfoFeatures,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InfoFeatures {
    email: bool,
    cors: bool,
    static_files: bool,
}

async fn info(State(config): State<ApiInfoConfig>) -> Response {
    Json(InfoResponse {
        success: true,
        data: InfoData {
            name: "Folio API",
            version: API_VERSION,
            environment: config.environment,
            features: InfoFeatures {
                email: config.email_enabled,
                cors: true,
                static_files: config.static_files_enabled,
            },
        },
    })
    .into_response()
}
