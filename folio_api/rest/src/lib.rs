use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    sync::Arc,
};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use folio_core_contact_contracts::ContactFeatureService;
use folio_di::Build;
use folio_models::EnvironmentMode;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
};
use tracing::warn;

use crate::routes::health::ApiInfoConfig;

mod extractors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Contact> {
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub environment: EnvironmentMode,
    pub allowed_origins: Vec<String>,
    pub static_dir: Option<PathBuf>,
    pub email_enabled: bool,
    pub real_ip_config: Option<Arc<RestServerRealIpConfig>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestServerRealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactFeatureService,
{
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = (self.config.host, self.config.port);
        let router = self.router();
        let listener = TcpListener::bind(addr).await?;
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let Self { contact, config } = self;

        let api = Router::new()
            .merge(routes::contact::router(contact.into(), config.environment))
            .merge(routes::health::router(ApiInfoConfig {
                environment: config.environment,
                email_enabled: config.email_enabled,
                static_files_enabled: config.static_dir.is_some(),
            }))
            .fallback(routes::not_found);

        let router = Router::new().nest("/api", api);

        // Non-API paths serve the front end, falling back to its index for
        // client-side routes.
        let router = match &config.static_dir {
            Some(dir) => router.fallback_service(
                ServeDir::new(dir).not_found_service(ServeFile::new(dir.join("index.html"))),
            ),
            None => router.fallback(routes::not_found),
        };

        let router = router.layer(cors_layer(&config));
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        let router = middlewares::client_ip::add(config.real_ip_config.clone())(router);
        middlewares::panic_handler::add(router)
    }
}

fn cors_layer(config: &RestServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if config.environment.is_development() {
        return layer.allow_origin(AllowOrigin::any());
    }

    let origins = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .inspect_err(|err| warn!("Ignoring invalid cors origin {origin:?}: {err}"))
                .ok()
        })
        .collect::<Vec<_>>();
    layer.allow_origin(origins)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
