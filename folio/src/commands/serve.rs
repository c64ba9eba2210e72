use folio_config::Config;
use folio_di::Provides;
use folio_email_impl::template::TemplateEmailServiceImpl;
use folio_persistence_file::{FileContactRepository, LockedContactRepository};
use tracing::{info, warn};

use crate::{
    email,
    environment::{
        types::{RestServer, TemplateEmail},
        ConfigProvider, Provider,
    },
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let contact_repo =
        LockedContactRepository::new(FileContactRepository::new(&config.storage.data_dir));

    // The smtp handshake happens once here; a failure disables notifications
    // for the process lifetime instead of aborting startup.
    let template_email: Option<TemplateEmail> = match &config.email {
        Some(email_config) => {
            info!("Connecting to smtp server");
            match email::connect(email_config).await {
                Ok(email) => Some(TemplateEmailServiceImpl::new(email, Default::default())),
                Err(err) => {
                    warn!("Failed to connect to smtp server, email notifications are disabled: {err:#}");
                    None
                }
            }
        }
        None => {
            info!("Smtp credentials not configured, email notifications are disabled");
            None
        }
    };

    let config_provider = ConfigProvider::new(&config, template_email.is_some());
    let mut provider = Provider::new(config_provider, contact_repo, template_email);
    let server: RestServer = provider.provide();

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve().await
}
