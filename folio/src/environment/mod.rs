use std::sync::Arc;

use folio_api_rest::{RestServerConfig, RestServerRealIpConfig};
use folio_config::Config;
use folio_core_contact_impl::notify::ContactNotifyConfig;
use folio_di::provider;
use types::{ContactRepo, TemplateEmail};

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        contact_repo: ContactRepo,
        template_email: Option<TemplateEmail>,
        ..config: ConfigProvider {
            // API
            RestServerConfig,

            // Core
            ContactNotifyConfig,
        }
    }
}

impl Provider {
    pub fn new(
        config: ConfigProvider,
        contact_repo: ContactRepo,
        template_email: Option<TemplateEmail>,
    ) -> Self {
        Self {
            _cache: Default::default(),
            contact_repo,
            template_email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // API
        rest_server_config: RestServerConfig,

        // Core
        contact_notify_config: ContactNotifyConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config, email_enabled: bool) -> Self {
        // API
        let rest_server_config = RestServerConfig {
            host: config.http.host,
            port: config.http.port,
            environment: config.environment,
            allowed_origins: config.cors.allowed_origins.clone(),
            static_dir: config
                .static_files
                .as_ref()
                .map(|static_files| static_files.root.clone()),
            email_enabled,
            real_ip_config: config.http.real_ip.as_ref().map(|real_ip_config| {
                Arc::new(RestServerRealIpConfig {
                    header: real_ip_config.header.clone(),
                    set_from: real_ip_config.set_from,
                })
            }),
        };

        // Core
        let contact_notify_config = ContactNotifyConfig {
            operator: Arc::new(config.contact.email.clone()),
        };

        Self {
            _cache: Default::default(),

            // API
            rest_server_config,

            // Core
            contact_notify_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_di::Provides;
    use folio_persistence_file::{FileContactRepository, LockedContactRepository};
    use types::RestServer;

    use super::*;

    #[test]
    fn provide_rest_server() {
        let config =
            folio_config::load_paths(&[folio_config::DEFAULT_CONFIG_PATH]).unwrap();
        let config_provider = ConfigProvider::new(&config, false);

        let contact_repo =
            LockedContactRepository::new(FileContactRepository::new(&config.storage.data_dir));

        let mut provider = Provider::new(config_provider, contact_repo, None);
        let _: RestServer = provider.provide();
    }
}
