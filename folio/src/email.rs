use anyhow::Context;
use folio_config::EmailConfig;
use folio_email_contracts::EmailService;
use folio_email_impl::EmailServiceImpl;

pub async fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    let email = EmailServiceImpl::new(&config.smtp_url, config.from.clone())?;
    email
        .ping()
        .await
        .context("Failed to connect to smtp server")?;
    Ok(email)
}
