use anyhow::{ensure, Context};
use clap::Subcommand;
use folio_config::Config;
use folio_email_contracts::{ContentType, Email, EmailService};
use folio_email_impl::EmailServiceImpl;
use folio_models::email_address::EmailAddressWithName;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let email_config = config
        .email
        .context("Smtp credentials are not configured")?;
    let email_service = EmailServiceImpl::new(&email_config.smtp_url, email_config.from)?;

    let ok = email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            body: "Email deliverability seems to be working!".into(),
            content_type: ContentType::Text,
            reply_to: None,
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
