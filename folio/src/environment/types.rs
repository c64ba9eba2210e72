use folio_core_contact_impl::{
    notify::ContactNotifyServiceImpl, validate::ContactValidateServiceImpl,
    ContactFeatureServiceImpl,
};
use folio_email_impl::{template::TemplateEmailServiceImpl, EmailServiceImpl};
use folio_persistence_file::{FileContactRepository, LockedContactRepository};
use folio_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use folio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<ContactFeature>;

// Persistence
pub type ContactRepo = LockedContactRepository<FileContactRepository>;

// Email
pub type Email = EmailServiceImpl;
pub type TemplateEmail = TemplateEmailServiceImpl<Email, Template>;

// Template
pub type Template = TemplateServiceImpl;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;

// Core
pub type ContactFeature =
    ContactFeatureServiceImpl<ContactValidate, Id, Time, ContactRepo, ContactNotify>;
pub type ContactValidate = ContactValidateServiceImpl;
pub type ContactNotify = ContactNotifyServiceImpl<TemplateEmail>;
