use std::sync::Arc;

use folio_di::Build;
use folio_templates_contracts::{Template, TemplateService, BASE_TEMPLATE, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone, Build, Default)]
pub struct TemplateServiceImpl {
    #[state]
    state: State,
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();

        tera.add_raw_template("base", BASE_TEMPLATE).unwrap();

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template).unwrap();
        }

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.state.0.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use folio_templates_contracts::{ContactConfirmationTemplate, ContactNotificationTemplate};

    use super::*;

    #[test]
    fn contact_notification() {
        let rendered = render_template(ContactNotificationTemplate {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Hello there".into(),
            message: "First line.\nSecond line.".into(),
            timestamp: "2024-05-14 12:34:56 UTC".into(),
            source_address: "203.0.113.7".into(),
            user_agent: "Mozilla/5.0".into(),
            language: "en".into(),
        });

        assert!(rendered.contains("Jane Doe"));
        assert!(rendered.contains("203.0.113.7"));
    }

    #[test]
    fn contact_confirmation() {
        let rendered = render_template(ContactConfirmationTemplate {
            name: "Jane Doe".into(),
            subject: "Hello there".into(),
            timestamp: "2024-05-14 12:34:56 UTC".into(),
        });

        assert!(rendered.contains("24-48 hours"));
    }

    #[test]
    fn values_are_html_escaped() {
        let rendered = render_template(ContactConfirmationTemplate {
            name: "Jane & Co".into(),
            subject: "a \"quoted\" subject".into(),
            timestamp: "2024-05-14 12:34:56 UTC".into(),
        });

        assert!(rendered.contains("Jane &amp; Co"));
    }

    fn render_template<T: Template + 'static>(template: T) -> String {
        // Arrange
        let sut = TemplateServiceImpl::default();

        // Act
        let result = sut.render(&template);

        // Assert
        result.unwrap()
    }
}
