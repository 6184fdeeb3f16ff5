use super::error::MailError;
use super::format::{format_date, format_string, html_paragraphs, plain_lists};
use super::mailer::Mailer;
use super::message::{Email, EmailBody};
use super::settings::{EmailType, NotificationSettings};
use crate::config::StoreConfig;
use crate::hooks::{FilterContext, Hooks, TRACKING_LINK_FILTER, TRACKING_MESSAGE_FILTER};
use crate::model::Order;
use crate::storefront::TRACKING_ANCHOR;
use crate::templates::{Templates, EMAIL_HTML, EMAIL_PLAIN};
use crate::tracking::{NotifyOutcome, TrackingNotifier};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use minijinja::{context, HtmlEscape};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Renders the "order sent" email and hands it to a [`Mailer`].
#[derive(Clone)]
pub struct EmailDispatcher {
    settings: NotificationSettings,
    store: StoreConfig,
    hooks: Arc<Hooks>,
    templates: Arc<Templates>,
    mailer: Arc<dyn Mailer>,
}

impl EmailDispatcher {
    pub fn new(
        settings: NotificationSettings,
        store: StoreConfig,
        hooks: Arc<Hooks>,
        templates: Arc<Templates>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            settings,
            store,
            hooks,
            templates,
            mailer,
        }
    }

    /// The `<a>` pointing at the tracking section of the customer's order page.
    ///
    /// The code is escaped in the default link. Filters receive it raw through
    /// the context and are responsible for their own output.
    pub fn tracking_link(&self, order: &Order, tracking_code: &str) -> String {
        let link = format!(
            r#"<a href="{}#{}">{}</a>"#,
            self.store.view_order_url(order.id),
            TRACKING_ANCHOR,
            HtmlEscape(tracking_code)
        );
        let ctx = FilterContext {
            order,
            tracking_code,
        };
        self.hooks.apply(TRACKING_LINK_FILTER, link, &ctx)
    }

    /// Builds the email for `order`, addressed to `to`, as of `now`.
    pub fn compose(
        &self,
        order: &Order,
        tracking_code: &str,
        to: &str,
        now: DateTime<Utc>,
    ) -> Result<Email, MailError> {
        let date = format_date(now, &self.store.date_format)?;
        let link = self.tracking_link(order, tracking_code);
        let replacements = [
            ("{site_title}", self.store.site_title.as_str()),
            ("{order_number}", order.number.as_str()),
            ("{date}", date.as_str()),
            ("{tracking_code}", link.as_str()),
        ];

        let subject = format_string(self.settings.subject_template(), &replacements);
        let heading = format_string(self.settings.heading_template(), &replacements);
        let message = format_string(&self.settings.message_template(), &replacements);
        let ctx = FilterContext {
            order,
            tracking_code,
        };
        let message = self.hooks.apply(TRACKING_MESSAGE_FILTER, message, &ctx);

        let body = match self.settings.email_type {
            EmailType::Plain => EmailBody::Plain(self.render_plain(&heading, &message)?),
            EmailType::Html => EmailBody::Html(self.render_html(&heading, &message)?),
            EmailType::Multipart => EmailBody::Multipart {
                plain: self.render_plain(&heading, &message)?,
                html: self.render_html(&heading, &message)?,
            },
        };

        Ok(Email {
            to: to.to_string(),
            subject,
            heading,
            body,
        })
    }

    fn render_plain(&self, heading: &str, message: &str) -> Result<String, MailError> {
        let message = plain_lists(message);
        Ok(self
            .templates
            .render(EMAIL_PLAIN, context! { heading, message })?)
    }

    fn render_html(&self, heading: &str, message: &str) -> Result<String, MailError> {
        let message = html_paragraphs(message);
        Ok(self
            .templates
            .render(EMAIL_HTML, context! { heading, message })?)
    }
}

#[async_trait]
impl TrackingNotifier for EmailDispatcher {
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    async fn notify(&self, order: &Order, tracking_code: &str) -> Result<NotifyOutcome, MailError> {
        if !self.settings.enabled {
            debug!("Tracking email disabled");
            return Ok(NotifyOutcome::Disabled);
        }
        let Some(to) = order.recipient() else {
            debug!("Order has no billing email");
            return Ok(NotifyOutcome::NoRecipient);
        };

        let email = self.compose(order, tracking_code, to, Utc::now())?;
        self.mailer.send(email).await?;
        info!(%tracking_code, "Tracking email sent");
        Ok(NotifyOutcome::Sent)
    }
}
