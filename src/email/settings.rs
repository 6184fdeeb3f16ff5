//! Settings of the tracking email channel.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBJECT: &str = "[{site_title}] Your order {order_number} has been sent by Jadlog";
pub const DEFAULT_HEADING: &str = "Your order has been sent";

/// Three paragraphs separated by a line holding a single space.
pub fn default_message() -> String {
    [
        "Hi there. Your recent order on {site_title} has been sent by Jadlog.",
        "To track your delivery, use the following the tracking code: {tracking_code}",
        "The delivery service is the responsibility of the Jadlog, but if you have any questions, please contact us.",
    ]
    .join("\n \n")
}

/// Body format of the outgoing email.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailType {
    Plain,
    #[default]
    Html,
    Multipart,
}

/// The `[notification]` config section.
///
/// Blank overrides fall back to the built-in texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub subject: String,
    pub heading: String,
    pub message: String,
    pub email_type: EmailType,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            subject: String::new(),
            heading: String::new(),
            message: String::new(),
            email_type: EmailType::default(),
        }
    }
}

impl NotificationSettings {
    pub fn subject_template(&self) -> &str {
        or_default(&self.subject, DEFAULT_SUBJECT)
    }

    pub fn heading_template(&self) -> &str {
        or_default(&self.heading, DEFAULT_HEADING)
    }

    pub fn message_template(&self) -> String {
        if self.message.trim().is_empty() {
            default_message()
        } else {
            self.message.clone()
        }
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_overrides_use_defaults() {
        let settings = NotificationSettings {
            subject: "   ".into(),
            ..Default::default()
        };
        assert!(settings.enabled);
        assert_eq!(settings.subject_template(), DEFAULT_SUBJECT);
        assert_eq!(settings.heading_template(), DEFAULT_HEADING);
        assert_eq!(settings.email_type, EmailType::Html);
        assert!(settings.message_template().contains("{tracking_code}"));
    }

    #[test]
    fn default_message_has_three_paragraphs() {
        assert_eq!(default_message().split("\n \n").count(), 3);
    }

    #[test]
    fn overrides_win() {
        let settings = NotificationSettings {
            heading: "Shipped!".into(),
            message: "Code {tracking_code}".into(),
            ..Default::default()
        };
        assert_eq!(settings.heading_template(), "Shipped!");
        assert_eq!(settings.message_template(), "Code {tracking_code}");
    }
}
