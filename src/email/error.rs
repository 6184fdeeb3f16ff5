use thiserror::Error;

/// Errors raised while composing or sending an email.
#[derive(Debug, Error)]
pub enum MailError {
    /// The transport refused or failed to deliver.
    #[error("Mail transport failed: {0}")]
    Transport(String),

    #[error("Email template error: {0}")]
    Template(String),
}

impl From<minijinja::Error> for MailError {
    fn from(e: minijinja::Error) -> Self {
        MailError::Template(e.to_string())
    }
}
