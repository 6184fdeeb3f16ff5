/// A rendered email ready for a [`Mailer`](super::Mailer).
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub heading: String,
    pub body: EmailBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmailBody {
    Plain(String),
    Html(String),
    Multipart { plain: String, html: String },
}

impl EmailBody {
    pub fn plain(&self) -> Option<&str> {
        match self {
            EmailBody::Plain(text) | EmailBody::Multipart { plain: text, .. } => Some(text),
            EmailBody::Html(_) => None,
        }
    }

    pub fn html(&self) -> Option<&str> {
        match self {
            EmailBody::Html(html) | EmailBody::Multipart { html, .. } => Some(html),
            EmailBody::Plain(_) => None,
        }
    }
}
