//! Endpoint selection

use std::fmt;

use super::Mail;

/// The provider endpoint a mail is posted to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// Plain send with an inline body
    Send,

    /// Server-side rendering of a stored template
    SendByTemplate,
}

impl Endpoint {
    /// Pick the endpoint for a mail: templated mails go to [`Endpoint::SendByTemplate`].
    pub fn for_mail(mail: &Mail) -> Self {
        match mail.template_id() {
            Some(_) => Self::SendByTemplate,
            None => Self::Send,
        }
    }

    /// Path appended to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::Send => "/send",
            Self::SendByTemplate => "/send-by-template",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
