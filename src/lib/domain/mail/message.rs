//! Email message

use std::{collections::BTreeMap, num::NonZeroU64};

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::{Attachment, Contact};

/// A send request: the mail plus an optional idempotency key
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Deduplication token. The provider rejects identical sends carrying the same key within an
    /// hour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,

    /// The email to send
    pub mail: Mail,
}

impl Message {
    /// Create a new message without an idempotency key
    pub fn new(mail: Mail) -> Self {
        Self {
            idempotency_key: None,
            mail,
        }
    }

    /// Set the idempotency key
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Set a freshly generated, time-ordered idempotency key
    pub fn with_generated_idempotency_key(self) -> Self {
        self.with_idempotency_key(Uuid::now_v7().to_string())
    }
}

/// The email itself
///
/// Field order matches the order the provider documents, and is the order of the emitted JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mail {
    /// The recipient
    pub to: Contact,

    /// The sender
    pub from: Contact,

    /// The subject line
    pub subject: String,

    /// Preheader text shown by mail clients next to the subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_title: Option<String>,

    /// Identifier of a stored template to render server-side
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "zero_as_none"
    )]
    pub id_template_mail_user: Option<NonZeroU64>,

    /// Template variables
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,

    /// Attached files
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,

    /// Custom mail headers
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    /// The HTML body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// The plain text body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Carbon copy address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,

    /// Blind carbon copy address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,
}

impl Mail {
    /// Create a new mail with no body, template or extras
    pub fn new(to: Contact, from: Contact, subject: impl Into<String>) -> Self {
        Self {
            to,
            from,
            subject: subject.into(),
            ..Default::default()
        }
    }

    /// Returns the template id, if any.
    pub fn template_id(&self) -> Option<u64> {
        self.id_template_mail_user.map(NonZeroU64::get)
    }

    /// Returns `true` if either the HTML or the text body is non-empty.
    pub fn has_body(&self) -> bool {
        [&self.html, &self.text]
            .into_iter()
            .any(|body| body.as_deref().is_some_and(|b| !b.is_empty()))
    }

    /// Set the preheader text
    pub fn with_preview_title(mut self, title: impl Into<String>) -> Self {
        self.preview_title = Some(title.into());
        self
    }

    /// Render the mail from a stored template. An id of `0` clears the template.
    pub fn with_template(mut self, id: u64) -> Self {
        self.id_template_mail_user = NonZeroU64::new(id);
        self
    }

    /// Add a template variable
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add an attachment entry
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Add a custom header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the HTML body
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Set the plain text body
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the carbon copy address
    pub fn with_cc(mut self, cc: impl Into<String>) -> Self {
        self.cc = Some(cc.into());
        self
    }

    /// Set the blind carbon copy address
    pub fn with_bcc(mut self, bcc: impl Into<String>) -> Self {
        self.bcc = Some(bcc.into());
        self
    }
}

/// The provider treats a template id of `0` as "no template".
fn zero_as_none<'de, D>(deserializer: D) -> Result<Option<NonZeroU64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.and_then(NonZeroU64::new))
}
