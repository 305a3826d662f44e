//! Command-line message arguments

use std::{num::NonZeroU64, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::domain::mail::{Attachment, Contact, EmailAnswer, Mail, Mailer, Message};

/// The message to send, as command-line arguments / environment variables
#[derive(Clone, Debug, Default, PartialEq, Eq, Parser)]
pub struct SendMailArgs {
    /// Recipient address
    #[clap(long)]
    pub to: String,

    /// Recipient display name
    #[clap(long, default_value = "")]
    pub to_name: String,

    /// Sender address
    #[clap(long, env = "RUSENDER_FROM")]
    pub from: String,

    /// Sender display name
    #[clap(long, env = "RUSENDER_FROM_NAME", default_value = "")]
    pub from_name: String,

    /// Subject line
    #[clap(long, default_value = "")]
    pub subject: String,

    /// Preheader text
    #[clap(long)]
    pub preview_title: Option<String>,

    /// Stored template to render
    #[clap(long)]
    pub template_id: Option<u64>,

    /// Template variable, as `key=value`
    #[clap(long = "param", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// Custom header, as `name=value`
    #[clap(long = "header", value_parser = parse_key_value)]
    pub headers: Vec<(String, String)>,

    /// File to attach
    #[clap(long = "attach")]
    pub attachments: Vec<PathBuf>,

    /// HTML body
    #[clap(long)]
    pub html: Option<String>,

    /// Plain text body
    #[clap(long)]
    pub text: Option<String>,

    /// Carbon copy address
    #[clap(long)]
    pub cc: Option<String>,

    /// Blind carbon copy address
    #[clap(long)]
    pub bcc: Option<String>,

    /// Idempotency key
    #[clap(long, conflicts_with = "generate_idempotency_key")]
    pub idempotency_key: Option<String>,

    /// Generate a fresh idempotency key
    #[clap(long)]
    pub generate_idempotency_key: bool,
}

impl SendMailArgs {
    /// Build the message, reading attachments from disk.
    pub fn into_message(self) -> Result<Message> {
        let mut mail = Mail {
            preview_title: self.preview_title,
            id_template_mail_user: self.template_id.and_then(NonZeroU64::new),
            html: self.html,
            text: self.text,
            cc: self.cc,
            bcc: self.bcc,
            ..Mail::new(
                Contact::new(self.to, self.to_name),
                Contact::new(self.from, self.from_name),
                self.subject,
            )
        };

        for (key, value) in self.params {
            mail = mail.with_param(key, value);
        }

        for (name, value) in self.headers {
            mail = mail.with_header(name, value);
        }

        for path in self.attachments {
            let attachment = Attachment::from_path(&path)
                .with_context(|| format!("failed to attach {}", path.display()))?;
            mail = mail.with_attachment(attachment);
        }

        let message = Message::new(mail);

        Ok(match (self.idempotency_key, self.generate_idempotency_key) {
            (Some(key), _) => message.with_idempotency_key(key),
            (None, true) => message.with_generated_idempotency_key(),
            (None, false) => message,
        })
    }
}

/// Build a message from `args` and send it through `mailer`.
pub async fn send_mail<M: Mailer>(mailer: &M, args: SendMailArgs) -> Result<EmailAnswer> {
    let message = args.into_message()?;

    info!(
        to = %message.mail.to.email,
        template = ?message.mail.template_id(),
        "sending message"
    );

    Ok(mailer.send(&message).await?)
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got \"{raw}\""))
}
