//! Email sending module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

mod answer;
mod attachment;
mod contact;
mod endpoint;
mod errors;
mod message;
mod validation;

pub use answer::{EmailAnswer, ErrorResponse};
pub use attachment::Attachment;
pub use contact::Contact;
pub use endpoint::Endpoint;
pub use errors::{LocalError, SendError, ValidationError};
pub use message::{Mail, Message};

/// Email delivery service
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send a single message.
    ///
    /// # Arguments
    /// * `message` - The [`Message`] to deliver.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing the provider's [`EmailAnswer`] if the message was
    /// accepted, or an [`Err`] containing a [`SendError`] describing a local or remote failure.
    async fn send(&self, message: &Message) -> Result<EmailAnswer, SendError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, message: &Message) -> Result<EmailAnswer, SendError>;
    }
}
