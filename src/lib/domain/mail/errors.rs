//! Error types for the email module

use thiserror::Error;

/// A message rejected before it reaches the network
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Sender or recipient address is empty
    #[error("email 'to' and email 'from' are required")]
    MissingAddress,

    /// Sender and recipient address are identical
    #[error("email 'to' and email 'from' cannot be the same")]
    SameAddress,

    /// Neither a template nor a body was given
    #[error("if no template is used either 'html' or 'text' must be provided")]
    MissingBody,
}

/// A failure on the client side of the exchange
#[derive(Debug, Error)]
pub enum LocalError {
    /// The message failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The message could not be encoded as JSON
    #[error("marshaling request failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The request URL could not be built from the configured base URL
    #[error("creating request failed: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The API key cannot be sent as an HTTP header value
    #[error("creating request failed: invalid API key: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    /// The request could not be delivered (connection, timeout)
    #[error("sending request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read
    #[error("reading response failed: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// A 201 response carried a body that is not an [`EmailAnswer`](super::EmailAnswer)
    #[error("parsing successful response failed: {0}")]
    ParseAnswer(#[source] serde_json::Error),
}

/// Errors returned when sending a message
#[derive(Debug, Error)]
pub enum SendError {
    /// Nothing was accepted by the provider because of a local failure
    #[error(transparent)]
    Local(#[from] LocalError),

    /// The provider answered with something other than `201 Created`
    #[error("API request failed: [{status_code}] {message}")]
    Remote {
        /// Status code from the error payload, or the HTTP status if the payload had none
        status_code: u16,

        /// Provider message, or the raw response body if it was not a JSON error payload
        message: String,
    },
}

impl SendError {
    /// Returns the remote status code, or `0` for local failures.
    pub fn status_code(&self) -> u16 {
        match self {
            SendError::Local(_) => 0,
            SendError::Remote { status_code, .. } => *status_code,
        }
    }

    /// Returns `true` if the failure happened before the provider answered.
    pub fn is_local(&self) -> bool {
        matches!(self, SendError::Local(_))
    }
}

impl From<ValidationError> for SendError {
    fn from(err: ValidationError) -> Self {
        SendError::Local(LocalError::Invalid(err))
    }
}
