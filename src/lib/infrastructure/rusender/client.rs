//! RuSender mailer implementation

use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, CONTENT_TYPE},
    StatusCode, Url,
};
use tracing::{debug, info, warn};

use crate::domain::mail::{
    EmailAnswer, Endpoint, ErrorResponse, LocalError, Mailer, Message, SendError,
};

use super::RuSenderConfig;

/// Production API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.beta.rusender.ru/api/v1/external-mails";

const API_KEY_HEADER: &str = "X-Api-Key";

/// RuSender API client
///
/// Holds only immutable configuration, so one instance can be cloned or shared between tasks
/// and used for concurrent sends. Dropping a pending [`Mailer::send`] future aborts the request.
#[derive(Clone)]
pub struct RuSenderClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl RuSenderClient {
    /// Create a new client on top of an existing HTTP client
    pub fn new(http: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Create a new client from configuration
    pub fn from_config(config: RuSenderConfig) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().build()?;
        let client = Self::new(http, config.api_key).with_base_url(config.base_url);

        Ok(match config.timeout_secs {
            Some(secs) => client.with_timeout(Duration::from_secs(secs)),
            None => client,
        })
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Limit how long a single send may take
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}{}", self.base_url, endpoint.path()))
    }
}

impl fmt::Debug for RuSenderClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuSenderClient")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl Mailer for RuSenderClient {
    async fn send(&self, message: &Message) -> Result<EmailAnswer, SendError> {
        message.validate()?;

        let payload = serde_json::to_vec(message).map_err(LocalError::Serialize)?;
        let endpoint = Endpoint::for_mail(&message.mail);
        let url = self.endpoint_url(endpoint).map_err(LocalError::from)?;
        let api_key = HeaderValue::from_str(&self.api_key).map_err(LocalError::from)?;

        debug!(%endpoint, bytes = payload.len(), "sending message");

        let mut request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, api_key)
            .body(payload);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(LocalError::Transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(LocalError::ReadBody)?;

        if status != StatusCode::CREATED {
            let error = remote_error(status, &body);
            warn!(%status, "message rejected: {}", error);

            return Err(error);
        }

        let answer: EmailAnswer =
            serde_json::from_slice(&body).map_err(LocalError::ParseAnswer)?;

        info!(uuid = %answer.uuid, "message accepted");

        Ok(answer)
    }
}

/// Translate a non-201 response into a remote error
///
/// A remote error never reports status `0`: an error payload without a `statusCode` (or with
/// `0`) takes the HTTP status instead. A body that is not an error object, `null` or a
/// `statusCode` outside the `u16` range included, is surfaced raw with the HTTP status.
fn remote_error(status: StatusCode, body: &[u8]) -> SendError {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            status_code,
            message,
        }) => SendError::Remote {
            status_code: if status_code == 0 {
                status.as_u16()
            } else {
                status_code
            },
            message,
        },
        Err(_) => SendError::Remote {
            status_code: status.as_u16(),
            message: String::from_utf8_lossy(body).into_owned(),
        },
    }
}
