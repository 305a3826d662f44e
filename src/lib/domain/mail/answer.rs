//! Provider responses

use serde::{Deserialize, Serialize};

/// Successful send response
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAnswer {
    /// Provider-assigned identifier of the accepted send
    pub uuid: String,
}

/// Error payload returned by the provider with any non-201 status
///
/// Both fields default when absent, so `{"message":"..."}` still parses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// The status code reported by the provider
    #[serde(default)]
    pub status_code: u16,

    /// The error message
    #[serde(default)]
    pub message: String,
}
