//! Sender and recipient

use serde::{Deserialize, Serialize};

/// A sender or recipient of an email
///
/// The address format is checked by the provider, not locally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// The email address
    pub email: String,

    /// The display name
    pub name: String,
}

impl Contact {
    /// Create a new contact
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }
}
