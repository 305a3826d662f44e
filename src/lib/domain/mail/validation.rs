//! Client-side message validation

use super::{Message, ValidationError};

impl Message {
    /// Check the message before sending it.
    ///
    /// Rules are applied in order and the first failure is returned:
    /// 1. both addresses are present
    /// 2. the addresses differ
    /// 3. without a template, an HTML or text body is present
    ///
    /// Everything else (address format, subject, attachment encoding) is left to the provider.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mail = &self.mail;

        if mail.to.email.is_empty() || mail.from.email.is_empty() {
            return Err(ValidationError::MissingAddress);
        }

        if mail.to.email == mail.from.email {
            return Err(ValidationError::SameAddress);
        }

        if mail.template_id().is_none() && !mail.has_body() {
            return Err(ValidationError::MissingBody);
        }

        Ok(())
    }
}
