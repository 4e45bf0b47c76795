//! Trait abstraction for the mail relay to enable mocking in tests

use super::error::RelayError;
use crate::config::RelayCredentials;
use crate::state::FieldSet;
use async_trait::async_trait;

/// Anything that can deliver a contact form payload as an email
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailRelay: Send + Sync {
    /// Deliver the four form fields verbatim.
    ///
    /// Only success or failure matters to callers; the response body is not
    /// inspected beyond logging.
    async fn send(
        &self,
        credentials: &RelayCredentials,
        payload: &FieldSet,
    ) -> Result<(), RelayError>;
}
