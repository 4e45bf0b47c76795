//! Mail relay client module for EmailJS delivery

mod client;
mod error;
mod traits;

pub use client::EmailJsClient;
pub use error::RelayError;
pub use traits::MailRelay;

#[cfg(test)]
pub use traits::MockMailRelay;
