//! Mail relay failures

use thiserror::Error;

/// Why a relay call did not succeed. All variants are retryable by the user.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("mail relay unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("mail relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("mail relay call ended without reporting a result")]
    Interrupted,
}
