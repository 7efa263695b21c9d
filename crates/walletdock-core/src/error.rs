//! Error types for the wallet session core.
//!
//! Each domain has its own error enum:
//!
//! - [`ConnectError`] - Connect attempts routed through the provider registry
//! - [`ProviderFailure`] - Raw failures reported by a wallet backend
//! - [`SessionError`] - Validation of session records
//! - [`StorageError`] - Session storage backends

use thiserror::Error;

/// JSON-RPC error code wallets use when the user declines a request (EIP-1193).
pub const USER_REJECTED_CODE: i64 = 4001;

/// Errors surfaced by a connect attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// The selected live provider is not injected into the host environment.
    #[error("{provider} is not installed")]
    ProviderUnavailable {
        provider: String,
        install_url: Option<String>,
    },
    /// The user declined the connection prompt.
    #[error("User rejected the connection request")]
    UserRejected,
    /// The provider call failed for any other reason.
    #[error("{0}")]
    ProviderError(String),
    /// Another connect attempt is still in flight.
    #[error("A wallet connection is already in progress")]
    Busy,
}

/// Failure reported by a [`WalletBackend`](crate::provider::WalletBackend) call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderFailure {
    /// User denied the permission prompt
    #[error("request rejected by user")]
    Rejected,
    /// Any other failure, with the provider's message when it had one
    #[error("{}", .0.as_deref().unwrap_or("provider request failed"))]
    Failed(Option<String>),
}

impl ProviderFailure {
    /// Classify a provider error by its EIP-1193 code and message.
    pub fn from_code(code: Option<i64>, message: Option<String>) -> Self {
        match code {
            Some(USER_REJECTED_CODE) => Self::Rejected,
            _ => Self::Failed(message.filter(|m| !m.trim().is_empty())),
        }
    }
}

/// Session record validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Persisted content is not a well-formed wallet record.
    #[error("malformed session data: {0}")]
    Malformed(String),
    /// A wallet record must carry an account address.
    #[error("wallet record has an empty address")]
    EmptyAddress,
}

/// Session storage backend errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage is not available in this environment.
    #[error("session storage not available")]
    Unavailable,
    /// Failed to write a value.
    #[error("failed to write to session storage")]
    WriteFailed,
}
