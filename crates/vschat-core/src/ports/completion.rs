//! Completion provider port.
//!
//! This port defines the interface for the downstream chat-completion
//! provider. It abstracts the upstream API details from the gateway
//! layer; the gateway collapses every failure to a single error response
//! carrying the failure's description.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when invoking the completion provider.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The provider could not be reached.
    #[error("failed to reach completion provider: {0}")]
    Transport(String),

    /// The provider answered with an error payload.
    #[error("{0}")]
    Api(String),

    /// The provider reply carried no completion text.
    #[error("malformed provider reply: {0}")]
    MalformedReply(String),
}

/// Port for turning a (credential, model, message) triple into generated
/// text.
///
/// The server assumes nothing about provider latency or failure causes
/// beyond "it may fail with a human-readable description." Credential
/// *validity* is only discovered here; the validator checks shape alone.
#[async_trait]
pub trait CompletionPort: Send + Sync + fmt::Debug {
    /// Request a completion for a single user-role message.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError` when the provider cannot be reached,
    /// rejects the request, or returns an unusable reply.
    async fn complete(
        &self,
        credential: &str,
        model: &str,
        message: &str,
    ) -> Result<String, CompletionError>;
}
