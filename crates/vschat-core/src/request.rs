//! Inbound request domain type.

/// Authorization scheme prefix expected by the validator.
pub const BEARER_PREFIX: &str = "Bearer ";

/// A single decoded client request.
///
/// Built by the wire codec from one inbound frame, immutable once built,
/// and scoped to one connection's lifetime. The `authorization` value is
/// synthesized header-style (`"Bearer <credential>"`) even though no real
/// header transport exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Header-style authorization value (`"Bearer <credential>"`).
    pub authorization: String,
    /// User message to complete.
    pub message: String,
    /// Requested model name.
    pub model: String,
}

impl Request {
    /// Build a request from a raw credential, synthesizing the
    /// authorization value.
    #[must_use]
    pub fn from_credential(
        credential: &str,
        message: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            authorization: format!("{BEARER_PREFIX}{credential}"),
            message: message.into(),
            model: model.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesizes_bearer_authorization() {
        let request = Request::from_credential("sk-abc", "Hello", "gpt-4");
        assert_eq!(request.authorization, "Bearer sk-abc");
        assert_eq!(request.message, "Hello");
        assert_eq!(request.model, "gpt-4");
    }

    #[test]
    fn empty_credential_still_gets_prefix() {
        let request = Request::from_credential("", "Hello", "gpt-4");
        assert_eq!(request.authorization, "Bearer ");
    }
}
