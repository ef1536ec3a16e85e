//! Request validation.
//!
//! Ordering is significant: the credential-shape check runs before the
//! message-presence check, so a request violating both reports
//! `Unauthorized`. First failing check wins.

use vschat_core::{BEARER_PREFIX, Request, Response, StatusCode};

/// Borrowed view of a request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest<'a> {
    /// Credential with the scheme prefix stripped.
    pub credential: &'a str,
    /// Non-empty user message.
    pub message: &'a str,
    /// Requested model name, not yet checked against the supported set.
    pub model: &'a str,
}

/// Check a decoded request, short-circuiting to an error response on the
/// first violated rule.
///
/// Only credential *shape* is checked here; validity is discovered by the
/// provider, whose rejection surfaces as an internal error instead.
///
/// # Errors
///
/// Returns the failure `Response` to write back: `Unauthorized` when the
/// authorization value does not start with `"Bearer "`, `BadRequest` when
/// the message is empty.
pub fn validate(request: &Request) -> Result<ValidatedRequest<'_>, Response> {
    let Some(credential) = request.authorization.strip_prefix(BEARER_PREFIX) else {
        return Err(Response::failure(
            StatusCode::Unauthorized,
            "Invalid or missing API key",
        ));
    };

    if request.message.is_empty() {
        return Err(Response::failure(
            StatusCode::BadRequest,
            "Message field is required",
        ));
    }

    Ok(ValidatedRequest {
        credential,
        message: &request.message,
        model: &request.model,
    })
}
