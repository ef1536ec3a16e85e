//! Completion gateway.
//!
//! Thin adapter between a validated request and the completion provider.
//! Every provider failure collapses to `InternalError` with its
//! description forwarded verbatim; no retry, no subtype classification.

use tracing::debug;

use vschat_core::{CompletionPort, Response, StatusCode, is_supported};

use crate::validate::ValidatedRequest;

/// Reply returned for models outside the supported set. Success-shaped:
/// the client sees a normal response body, not an error.
pub const UNSUPPORTED_MODEL_REPLY: &str = "Model not supported.";

/// Drive the provider for a validated request and normalize the outcome.
///
/// Unsupported models never reach the provider. Successful replies are
/// trimmed of surrounding whitespace before encoding.
pub async fn complete(provider: &dyn CompletionPort, request: ValidatedRequest<'_>) -> Response {
    if !is_supported(request.model) {
        debug!(model = request.model, "model not in supported set");
        return Response::success(UNSUPPORTED_MODEL_REPLY);
    }

    match provider
        .complete(request.credential, request.model, request.message)
        .await
    {
        Ok(reply) => Response::success(reply.trim()),
        Err(err) => Response::failure(StatusCode::InternalError, err.to_string()),
    }
}
