//! Outcome of one request/response exchange.

/// Status classification for a failed exchange.
///
/// The VSOCK transport is status-blind: the byte stream carries only the
/// encoded body. The code exists as an internal signal for logging and for
/// any front end that can carry a real status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// Missing or malformed credential marker.
    Unauthorized,
    /// Structurally invalid request (missing message).
    BadRequest,
    /// Any provider-side failure.
    InternalError,
}

impl StatusCode {
    /// HTTP-equivalent numeric code, for diagnostics.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::BadRequest => 400,
            Self::InternalError => 500,
        }
    }
}

/// Result of processing one parsed request.
///
/// Produced by the validator or the gateway, consumed exactly once by the
/// wire codec for encoding. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Completion text to return to the client.
    Success {
        /// Reply body.
        reply: String,
    },
    /// Failed exchange with an internal status classification.
    Failure {
        /// Internal status, never written to the wire.
        status: StatusCode,
        /// Human-readable error forwarded to the client.
        error: String,
    },
}

impl Response {
    /// Successful exchange carrying `reply`.
    #[must_use]
    pub fn success(reply: impl Into<String>) -> Self {
        Self::Success {
            reply: reply.into(),
        }
    }

    /// Failed exchange classified as `status`.
    #[must_use]
    pub fn failure(status: StatusCode, error: impl Into<String>) -> Self {
        Self::Failure {
            status,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_http_equivalents() {
        assert_eq!(StatusCode::Unauthorized.as_u16(), 401);
        assert_eq!(StatusCode::BadRequest.as_u16(), 400);
        assert_eq!(StatusCode::InternalError.as_u16(), 500);
    }
}
