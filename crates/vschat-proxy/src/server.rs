//! VSOCK connection server.
//!
//! Owns the listening socket and processes connections strictly one at a
//! time: accept, one fixed-size read, decode → validate → complete →
//! encode, one write, close. A failure on one connection never takes the
//! accept loop down.

use std::io;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio_vsock::{VMADDR_CID_ANY, VsockAddr, VsockListener};
use tracing::{debug, error, info};

use vschat_core::{CompletionPort, Response};

use crate::{codec, gateway, validate};

/// Largest frame accepted in one read. Anything beyond this is
/// truncated; the protocol has no multi-read framing.
pub const MAX_FRAME_LEN: usize = 1024;

/// Default listen backlog.
pub const DEFAULT_BACKLOG: u32 = 128;

/// Connection server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// VSOCK port to listen on.
    pub port: u32,
    /// Listen backlog.
    pub backlog: u32,
}

impl ServerConfig {
    /// Config for `port` with the default backlog.
    #[must_use]
    pub const fn new(port: u32) -> Self {
        Self {
            port,
            backlog: DEFAULT_BACKLOG,
        }
    }
}

/// Bind the listening socket on `(VMADDR_CID_ANY, port)`.
///
/// Bind-then-serve lifecycle: callers treat a failure here as fatal.
///
/// # Errors
///
/// Returns the underlying socket error when the address cannot be bound.
pub fn bind(config: &ServerConfig) -> io::Result<VsockListener> {
    let addr = VsockAddr::new(VMADDR_CID_ANY, config.port);
    let listener = VsockListener::bind(addr)?;
    info!(
        port = config.port,
        backlog = config.backlog,
        "server listening"
    );
    Ok(listener)
}

/// Accept and process connections until the process is terminated.
///
/// Connections are handled strictly sequentially: each exchange completes
/// (including the fully awaited provider call) before the next accept.
/// Accept and per-connection transport errors are logged; the loop never
/// terminates on a single connection's failure.
///
/// # Errors
///
/// Does not return under normal operation.
pub async fn serve(
    listener: VsockListener,
    provider: Arc<dyn CompletionPort>,
) -> anyhow::Result<()> {
    loop {
        let (mut stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(err) => {
                error!("accept failed: {err}");
                continue;
            }
        };
        debug!(cid = peer.cid(), port = peer.port(), "client connected");

        if let Err(err) = handle_connection(&mut stream, provider.as_ref()).await {
            error!("socket error: {err}");
        }
        // Dropping the stream closes the connection on every path.
    }
}

/// Drive one request/response exchange over `stream`.
///
/// Reads at most [`MAX_FRAME_LEN`] bytes in a single receive. Zero bytes
/// read or an undecodable frame end the exchange with no reply written.
///
/// # Errors
///
/// Returns transport-level read/write errors; the caller logs them and
/// closes the connection.
pub async fn handle_connection<S>(stream: &mut S, provider: &dyn CompletionPort) -> io::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut buf = [0_u8; MAX_FRAME_LEN];
    let read = stream.read(&mut buf).await?;
    if read == 0 {
        return Ok(());
    }

    let frame = String::from_utf8_lossy(&buf[..read]);
    debug!(frame = %frame, "received frame");

    let Some(request) = codec::decode(&frame) else {
        // Fewer than two fields: nothing to process, no reply.
        return Ok(());
    };

    let response = match validate::validate(&request) {
        Ok(valid) => gateway::complete(provider, valid).await,
        Err(rejected) => rejected,
    };

    if let Response::Failure { status, error } = &response {
        debug!(status = status.as_u16(), error = %error, "request failed");
    }

    stream.write_all(codec::encode(&response).as_bytes()).await?;
    stream.shutdown().await
}
