//! Command-line parser.

use clap::Parser;

use vschat_proxy::openai::DEFAULT_API_BASE;
use vschat_proxy::server::DEFAULT_BACKLOG;

/// Command-line interface for the VSOCK chat-completion gateway.
#[derive(Debug, Parser)]
#[command(name = "vschat")]
#[command(about = "Serve chat completions over a VSOCK socket")]
#[command(version)]
pub struct Cli {
    /// The local port to listen on.
    pub port: u32,

    /// Listen backlog for the VSOCK socket.
    #[arg(long, default_value_t = DEFAULT_BACKLOG)]
    pub backlog: u32,

    /// Base URL of the upstream completion API.
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
