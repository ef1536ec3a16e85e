//! CLI entry point - the composition root.
//!
//! This is the only place where infrastructure is wired together: the
//! OpenAI-backed provider is built, the VSOCK listener is bound, and the
//! accept loop runs until the process is terminated. A failed bind
//! propagates out of `main` and ends the process.

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vschat_core::CompletionPort;
use vschat_proxy::openai::OpenAiProvider;
use vschat_proxy::server::{self, ServerConfig};

mod parser;

use parser::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let provider: Arc<dyn CompletionPort> = Arc::new(OpenAiProvider::new(cli.api_base.clone())?);
    info!(api_base = %cli.api_base, "forwarding to completion provider");

    let config = ServerConfig {
        port: cli.port,
        backlog: cli.backlog,
    };
    let listener = server::bind(&config)?;

    server::serve(listener, provider).await
}
