//! FlashKV CLI - An Interactive Client for Redis-Compatible Servers
//!
//! This is the main entry point for the client.
//! It parses flags, sets up logging, connects and runs the prompt.

use anyhow::Context;
use flashkv_cli::config::Config;
use flashkv_cli::connection::Connection;
use flashkv_cli::session::{spawn_line_reader, Session};
use std::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let config = Config::from_args();

    // Logs go to stderr so they never interleave with replies
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!(
        version = flashkv_cli::VERSION,
        server = %config.address(),
        "Starting FlashKV CLI"
    );

    let conn = Connection::connect(&config.address())
        .await
        .with_context(|| format!("could not connect to {}", config.address()))?;

    let lines = spawn_line_reader(BufReader::new(std::io::stdin()));
    let mut session = Session::new(conn, std::io::stdout());
    session.run(lines).await?;

    info!("Session closed");
    Ok(())
}
