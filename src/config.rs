//! Client configuration.
//!
//! Everything comes from command-line flags; there is no config file.

use crate::{DEFAULT_HOST, DEFAULT_PORT};
use clap::Parser;

/// Command-line arguments for the client
#[derive(Parser, Debug)]
#[command(name = "flashkv-cli")]
#[command(version)]
#[command(about = "Interactive client for FlashKV and other Redis-compatible servers", long_about = None)]
pub struct CliArgs {
    /// Hostname or IP address of the server
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port number of the server
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error); logs go to stderr
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: "warn".to_string(),
        }
    }
}

impl From<CliArgs> for Config {
    fn from(args: CliArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            log_level: args.log_level,
        }
    }
}

impl Config {
    /// Parse configuration from command-line arguments
    pub fn from_args() -> Self {
        Self::from(CliArgs::parse())
    }

    /// Returns the server address as a string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::from(CliArgs::try_parse_from(args).unwrap())
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["flashkv-cli"]);
        assert_eq!(config, Config::default());
        assert_eq!(config.address(), "127.0.0.1:6379");
    }

    #[test]
    fn test_host_and_port() {
        let config = parse(&["flashkv-cli", "--host", "10.0.0.5", "-p", "6380"]);
        assert_eq!(config.address(), "10.0.0.5:6380");

        let config = parse(&["flashkv-cli", "--port", "7000", "--log-level", "debug"]);
        assert_eq!(config.port, 7000);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_port() {
        assert!(CliArgs::try_parse_from(["flashkv-cli", "-p", "70000"]).is_err());
        assert!(CliArgs::try_parse_from(["flashkv-cli", "-p", "redis"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
