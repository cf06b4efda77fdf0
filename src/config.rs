//! Server configuration
//!
//! Values come from command-line flags, falling back to `VIZDASH_*`
//! environment variables and then to [`ServerConfig::default`].

use clap::Parser;
use std::path::PathBuf;

/// Runtime configuration for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
    /// JSON dataset loaded at startup
    pub data_path: PathBuf,
    /// Tracing filter directive, e.g. `info` or `vizdash=debug`
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
            data_path: PathBuf::from("./data/jsondata.json"),
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// `address:port` string suitable for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

/// Command-line arguments of the server binary
#[derive(Debug, Parser)]
#[command(name = "vizdash-server", version, about = "Vizdash analytics API server")]
pub struct ServerArgs {
    /// Bind address
    #[arg(long, env = "VIZDASH_ADDRESS")]
    pub address: Option<String>,

    /// Listen port
    #[arg(long, env = "VIZDASH_PORT")]
    pub port: Option<u16>,

    /// Path of the JSON dataset
    #[arg(long = "data", env = "VIZDASH_DATA")]
    pub data_path: Option<PathBuf>,

    /// Log filter (overridden by RUST_LOG when set)
    #[arg(long = "log", env = "VIZDASH_LOG")]
    pub log_filter: Option<String>,
}

impl ServerArgs {
    /// Overlay the supplied arguments on the defaults
    pub fn into_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            address: self.address.unwrap_or(defaults.address),
            port: self.port.unwrap_or(defaults.port),
            data_path: self.data_path.unwrap_or(defaults.data_path),
            log_filter: self.log_filter.unwrap_or(defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_args_override_defaults() {
        let args = ServerArgs::try_parse_from(["vizdash-server", "--port", "9000", "--data", "/tmp/records.json"]).unwrap();
        let config = args.into_config();
        assert_eq!(config.port, 9000);
        assert_eq!(config.data_path, PathBuf::from("/tmp/records.json"));
        assert_eq!(config.address, "127.0.0.1");
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(ServerArgs::try_parse_from(["vizdash-server", "--port", "not-a-port"]).is_err());
    }
}
