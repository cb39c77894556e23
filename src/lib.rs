//! # Kubecheck
//!
//! A Rust-based command-line application that verifies installed Kubernetes
//! tooling against expected versions. It runs `kubectl version` (or reads
//! previously captured output), extracts the Client and Server major/minor
//! version components, and warns when they do not match what your cluster
//! configuration expects.
//!
//! ## Features
//!
//! - **Version Extraction**: Pattern-based parsing of kubectl's semi-structured output
//! - **Role Awareness**: Client and Server versions are checked independently
//! - **Flexible Input**: Live kubectl invocation, a captured file, or stdin
//! - **Configurable**: Expected versions via `.kubecheck.toml` or CLI flags
//!
//! ## Example
//!
//! ```rust
//! use kubecheck::{check_version, Role};
//!
//! let output = r#"Client Version: version.Info{Major:"1", Minor:"7", GitVersion:"v1.7.0"}"#;
//! assert_eq!(check_version(Role::Client, output, "1", "7"), None);
//! assert_eq!(
//!     check_version(Role::Client, output, "1", "6"),
//!     Some("Unexpected Client version 1.7".to_string())
//! );
//! ```

pub mod checker;
pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod handlers;

// Re-export commonly used types and functions
pub use checker::{check_version, found_version, version_match, Role};
pub use config::Config;
pub use error::{KubeCheckError, Result};
use cli::Commands;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Check {
            client,
            server,
            input,
            strict,
            format,
        } => handlers::handle_check(config, client, server, input, strict, format),
        Commands::Show { input, format } => handlers::handle_show(config, input, format),
    }
}
