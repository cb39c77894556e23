use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kubecheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Verify installed Kubernetes tooling against expected versions")]
#[command(long_about = "A CLI tool that runs `kubectl version` (or reads captured output), extracts the Client and Server major/minor version components, and warns when they do not match the versions your cluster configuration expects.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check kubectl client and server versions against expected values
    Check {
        /// Expected client version (overrides config)
        #[arg(long, value_name = "MAJOR.MINOR")]
        client: Option<String>,

        /// Expected server version (overrides config)
        #[arg(long, value_name = "MAJOR.MINOR")]
        server: Option<String>,

        /// Read version output from a file instead of running kubectl ("-" for stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Exit with a non-zero status when any check fails
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show the versions found in kubectl output without comparing
    Show {
        /// Read version output from a file instead of running kubectl ("-" for stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
