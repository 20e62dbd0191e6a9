//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use connect_core::DEFAULT_CONNECTORS_DIR;

/// Kafka Connect reconciliation simulator - preview connector upserts without a cluster
#[derive(Parser, Debug)]
#[command(name = "connect-sim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose diagnostic logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run (defaults to `simulate`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Load connector definitions and show what would be created or updated
    ///
    /// Every regular file in the directory is read in name order. Files may
    /// hold a single connector (`name` + `config`) or a `connectors` list.
    /// No request is ever sent.
    Simulate {
        /// Directory holding connector definition files
        #[arg(short, long, default_value = DEFAULT_CONNECTORS_DIR)]
        dir: PathBuf,

        /// Replace Helm template expressions with placeholders before parsing
        #[arg(long)]
        helm_placeholders: bool,
    },

    /// Check that every YAML file under a directory parses
    ///
    /// Helm template syntax is replaced with placeholders first.
    Validate {
        /// Directory to search recursively
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Simulate {
            dir: PathBuf::from(DEFAULT_CONNECTORS_DIR),
            helm_placeholders: false,
        }
    }
}
