//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Export command arguments.
#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Emit single-line JSON regardless of configuration
    #[arg(long)]
    pub compact: bool,
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Student id, or part of a name when searching by name
    pub query: String,

    /// Field to search on
    #[arg(short, long, value_enum, default_value = "id")]
    pub by: SearchField,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Record field used by the search command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SearchField {
    /// Exact student id
    #[default]
    Id,
    /// Case-insensitive name substring
    Name,
}
