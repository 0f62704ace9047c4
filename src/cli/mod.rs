//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod account;
pub mod algorithm;
pub mod args;
pub mod auth;
pub mod completions;
pub mod dataset;
pub mod preference;
pub mod resources;
pub mod status;

pub use args::{ListArgs, OutputFormat};

use crate::client::models::Gender;
use crate::prefs::{Locale, ThemeMode};

/// mhflop CLI - companion for the MHFL federated learning platform
#[derive(Parser, Debug)]
#[command(name = "mhflop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "MHFLOP_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "MHFLOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "MHFLOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in to the MHFL platform
    Login {
        /// Username (prompted when omitted)
        #[arg(long)]
        username: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, env = "MHFLOP_PASSWORD", hide_env = true)]
        password: Option<String>,

        /// Captcha code (prompted when omitted)
        #[arg(long)]
        captcha_code: Option<String>,

        /// Keep the login across reboots
        #[arg(long)]
        remember: bool,
    },

    /// Sign out and evict stored credentials
    Logout,

    /// Register a new account
    Register,

    /// Reset a forgotten password
    Reset,

    /// Show authentication and configuration status
    Status,

    /// Display version information
    Version,

    /// Manage accounts
    #[command(subcommand)]
    Account(AccountCommands),

    /// Manage the algorithm catalog
    #[command(subcommand)]
    Algorithm(AlgorithmCommands),

    /// Manage the dataset catalog
    #[command(subcommand)]
    Dataset(DatasetCommands),

    /// Show backend host resource usage
    Resources,

    /// Get or set the theme mode
    Theme {
        /// New theme mode; prints the current one when omitted
        mode: Option<ThemeMode>,
    },

    /// Get or set the display locale
    Locale {
        /// New locale; prints the current one when omitted
        locale: Option<Locale>,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        shell: Shell,
    },
}

/// Account operations
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Show the currently signed-in account
    Info,

    /// Update the current account
    Update {
        /// New username
        #[arg(long)]
        username: Option<String>,

        /// New gender
        #[arg(long, value_enum)]
        gender: Option<Gender>,

        /// New telephone number
        #[arg(long)]
        telephone: Option<String>,

        /// New birthday (yyyy-MM-dd)
        #[arg(long)]
        birthday: Option<String>,
    },

    /// Upload an avatar image
    Avatar {
        /// Path to the image file
        path: std::path::PathBuf,
    },

    /// List accounts (admin)
    List {
        #[command(flatten)]
        filters: ListArgs,
    },

    /// Create an account with the default password (admin)
    Create {
        /// Username
        #[arg(long)]
        username: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Telephone number
        #[arg(long)]
        telephone: String,
    },

    /// Soft-delete an account (admin)
    Delete {
        /// Account id
        id: u64,
    },
}

/// Algorithm catalog operations
#[derive(Subcommand, Debug)]
pub enum AlgorithmCommands {
    /// List registered algorithms
    List {
        #[command(flatten)]
        filters: ListArgs,
    },

    /// Register a new algorithm
    Create {
        /// Algorithm name
        name: String,
    },

    /// Rename an algorithm
    Update {
        /// Algorithm id
        id: u64,

        /// New name
        name: String,
    },

    /// Soft-delete an algorithm
    Delete {
        /// Algorithm id
        id: u64,
    },
}

/// Dataset catalog operations
#[derive(Subcommand, Debug)]
pub enum DatasetCommands {
    /// List registered datasets
    List {
        #[command(flatten)]
        filters: ListArgs,
    },

    /// Register a new dataset
    Create {
        /// Dataset name
        name: String,
    },

    /// Rename a dataset
    Update {
        /// Dataset id
        id: u64,

        /// New name
        name: String,
    },

    /// Soft-delete a dataset
    Delete {
        /// Dataset id
        id: u64,
    },
}
