pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

/// Typed environment settings for the Coffee Shop client.
#[derive(Parser, Debug)]
#[command(name = "brewenv", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Target environment(s). Repeat for diff: --env development --env production
    #[arg(long, global = true, env = "BREWENV_ENV")]
    pub env: Vec<String>,

    /// Verbose output (debug diagnostics on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to project config (default: ./brewenv.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved settings of an environment
    Show {
        /// Print only this field's value (e.g. auth.clientId)
        #[arg(long)]
        field: Option<String>,
    },

    /// List available environments
    List,

    /// Validate an environment, or shape-check a settings file
    Check {
        /// Settings file to check (.json, .toml or .env)
        file: Option<String>,
    },

    /// Compare two environments
    Diff,

    /// Render an environment for other toolchains
    Export {
        /// Output format: json, toml, dotenv, ts
        #[arg(long, short, default_value = "json")]
        format: String,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Print API routes and identity-provider URLs
    Urls {
        /// Path appended to the callback URL in the login link
        #[arg(long, default_value = "")]
        callback_path: String,
    },
}
