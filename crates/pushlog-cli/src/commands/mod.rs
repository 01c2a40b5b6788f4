//! Command-line interface definition.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

pub mod completions;
pub mod scan;

/// pushlog - find commits pushed to GitHub that are missing from a repository's history.
#[derive(Debug, Parser)]
#[command(name = "pushlog", version, about, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub scan: ScanArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print results.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Options for the default scan.
#[derive(Debug, Default, Args)]
pub struct ScanArgs {
    /// GitHub user whose repositories are listed (prompted for when omitted).
    pub username: Option<String>,

    /// Scan this repository directly instead of choosing from a list.
    #[arg(short, long, value_name = "NAME")]
    pub repo: Option<String>,

    /// Print the scan report as JSON.
    #[arg(long)]
    pub json: bool,

    /// GitHub API root, e.g. https://ghe.example.com/api/v3.
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Environment variable holding the access token [default: GITHUB_TOKEN].
    #[arg(long, value_name = "NAME")]
    pub token_env: Option<String>,

    /// dotenv file to load before reading the token [default: .env].
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Config file [default: pushlog.toml].
    #[arg(long, value_name = "PATH", env = "PUSHLOG_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print shell completions to stdout.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}
