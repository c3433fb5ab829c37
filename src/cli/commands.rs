//! CLI arguments

use crate::github::GITHUB_GRAPHQL_URL;
use clap::{Parser, ValueEnum};

/// Report the SAML and SCIM identity linkages of a GitHub organization
#[derive(Parser, Debug)]
#[command(name = "saml-roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Organization to report on
    pub org: String,

    /// Personal access token with org admin scope
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// GraphQL endpoint (override for GitHub Enterprise or testing)
    #[arg(long, default_value = GITHUB_GRAPHQL_URL)]
    pub url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal table
    Table,
    /// JSON report with run metadata
    Json,
    /// Tab-separated lines for piping
    Plain,
}
