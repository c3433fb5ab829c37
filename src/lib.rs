//! # saml-roster
//!
//! Report the SAML and SCIM identity linkages of a GitHub organization.
//!
//! One invocation walks the organization's cursor-paginated external
//! identities via the GraphQL API, normalizes each record against missing
//! sub-fields, and renders the aggregated roster as a table, JSON report,
//! or plain lines.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use saml_roster::auth::Credential;
//! use saml_roster::engine::RosterEngine;
//! use saml_roster::github::{QueryExecutor, GITHUB_GRAPHQL_URL};
//! use saml_roster::http::HttpClient;
//! use saml_roster::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = HttpClient::new().with_credential(Credential::token("ghp_..."));
//!     let executor = QueryExecutor::new(client, GITHUB_GRAPHQL_URL, "acme")?;
//!     let roster = RosterEngine::new(executor).collect_all().await?;
//!
//!     for record in &roster {
//!         println!("{}", record.login_display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        CLI / Runner                       │
//! │        parse args → collect_all() → render → exit         │
//! └───────────────────────────┬───────────────────────────────┘
//!                             │
//! ┌──────────┬────────────────┴──────────┬───────────────────┐
//! │  Engine  │         Executor          │      Output       │
//! ├──────────┼───────────────────────────┼───────────────────┤
//! │ Cursor   │ GraphQL query             │ Table             │
//! │ loop     │ Shape validation          │ JSON report       │
//! │ Roster   │ Null-safe extraction      │ Plain lines       │
//! └──────────┴───────────────────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Normalized record and page types
pub mod types;

/// Credential handling
pub mod auth;

/// HTTP transport
pub mod http;

/// GitHub GraphQL query executor
pub mod github;

/// Pagination engine
pub mod engine;

/// Report rendering
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{LinkageRecord, Page, MISSING};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
