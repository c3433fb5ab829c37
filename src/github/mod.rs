//! GitHub GraphQL query executor
//!
//! Issues the external-identities query against the GraphQL endpoint, one
//! page per call, and turns the wire envelope into a normalized [`Page`].
//!
//! [`Page`]: crate::types::Page

mod executor;
mod query;
mod types;

pub use executor::QueryExecutor;
pub use query::{request_body, EXTERNAL_IDENTITIES_QUERY, GITHUB_GRAPHQL_URL};
pub use types::{PageInfo, QueryEnvelope};
