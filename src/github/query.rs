//! The external-identities query document

use serde_json::{json, Value};

/// Default endpoint for GitHub's GraphQL API
pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Query for the linked identities of one organization, one page per call.
///
/// Takes `org` (required) and `cursor` (null on the first page). Page size
/// is pinned at 100, the service maximum for this connection.
pub const EXTERNAL_IDENTITIES_QUERY: &str = r"
query($org: String!, $cursor: String) {
  organization(login: $org) {
    samlIdentityProvider {
      externalIdentities(first: 100, after: $cursor) {
        pageInfo {
          hasNextPage
          endCursor
        }
        edges {
          node {
            user {
              login
            }
            samlIdentity {
              nameId
            }
            scimIdentity {
              username
            }
          }
        }
      }
    }
  }
}
";

/// Build the POST body for one page fetch
pub fn request_body(org: &str, cursor: Option<&str>) -> Value {
    json!({
        "query": EXTERNAL_IDENTITIES_QUERY,
        "variables": {
            "org": org,
            "cursor": cursor,
        },
    })
}
