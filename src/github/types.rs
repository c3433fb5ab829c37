//! Wire types for the external-identities response
//!
//! Every level that the service may return as null is an `Option`, so a
//! malformed or partial response can never fault during decoding; shape
//! validation decides afterwards which absences are terminal.

use serde::Deserialize;

/// Top-level GraphQL response envelope
#[derive(Debug, Deserialize)]
pub struct QueryEnvelope {
    /// Query data, null when the whole query failed
    pub data: Option<QueryData>,
    /// Service-reported errors, present alongside or instead of data
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

/// One error entry from the envelope's `errors` array
#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    /// Human-readable message from the service
    pub message: String,
}

/// `data` object
#[derive(Debug, Deserialize)]
pub struct QueryData {
    /// Null when the org name is wrong or not visible to the credential
    pub organization: Option<Organization>,
}

/// `data.organization`
#[derive(Debug, Deserialize)]
pub struct Organization {
    /// Null when the org has no SAML identity provider configured
    #[serde(rename = "samlIdentityProvider")]
    pub saml_identity_provider: Option<SamlIdentityProvider>,
}

/// `data.organization.samlIdentityProvider`
#[derive(Debug, Deserialize)]
pub struct SamlIdentityProvider {
    /// The identity connection; null when the credential lacks admin scope
    #[serde(rename = "externalIdentities")]
    pub external_identities: Option<ExternalIdentities>,
}

/// The identity connection: pagination footer plus edges
#[derive(Debug, Deserialize)]
pub struct ExternalIdentities {
    #[serde(rename = "pageInfo")]
    pub page_info: Option<PageInfo>,
    /// A null or absent edge list is an empty page, not a shape violation
    pub edges: Option<Vec<IdentityEdge>>,
}

/// Pagination footer for cursor-based pagination
#[derive(Debug, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "endCursor")]
    pub end_cursor: Option<String>,
}

/// One edge of the identity connection
#[derive(Debug, Deserialize)]
pub struct IdentityEdge {
    pub node: Option<IdentityNode>,
}

/// One external identity
#[derive(Debug, Deserialize)]
pub struct IdentityNode {
    pub user: Option<UserRef>,
    #[serde(rename = "samlIdentity")]
    pub saml_identity: Option<SamlIdentityRef>,
    #[serde(rename = "scimIdentity")]
    pub scim_identity: Option<ScimIdentityRef>,
}

/// Linked user account
#[derive(Debug, Deserialize)]
pub struct UserRef {
    pub login: Option<String>,
}

/// SAML assertion attributes
#[derive(Debug, Deserialize)]
pub struct SamlIdentityRef {
    #[serde(rename = "nameId")]
    pub name_id: Option<String>,
}

/// SCIM provisioning attributes
#[derive(Debug, Deserialize)]
pub struct ScimIdentityRef {
    pub username: Option<String>,
}
