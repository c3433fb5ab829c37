//! Query executor
//!
//! One network request per call: build the parameterized query, POST it,
//! validate the response shape, and extract a normalized page. Stateless
//! across calls; the pagination engine owns the cursor.

use super::query;
use super::types::{GraphqlError, IdentityEdge, QueryEnvelope};
use crate::engine::PageSource;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::types::{LinkageRecord, Page};
use async_trait::async_trait;
use url::Url;

/// Executes the external-identities query for one organization
#[derive(Debug)]
pub struct QueryExecutor {
    client: HttpClient,
    endpoint: Url,
    org: String,
}

impl QueryExecutor {
    /// Create an executor for `org` against `endpoint`.
    ///
    /// The endpoint must be an absolute URL; the client should already
    /// carry the credential.
    pub fn new(client: HttpClient, endpoint: &str, org: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client,
            endpoint: Url::parse(endpoint)?,
            org: org.into(),
        })
    }

    /// The organization this executor queries
    pub fn org(&self) -> &str {
        &self.org
    }

    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page> {
        let body = query::request_body(&self.org, cursor);
        let envelope: QueryEnvelope = self.client.post_json(self.endpoint.as_str(), &body).await?;
        extract_page(envelope)
    }
}

#[async_trait]
impl PageSource for QueryExecutor {
    async fn execute(&self, cursor: Option<&str>) -> Result<Page> {
        self.fetch_page(cursor).await
    }
}

/// Validate the envelope shape and extract the page.
///
/// Absence anywhere along `data.organization.samlIdentityProvider
/// .externalIdentities.pageInfo` is terminal and names the deepest missing
/// segment; per-record absences normalize to missing fields instead.
pub(super) fn extract_page(envelope: QueryEnvelope) -> Result<Page> {
    let detail = shape_detail(&envelope.errors);

    let data = envelope
        .data
        .ok_or_else(|| Error::shape("data", detail.clone()))?;
    let organization = data
        .organization
        .ok_or_else(|| Error::shape("organization", detail.clone()))?;
    let provider = organization
        .saml_identity_provider
        .ok_or_else(|| Error::shape("organization.samlIdentityProvider", detail.clone()))?;
    let identities = provider.external_identities.ok_or_else(|| {
        Error::shape(
            "organization.samlIdentityProvider.externalIdentities",
            detail.clone(),
        )
    })?;
    let page_info = identities.page_info.ok_or_else(|| {
        Error::shape(
            "organization.samlIdentityProvider.externalIdentities.pageInfo",
            detail,
        )
    })?;

    let records = identities
        .edges
        .unwrap_or_default()
        .into_iter()
        .map(normalize_edge)
        .collect();

    Ok(Page::new(records, page_info.has_next_page, page_info.end_cursor))
}

/// Normalize one edge, mapping every absent sub-object to a missing field.
///
/// An edge with a null node still yields a record, so the reported count
/// always matches the server's edge count.
fn normalize_edge(edge: IdentityEdge) -> LinkageRecord {
    match edge.node {
        Some(node) => LinkageRecord::new(
            node.user.and_then(|user| user.login),
            node.saml_identity.and_then(|saml| saml.name_id),
            node.scim_identity.and_then(|scim| scim.username),
        ),
        None => LinkageRecord::new(None, None, None),
    }
}

fn shape_detail(errors: &[GraphqlError]) -> String {
    if errors.is_empty() {
        "field absent or null".to_string()
    } else {
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        format!("field absent or null (service reported: {})", messages.join("; "))
    }
}
