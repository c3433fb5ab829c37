//! Common types used throughout saml-roster
//!
//! This module contains the normalized record and page types shared by the
//! executor, the aggregation engine, and the output layer.

use serde::Serialize;

/// Display sentinel for a field the service reported as absent or null
pub const MISSING: &str = "missing";

// ============================================================================
// Linkage Record
// ============================================================================

/// One reported identity association: a login and its federated (SAML) and
/// provisioning (SCIM) identities.
///
/// Each field is `None` when the corresponding sub-object (or its field) was
/// absent or null in the response. Normalization happens at extraction time;
/// a record never fails to construct because of a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkageRecord {
    /// GitHub login of the linked user account
    pub login: Option<String>,
    /// SAML `NameID` asserted by the identity provider
    pub saml_name_id: Option<String>,
    /// Username reported by the SCIM provisioning integration
    pub scim_username: Option<String>,
}

impl LinkageRecord {
    /// Create a record from already-normalized fields
    pub fn new(
        login: Option<String>,
        saml_name_id: Option<String>,
        scim_username: Option<String>,
    ) -> Self {
        Self {
            login,
            saml_name_id,
            scim_username,
        }
    }

    /// Login for display, with the missing sentinel applied
    pub fn login_display(&self) -> &str {
        self.login.as_deref().unwrap_or(MISSING)
    }

    /// SAML `NameID` for display, with the missing sentinel applied
    pub fn saml_display(&self) -> &str {
        self.saml_name_id.as_deref().unwrap_or(MISSING)
    }

    /// SCIM username for display, with the missing sentinel applied
    pub fn scim_display(&self) -> &str {
        self.scim_username.as_deref().unwrap_or(MISSING)
    }
}

// ============================================================================
// Page
// ============================================================================

/// The decoded result of one fetch: the records of a single page plus the
/// pagination footer. Discarded after extraction into the running roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Records in server-returned order
    pub records: Vec<LinkageRecord>,
    /// Whether the server reports further pages
    pub has_next_page: bool,
    /// Cursor to request the next page, when one exists
    pub end_cursor: Option<String>,
}

impl Page {
    /// Create a page
    pub fn new(records: Vec<LinkageRecord>, has_next_page: bool, end_cursor: Option<String>) -> Self {
        Self {
            records,
            has_next_page,
            end_cursor,
        }
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether this page carried no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_accessors_apply_sentinel() {
        let record = LinkageRecord::new(None, Some("jdoe@corp.example".to_string()), None);
        assert_eq!(record.login_display(), MISSING);
        assert_eq!(record.saml_display(), "jdoe@corp.example");
        assert_eq!(record.scim_display(), MISSING);
    }

    #[test]
    fn test_page_len() {
        let page = Page::new(
            vec![LinkageRecord::new(Some("octocat".to_string()), None, None)],
            true,
            Some("c1".to_string()),
        );
        assert_eq!(page.len(), 1);
        assert!(!page.is_empty());

        let empty = Page::new(vec![], false, None);
        assert!(empty.is_empty());
    }
}
