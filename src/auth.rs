//! Credential handling
//!
//! A single auth scheme survives here: the GitHub personal access token,
//! carried as an `Authorization: token <pat>` header on every request.
//! Acquisition and storage of the token are the caller's concern.

use reqwest::RequestBuilder;

/// An opaque bearer credential for the GraphQL endpoint.
///
/// The token value is never logged; `Debug` redacts it.
#[derive(Clone)]
pub struct Credential {
    token: String,
}

impl Credential {
    /// Wrap a personal access token
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Apply this credential to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(reqwest::header::AUTHORIZATION, format!("token {}", self.token))
    }

    /// Check whether the wrapped token is empty
    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential").field("token", &"***").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let cred = Credential::token("ghp_supersecret");
        let debug_str = format!("{cred:?}");
        assert!(!debug_str.contains("supersecret"));
        assert!(debug_str.contains("***"));
    }

    #[test]
    fn test_is_empty() {
        assert!(Credential::token("").is_empty());
        assert!(!Credential::token("ghp_x").is_empty());
    }
}
