//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::auth::AuthServiceError;

type TokenDigest = [u8; 32];

/// Checks bearer tokens against a single configured API token.
///
/// Only the SHA-256 digest of the configured token is held. When no token is
/// configured every bearer token is accepted, which matches deployments that
/// sit behind a gateway doing its own verification.
#[derive(Clone)]
pub struct StaticTokenAuthService {
    expected: Option<TokenDigest>,
}

impl std::fmt::Debug for StaticTokenAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenAuthService")
            .field("enforcing", &self.is_enforcing())
            .finish()
    }
}

impl StaticTokenAuthService {
    #[must_use]
    pub fn new(token: Option<&str>) -> Self {
        Self {
            expected: token
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(digest),
        }
    }

    /// Whether a configured token is being checked.
    #[must_use]
    pub fn is_enforcing(&self) -> bool {
        self.expected.is_some()
    }
}

#[async_trait]
impl AuthService for StaticTokenAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<(), AuthServiceError> {
        let Some(expected) = &self.expected else {
            return Ok(());
        };

        // Compare digests so the comparison length never depends on the input.
        if digest(bearer_token) == *expected {
            Ok(())
        } else {
            debug!("rejected bearer token");

            Err(AuthServiceError::NotFound)
        }
    }
}

fn digest(token: &str) -> TokenDigest {
    Sha256::digest(token.as_bytes()).into()
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Accepts or rejects a bearer token taken from an `Authorization` header.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<(), AuthServiceError>;
}
