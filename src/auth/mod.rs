//! Bearer token authentication boundary.
//!
//! Token acquisition (the OAuth client-credentials exchange, caching,
//! refresh) is a collaborator concern, not part of this crate. Endpoints
//! depend on the [`Bearer`] trait and request a valid token at call time;
//! they never cache tokens themselves.

use std::fmt;

use thiserror::Error;

use crate::BoxFuture;

/// Errors surfaced by a [`Bearer`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A valid access token could not be obtained.
    #[error("could not obtain a PayPal access token: {reason}")]
    TokenUnavailable {
        /// Why the token could not be obtained.
        reason: String,
    },
}

/// A bearer access token for the `Authorization` header.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying
/// `BearerToken(*****)` instead of the credential.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(*****)")
    }
}

/// Supplies a valid bearer token on demand.
///
/// Implementations own refreshing and caching. The trait is object safe so
/// endpoints can hold an `Arc<dyn Bearer>`.
pub trait Bearer: Send + Sync {
    /// Returns a token valid for an immediate API call.
    fn bearer(&self) -> BoxFuture<'_, Result<BearerToken, AuthError>>;
}

/// A [`Bearer`] that always hands out one fixed token.
///
/// Useful when token management lives entirely outside the crate, and in
/// tests.
///
/// # Example
///
/// ```rust
/// use paypal_checkout::auth::StaticBearer;
///
/// let bearer = StaticBearer::new("A21AAF...token");
/// # let _ = bearer;
/// ```
#[derive(Debug, Clone)]
pub struct StaticBearer {
    token: BearerToken,
}

impl StaticBearer {
    /// Creates a provider around a fixed token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: BearerToken::new(token),
        }
    }
}

impl Bearer for StaticBearer {
    fn bearer(&self) -> BoxFuture<'_, Result<BearerToken, AuthError>> {
        let token = self.token.clone();
        Box::pin(async move { Ok(token) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_debug_masks_value() {
        let token = BearerToken::new("secret-token");
        assert_eq!(format!("{token:?}"), "BearerToken(*****)");
    }

    #[tokio::test]
    async fn test_static_bearer_returns_its_token() {
        let bearer = StaticBearer::new("abc");
        let token = bearer.bearer().await.unwrap();
        assert_eq!(token.as_ref(), "abc");
    }

    #[test]
    fn test_auth_error_message_names_the_reason() {
        let error = AuthError::TokenUnavailable {
            reason: "credentials rejected".to_string(),
        };
        assert!(error.to_string().contains("credentials rejected"));
    }
}
