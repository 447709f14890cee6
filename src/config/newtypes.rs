//! Validated newtype wrappers for configuration values.

use crate::error::ConfigError;

/// A validated PayPal API host URL.
///
/// Requires an absolute `http(s)` URL; a trailing slash is normalized away
/// so endpoint paths can always be appended with a single `/`.
///
/// # Example
///
/// ```rust
/// use paypal_checkout::ApiHost;
///
/// let host = ApiHost::new("https://api-m.sandbox.paypal.com/").unwrap();
/// assert_eq!(host.as_ref(), "https://api-m.sandbox.paypal.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost(String);

impl ApiHost {
    /// Creates a new validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] when the URL lacks an
    /// `http://` or `https://` scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::InvalidApiHost { url });
        }
        Ok(Self(url.trim_end_matches('/').to_string()))
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The merchant prefix used in vaulted customer ids.
///
/// Vault webhooks deliver customer ids in the composite form
/// `<prefix>-<numericId>`; this newtype carries the expected prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerchantPrefix(String);

impl MerchantPrefix {
    /// Creates a new validated merchant prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyMerchantPrefix`] if the prefix is empty.
    pub fn new(prefix: impl Into<String>) -> Result<Self, ConfigError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(ConfigError::EmptyMerchantPrefix);
        }
        Ok(Self(prefix))
    }
}

impl AsRef<str> for MerchantPrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Default for MerchantPrefix {
    fn default() -> Self {
        Self("ppcp".to_string())
    }
}
