//! Error types for SDK configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation.
//!
//! # Example
//!
//! ```rust
//! use paypal_checkout::{ApiHost, ConfigError};
//!
//! let result = ApiHost::new("api-m.paypal.com");
//! assert!(matches!(result, Err(ConfigError::InvalidApiHost { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API host URL is invalid.
    #[error("Invalid API host '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api-m.sandbox.paypal.com').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Merchant prefix cannot be empty.
    #[error("Merchant prefix cannot be empty. Please provide the prefix used in vaulted customer ids (e.g., 'ppcp').")]
    EmptyMerchantPrefix,
}
