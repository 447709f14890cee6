//! Type-safe, instance-based SDK configuration.
//!
//! Configuration is built once at application start-up and passed
//! explicitly to the components that need it; there is no global registry.
//!
//! # Example
//!
//! ```rust
//! use paypal_checkout::{Environment, PayPalConfig};
//! use paypal_checkout::entities::Intent;
//!
//! let config = PayPalConfig::builder()
//!     .environment(Environment::Sandbox)
//!     .intent(Intent::Capture)
//!     .build();
//!
//! assert_eq!(config.api_host(), "https://api-m.sandbox.paypal.com");
//! ```

mod newtypes;

pub use newtypes::{ApiHost, MerchantPrefix};

use crate::entities::{Intent, MismatchBehavior, PurchaseUnitSanitizer};

/// The PayPal environment API calls are directed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// The sandbox environment for development and testing.
    #[default]
    Sandbox,
    /// The live production environment.
    Live,
}

impl Environment {
    /// The REST API host for this environment.
    #[must_use]
    pub const fn api_host(self) -> &'static str {
        match self {
            Self::Sandbox => "https://api-m.sandbox.paypal.com",
            Self::Live => "https://api-m.paypal.com",
        }
    }
}

/// Immutable configuration for the SDK.
#[derive(Debug, Clone)]
pub struct PayPalConfig {
    environment: Environment,
    host_override: Option<ApiHost>,
    merchant_prefix: MerchantPrefix,
    intent: Intent,
    mismatch_behavior: MismatchBehavior,
    mismatch_line_name: Option<String>,
}

impl PayPalConfig {
    /// Starts building a configuration.
    #[must_use]
    pub fn builder() -> PayPalConfigBuilder {
        PayPalConfigBuilder::default()
    }

    /// The configured environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// The API host: the override when one was set, otherwise the
    /// environment's default host.
    #[must_use]
    pub fn api_host(&self) -> &str {
        self.host_override
            .as_ref()
            .map_or_else(|| self.environment.api_host(), ApiHost::as_ref)
    }

    /// The merchant prefix used in vaulted customer ids.
    #[must_use]
    pub const fn merchant_prefix(&self) -> &MerchantPrefix {
        &self.merchant_prefix
    }

    /// The payment intent used when creating orders.
    #[must_use]
    pub const fn intent(&self) -> Intent {
        self.intent
    }

    /// Builds the purchase unit sanitizer configured for this merchant.
    #[must_use]
    pub fn sanitizer(&self) -> PurchaseUnitSanitizer {
        PurchaseUnitSanitizer::new(self.mismatch_behavior, self.mismatch_line_name.clone())
    }
}

impl Default for PayPalConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`PayPalConfig`].
///
/// Every field has a sensible default, so `build` is infallible.
#[derive(Debug, Default)]
pub struct PayPalConfigBuilder {
    environment: Environment,
    host_override: Option<ApiHost>,
    merchant_prefix: Option<MerchantPrefix>,
    intent: Intent,
    mismatch_behavior: MismatchBehavior,
    mismatch_line_name: Option<String>,
}

impl PayPalConfigBuilder {
    /// Selects the PayPal environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Overrides the API host (proxy setups, mock servers in tests).
    #[must_use]
    pub fn host(mut self, host: ApiHost) -> Self {
        self.host_override = Some(host);
        self
    }

    /// Sets the merchant prefix used in vaulted customer ids.
    #[must_use]
    pub fn merchant_prefix(mut self, prefix: MerchantPrefix) -> Self {
        self.merchant_prefix = Some(prefix);
        self
    }

    /// Sets the payment intent used when creating orders.
    #[must_use]
    pub const fn intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    /// Sets the policy applied when item totals disagree with the order
    /// total.
    #[must_use]
    pub const fn mismatch_behavior(mut self, behavior: MismatchBehavior) -> Self {
        self.mismatch_behavior = behavior;
        self
    }

    /// Sets the label of the correction line item used by
    /// [`MismatchBehavior::ExtraLine`].
    #[must_use]
    pub fn mismatch_line_name(mut self, name: impl Into<String>) -> Self {
        self.mismatch_line_name = Some(name.into());
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> PayPalConfig {
        PayPalConfig {
            environment: self.environment,
            host_override: self.host_override,
            merchant_prefix: self.merchant_prefix.unwrap_or_default(),
            intent: self.intent,
            mismatch_behavior: self.mismatch_behavior,
            mismatch_line_name: self.mismatch_line_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_sandbox_and_capture() {
        let config = PayPalConfig::default();
        assert_eq!(config.environment(), Environment::Sandbox);
        assert_eq!(config.api_host(), "https://api-m.sandbox.paypal.com");
        assert_eq!(config.intent(), Intent::Capture);
        assert_eq!(config.merchant_prefix().as_ref(), "ppcp");
    }

    #[test]
    fn test_live_environment_host() {
        let config = PayPalConfig::builder()
            .environment(Environment::Live)
            .build();
        assert_eq!(config.api_host(), "https://api-m.paypal.com");
    }

    #[test]
    fn test_host_override_wins_over_environment() {
        let config = PayPalConfig::builder()
            .environment(Environment::Live)
            .host(ApiHost::new("http://127.0.0.1:9090").unwrap())
            .build();
        assert_eq!(config.api_host(), "http://127.0.0.1:9090");
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let config = PayPalConfig::builder()
            .merchant_prefix(MerchantPrefix::new("acme").unwrap())
            .intent(Intent::Authorize)
            .mismatch_behavior(crate::entities::MismatchBehavior::Ditch)
            .mismatch_line_name("Cart total")
            .build();

        assert_eq!(config.merchant_prefix().as_ref(), "acme");
        assert_eq!(config.intent(), Intent::Authorize);
    }
}
