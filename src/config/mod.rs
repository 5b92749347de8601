//! Configuration capability consumed by the evaluator.
//!
//! The evaluator never reaches into a global configuration store; it is
//! handed a [`ConfigSource`] explicitly, resolved once per evaluation call.
//! [`StaticConfig`] is the bundled in-memory implementation, keyed by the
//! same slash-separated paths the reference integration stores its settings
//! under, with per-scope overrides falling back to defaults.

use std::collections::HashMap;

use crate::{CheckContext, RuleSet};

/// Configuration paths, one per stored setting.
pub mod paths {
    /// Master switch for the whole module.
    pub const ENABLED: &str = "restrict_checkout/general/enabled";
    /// Emit an audit event for every denial.
    pub const LOGGING_ENABLED: &str = "restrict_checkout/general/logging_enabled";
    pub const RESTRICT_GUEST_CHECKOUT: &str = "restrict_checkout/general/restrict_guest_checkout";
    pub const RESTRICT_REGISTERED_CHECKOUT: &str =
        "restrict_checkout/general/restrict_registered_checkout";
    pub const RESTRICT_CUSTOMER_REGISTRATION: &str =
        "restrict_checkout/general/restrict_customer_registration";

    pub const BLOCKED_EMAILS: &str = "restrict_checkout/restricted_emails/blocked_emails";
    pub const BLOCKED_DOMAINS: &str = "restrict_checkout/restricted_emails/blocked_domains";
    pub const BLOCKED_FIRST_NAMES: &str = "restrict_checkout/restricted_emails/blocked_first_names";
    pub const BLOCKED_LAST_NAMES: &str = "restrict_checkout/restricted_emails/blocked_last_names";

    /// Billing-address checks keep their own email/domain lists.
    pub const CHECK_BILLING_ADDRESS: &str =
        "restrict_checkout/address_restrictions/check_billing_address";
    pub const BLOCKED_ADDRESS_EMAILS: &str =
        "restrict_checkout/address_restrictions/blocked_address_emails";
    pub const BLOCKED_ADDRESS_DOMAINS: &str =
        "restrict_checkout/address_restrictions/blocked_address_domains";

    pub const GUEST_CHECKOUT_MESSAGE: &str = "restrict_checkout/messages/guest_checkout_message";
    pub const REGISTERED_CHECKOUT_MESSAGE: &str =
        "restrict_checkout/messages/registered_checkout_message";
    pub const REGISTRATION_MESSAGE: &str = "restrict_checkout/messages/registration_message";
    pub const BILLING_ADDRESS_MESSAGE: &str =
        "restrict_checkout/messages/billing_address_message";
}

/// A raw configuration value as stored: string, integer, or boolean.
///
/// Feature toggles are coerced with [`as_flag`](Self::as_flag): a value is
/// enabled iff it is the string `"1"`, the integer `1`, or `true`. Anything
/// else, including an absent key, is disabled. This exact coercion is
/// load-bearing for configuration compatibility.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RawValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl RawValue {
    /// Tri-state boolean coercion: `"1"`, `1`, or `true` and nothing else.
    #[must_use]
    pub fn as_flag(&self) -> bool {
        match self {
            Self::Str(s) => s == "1",
            Self::Int(i) => *i == 1,
            Self::Bool(b) => *b,
        }
    }

    /// The string content, if this value is a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// The configuration the evaluator consults, resolved per call.
///
/// `scope` is an opaque partition key (per storefront, per site); `None`
/// selects the default scope. Implementations must be cheap to query: the
/// evaluator reads the flags and blocklists fresh on every call and caches
/// nothing.
pub trait ConfigSource {
    /// Master module switch. When false every evaluation allows.
    fn is_enabled(&self, scope: Option<&str>) -> bool;

    /// Per-context restriction switch.
    fn is_restricted(&self, context: CheckContext, scope: Option<&str>) -> bool;

    /// The blocklist view active for a context.
    fn rule_set(&self, context: CheckContext, scope: Option<&str>) -> RuleSet;

    /// The operator-configured denial message for a context, if any.
    /// Blank strings count as unset; the evaluator falls back to the
    /// context's hardcoded default.
    fn message(&self, context: CheckContext, scope: Option<&str>) -> Option<String>;

    /// Whether denials should be logged as audit events.
    fn is_logging_enabled(&self, scope: Option<&str>) -> bool;
}

/// Builder for [`StaticConfig`].
#[derive(Debug, Default)]
pub struct StaticConfigBuilder {
    defaults: HashMap<String, RawValue>,
    scopes: HashMap<String, HashMap<String, RawValue>>,
}

impl StaticConfigBuilder {
    /// Set a value in the default scope.
    #[must_use]
    pub fn set(mut self, path: &str, value: impl Into<RawValue>) -> Self {
        self.defaults.insert(path.to_owned(), value.into());
        self
    }

    /// Set a value that overrides the default within one scope.
    #[must_use]
    pub fn set_scoped(mut self, scope: &str, path: &str, value: impl Into<RawValue>) -> Self {
        self.scopes
            .entry(scope.to_owned())
            .or_default()
            .insert(path.to_owned(), value.into());
        self
    }

    #[must_use]
    pub fn build(self) -> StaticConfig {
        StaticConfig {
            defaults: self.defaults,
            scopes: self.scopes,
        }
    }
}

/// In-memory [`ConfigSource`] with per-scope overrides.
///
/// Lookups in a named scope fall back to the default scope when the scope
/// has no override for a path. Immutable once built; shareable across
/// threads.
///
/// # Example
///
/// ```
/// use turnstile::{paths, CheckContext, ConfigSource, StaticConfig};
///
/// let config = StaticConfig::builder()
///     .set(paths::ENABLED, "1")
///     .set(paths::RESTRICT_GUEST_CHECKOUT, true)
///     .set(paths::BLOCKED_DOMAINS, "spam.com\ntrash.org")
///     .build();
///
/// assert!(config.is_enabled(None));
/// let rules = config.rule_set(CheckContext::GuestCheckout, None);
/// assert!(rules.blocked_domains().contains("spam.com"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    defaults: HashMap<String, RawValue>,
    scopes: HashMap<String, HashMap<String, RawValue>>,
}

impl StaticConfig {
    #[must_use]
    pub fn builder() -> StaticConfigBuilder {
        StaticConfigBuilder::default()
    }

    /// Look up a raw value, falling back from the scope to the defaults.
    #[must_use]
    pub fn value(&self, path: &str, scope: Option<&str>) -> Option<&RawValue> {
        if let Some(scope) = scope {
            if let Some(value) = self.scopes.get(scope).and_then(|m| m.get(path)) {
                return Some(value);
            }
        }
        self.defaults.get(path)
    }

    fn flag(&self, path: &str, scope: Option<&str>) -> bool {
        self.value(path, scope).is_some_and(RawValue::as_flag)
    }

    fn text(&self, path: &str, scope: Option<&str>) -> &str {
        self.value(path, scope)
            .and_then(RawValue::as_text)
            .unwrap_or("")
    }
}

impl ConfigSource for StaticConfig {
    fn is_enabled(&self, scope: Option<&str>) -> bool {
        self.flag(paths::ENABLED, scope)
    }

    fn is_restricted(&self, context: CheckContext, scope: Option<&str>) -> bool {
        let path = match context {
            CheckContext::GuestCheckout => paths::RESTRICT_GUEST_CHECKOUT,
            CheckContext::RegisteredCheckout => paths::RESTRICT_REGISTERED_CHECKOUT,
            CheckContext::CustomerRegistration => paths::RESTRICT_CUSTOMER_REGISTRATION,
            CheckContext::BillingAddress => paths::CHECK_BILLING_ADDRESS,
        };
        self.flag(path, scope)
    }

    fn rule_set(&self, context: CheckContext, scope: Option<&str>) -> RuleSet {
        // Name lists are shared across contexts; the billing-address view
        // swaps in its own email and domain lists.
        let builder = RuleSet::builder()
            .first_names_text(self.text(paths::BLOCKED_FIRST_NAMES, scope))
            .last_names_text(self.text(paths::BLOCKED_LAST_NAMES, scope));

        let builder = match context {
            CheckContext::BillingAddress => builder
                .emails_text(self.text(paths::BLOCKED_ADDRESS_EMAILS, scope))
                .domains_text(self.text(paths::BLOCKED_ADDRESS_DOMAINS, scope)),
            _ => builder
                .emails_text(self.text(paths::BLOCKED_EMAILS, scope))
                .domains_text(self.text(paths::BLOCKED_DOMAINS, scope)),
        };

        builder.build()
    }

    fn message(&self, context: CheckContext, scope: Option<&str>) -> Option<String> {
        let path = match context {
            CheckContext::GuestCheckout => paths::GUEST_CHECKOUT_MESSAGE,
            CheckContext::RegisteredCheckout => paths::REGISTERED_CHECKOUT_MESSAGE,
            CheckContext::CustomerRegistration => paths::REGISTRATION_MESSAGE,
            CheckContext::BillingAddress => paths::BILLING_ADDRESS_MESSAGE,
        };
        self.value(path, scope)
            .and_then(RawValue::as_text)
            .map(str::to_owned)
    }

    fn is_logging_enabled(&self, scope: Option<&str>) -> bool {
        self.flag(paths::LOGGING_ENABLED, scope)
    }
}
