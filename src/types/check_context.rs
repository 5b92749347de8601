use std::fmt;

use super::decision::DenyReason;

/// The situations that require a policy decision.
///
/// Each context carries its own enabled flag, blocklist view, custom-message
/// slot, and hardcoded fallback messages in configuration. The enum is
/// closed: integrations pick the context matching the operation they guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CheckContext {
    /// Order placement by a customer without an account.
    GuestCheckout,
    /// Order placement by a logged-in customer.
    RegisteredCheckout,
    /// New customer account creation.
    CustomerRegistration,
    /// Billing address attached during payment-information save.
    BillingAddress,
}

impl CheckContext {
    /// All contexts, in evaluation-documentation order.
    pub const ALL: [Self; 4] = [
        Self::GuestCheckout,
        Self::RegisteredCheckout,
        Self::CustomerRegistration,
        Self::BillingAddress,
    ];

    /// Stable snake_case name, used as the `action` field of audit events.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GuestCheckout => "guest_checkout",
            Self::RegisteredCheckout => "registered_checkout",
            Self::CustomerRegistration => "customer_registration",
            Self::BillingAddress => "billing_address",
        }
    }

    /// The hardcoded fallback message for this context and deny reason,
    /// used when no custom message is configured.
    #[must_use]
    pub fn default_message(self, reason: DenyReason) -> &'static str {
        match (self, reason) {
            (Self::GuestCheckout, DenyReason::EmailRestricted) => {
                "Guest checkout is not allowed for this email address. \
                 Please register an account or use a different email address."
            }
            (Self::GuestCheckout, DenyReason::NameRestricted) => {
                "Guest checkout is not allowed for this customer name. \
                 Please register an account or use a different name."
            }
            (Self::RegisteredCheckout, DenyReason::EmailRestricted) => {
                "Order placement is not allowed for this email address. \
                 Please use a different email address."
            }
            (Self::RegisteredCheckout, DenyReason::NameRestricted) => {
                "Order placement is not allowed for this customer name. \
                 Please use a different name."
            }
            (Self::CustomerRegistration, DenyReason::EmailRestricted) => {
                "Account registration is not allowed for this email address. \
                 Please use a different email address."
            }
            (Self::CustomerRegistration, DenyReason::NameRestricted) => {
                "Account registration is not allowed for this customer name. \
                 Please use a different name."
            }
            (Self::BillingAddress, DenyReason::EmailRestricted) => {
                "Billing address email is restricted."
            }
            (Self::BillingAddress, DenyReason::NameRestricted) => {
                "Billing address name is restricted."
            }
        }
    }
}

impl fmt::Display for CheckContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
