use std::fmt;

use thiserror::Error;

/// Why an identity was denied. These are policy outcomes, not system
/// faults; no other failure kind originates in the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DenyReason {
    /// The email matched a blocked address or a blocked domain.
    EmailRestricted,
    /// The first or last name matched the respective blocked-name list.
    NameRestricted,
}

impl DenyReason {
    /// Stable snake_case name, used as the `reason` field of audit events.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmailRestricted => "email_restricted",
            Self::NameRestricted => "name_restricted",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A refused evaluation: the reason plus the resolved user-facing message.
///
/// Implements [`std::error::Error`] so callers guarding a fallible operation
/// can propagate it directly with `?`; the `Display` output is the
/// user-facing message itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Denial {
    reason: DenyReason,
    message: String,
}

impl Denial {
    pub(crate) fn new(reason: DenyReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn reason(&self) -> DenyReason {
        self.reason
    }

    /// The user-facing message resolved during evaluation.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The HTTP status an API integration maps this denial to.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        403
    }
}

/// The outcome of one policy evaluation.
///
/// Consumed immediately by the caller to decide whether the guarded
/// operation proceeds; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// The identity passed every active check.
    Allow,
    /// The identity violated a blocklist rule.
    Deny(Denial),
}

impl Decision {
    pub(crate) fn deny(reason: DenyReason, message: impl Into<String>) -> Self {
        Self::Deny(Denial::new(reason, message))
    }

    #[must_use]
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    #[must_use]
    pub fn is_deny(&self) -> bool {
        matches!(self, Self::Deny(_))
    }

    /// The denial, if this decision refused the identity.
    #[must_use]
    pub fn denial(&self) -> Option<&Denial> {
        match self {
            Self::Allow => None,
            Self::Deny(denial) => Some(denial),
        }
    }

    /// Convert into the error-propagation form used by guard callers.
    ///
    /// # Errors
    ///
    /// Returns the [`Denial`] when the decision is `Deny`.
    pub fn into_result(self) -> Result<(), Denial> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(denial) => Err(denial),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Deny(denial) => write!(f, "deny ({}): {}", denial.reason(), denial.message()),
        }
    }
}
