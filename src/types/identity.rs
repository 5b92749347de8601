/// The customer-supplied fields a policy decision is made about.
///
/// All fields are optional: a guest quote may carry only an email, a billing
/// address only names. An absent field simply cannot violate the check that
/// reads it. Values are stored exactly as supplied; normalization happens at
/// match time, not here.
///
/// # Example
///
/// ```
/// use turnstile::Identity;
///
/// let identity = Identity::new()
///     .with_email("shopper@example.com")
///     .with_first_name("Alice")
///     .with_last_name("Smith");
///
/// assert_eq!(identity.email(), Some("shopper@example.com"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity {
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl Identity {
    /// An identity with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }
}
