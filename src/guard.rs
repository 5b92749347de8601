use crate::{
    evaluate, evaluate_detailed, CheckContext, ConfigSource, Decision, Denial, EvaluationReport,
    Identity, RequestKind,
};

/// Composable pre-operation guard: run the policy check, then either let the
/// guarded operation proceed or hand the caller a [`Denial`] to propagate.
///
/// Integrations construct one `Gatekeeper` over their configuration source
/// and call [`check`](Self::check) immediately before every state-mutating
/// action a context guards (cart save, order placement, account creation),
/// so a denial aborts the operation with no partial side effects.
///
/// The evaluator itself never logs; the gatekeeper emits one structured
/// audit event per denial when the configuration's logging flag is set.
///
/// # Example
///
/// ```
/// use turnstile::{paths, CheckContext, Gatekeeper, Identity, StaticConfig};
///
/// let config = StaticConfig::builder()
///     .set(paths::ENABLED, "1")
///     .set(paths::RESTRICT_GUEST_CHECKOUT, "1")
///     .set(paths::BLOCKED_DOMAINS, "spam.com")
///     .build();
/// let gatekeeper = Gatekeeper::new(config);
///
/// let identity = Identity::new().with_email("a@spam.com");
/// let result = gatekeeper.check(CheckContext::GuestCheckout, &identity, None);
/// assert!(result.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Gatekeeper<C> {
    config: C,
}

impl<C: ConfigSource> Gatekeeper<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// The wrapped configuration source.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Evaluate without converting the outcome.
    pub fn evaluate(
        &self,
        context: CheckContext,
        identity: &Identity,
        scope: Option<&str>,
    ) -> Decision {
        evaluate(context, identity, &self.config, scope)
    }

    /// Evaluate with diagnostics.
    pub fn evaluate_detailed(
        &self,
        context: CheckContext,
        identity: &Identity,
        scope: Option<&str>,
    ) -> EvaluationReport {
        evaluate_detailed(context, identity, &self.config, scope)
    }

    /// Guard a storefront operation.
    ///
    /// # Errors
    ///
    /// Returns the [`Denial`] when the identity is refused; the caller must
    /// abort the guarded operation.
    pub fn check(
        &self,
        context: CheckContext,
        identity: &Identity,
        scope: Option<&str>,
    ) -> Result<(), Denial> {
        self.check_request(context, identity, scope, RequestKind::Storefront)
    }

    /// Guard an operation, recording how the request arrived.
    ///
    /// # Errors
    ///
    /// Returns the [`Denial`] when the identity is refused. API callers map
    /// it to HTTP 403 via [`Denial::http_status`].
    pub fn check_request(
        &self,
        context: CheckContext,
        identity: &Identity,
        scope: Option<&str>,
        request: RequestKind,
    ) -> Result<(), Denial> {
        let decision = evaluate(context, identity, &self.config, scope);
        if let Decision::Deny(denial) = &decision {
            if self.config.is_logging_enabled(scope) {
                log_denial(identity, context, denial, request);
            }
        }
        decision.into_result()
    }
}

/// One structured audit event per denial.
fn log_denial(identity: &Identity, context: CheckContext, denial: &Denial, request: RequestKind) {
    tracing::warn!(
        email = identity.email().unwrap_or(""),
        first_name = identity.first_name().unwrap_or(""),
        last_name = identity.last_name().unwrap_or(""),
        action = context.as_str(),
        reason = denial.reason().as_str(),
        request_type = request.as_str(),
        "restricted identity denied"
    );
}
