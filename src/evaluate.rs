use std::time::Instant;

use crate::{CheckContext, ConfigSource, Decision, DenyReason, EvaluationReport, Identity};

/// Decide whether an identity may proceed in the given context.
///
/// Evaluation order is fixed and short-circuiting:
///
/// 1. if the module switch is off, allow, regardless of everything else;
/// 2. if the context's restriction switch is off, allow;
/// 3. check the email against the context's blocklist view and deny
///    `EmailRestricted` on a match;
/// 4. check the names and deny `NameRestricted` on a match;
/// 5. otherwise allow.
///
/// The first violated check determines the reason and message, so an
/// identity whose email and name both match denies with the email message.
/// On deny, the operator-configured message for the context is used when it
/// is non-blank; otherwise the context's hardcoded default for the reason.
///
/// Pure and synchronous: no I/O, no shared state, no side effects. Safe to
/// call concurrently.
pub fn evaluate<C: ConfigSource + ?Sized>(
    context: CheckContext,
    identity: &Identity,
    config: &C,
    scope: Option<&str>,
) -> Decision {
    if !config.is_enabled(scope) {
        return Decision::Allow;
    }
    if !config.is_restricted(context, scope) {
        return Decision::Allow;
    }

    let rules = config.rule_set(context, scope);
    match rules.first_violation(identity) {
        Some(reason) => {
            let message = resolve_message(context, reason, config, scope);
            Decision::deny(reason, message)
        }
        None => Decision::Allow,
    }
}

/// Like [`evaluate`], additionally reporting which checks ran, in order,
/// and how long the evaluation took.
pub fn evaluate_detailed<C: ConfigSource + ?Sized>(
    context: CheckContext,
    identity: &Identity,
    config: &C,
    scope: Option<&str>,
) -> EvaluationReport {
    let start = Instant::now();
    let mut checks = Vec::with_capacity(4);

    checks.push("module_enabled");
    if !config.is_enabled(scope) {
        return EvaluationReport::new(Decision::Allow, checks, start.elapsed());
    }

    checks.push("context_enabled");
    if !config.is_restricted(context, scope) {
        return EvaluationReport::new(Decision::Allow, checks, start.elapsed());
    }

    let rules = config.rule_set(context, scope);

    checks.push("email");
    if rules.blocks_email(identity.email().unwrap_or("")) {
        let reason = DenyReason::EmailRestricted;
        let message = resolve_message(context, reason, config, scope);
        return EvaluationReport::new(Decision::deny(reason, message), checks, start.elapsed());
    }

    checks.push("name");
    if rules.blocks_name(
        identity.first_name().unwrap_or(""),
        identity.last_name().unwrap_or(""),
    ) {
        let reason = DenyReason::NameRestricted;
        let message = resolve_message(context, reason, config, scope);
        return EvaluationReport::new(Decision::deny(reason, message), checks, start.elapsed());
    }

    EvaluationReport::new(Decision::Allow, checks, start.elapsed())
}

/// Configured message when non-blank, else the context's hardcoded default.
fn resolve_message<C: ConfigSource + ?Sized>(
    context: CheckContext,
    reason: DenyReason,
    config: &C,
    scope: Option<&str>,
) -> String {
    config
        .message(context, scope)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| context.default_message(reason).to_owned())
}
