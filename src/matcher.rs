//! Identity-vs-ruleset matching. The public surface lives on
//! [`RuleSet`](crate::RuleSet); these functions hold the algorithms.

use crate::parse::parse_email;
use crate::{DenyReason, Identity, RuleSet};

/// Email check. Order is fixed: syntax gate, exact address, then domain.
///
/// A syntactically invalid address can never be restricted; the matcher
/// fails open on input it cannot confidently evaluate.
pub(crate) fn email_restricted(email: &str, rules: &RuleSet) -> bool {
    let email = email.trim();
    if parse_email(email).is_err() {
        return false;
    }

    let email = email.to_lowercase();
    if rules.blocked_emails.contains(&email) {
        return true;
    }

    let domain = domain_part(&email);
    !domain.is_empty() && rules.blocked_domains.contains(domain)
}

/// Name check: first OR last, each against its own list.
///
/// Both names must be non-empty after normalization; otherwise the check is
/// inconclusive and nothing matches.
pub(crate) fn name_restricted(first: &str, last: &str, rules: &RuleSet) -> bool {
    let first = normalize_name(first);
    let last = normalize_name(last);
    if first.is_empty() || last.is_empty() {
        return false;
    }

    rules.blocked_first_names.contains(&first) || rules.blocked_last_names.contains(&last)
}

/// The first rule an identity violates, email strictly before name.
pub(crate) fn first_violation(identity: &Identity, rules: &RuleSet) -> Option<DenyReason> {
    if email_restricted(identity.email().unwrap_or(""), rules) {
        return Some(DenyReason::EmailRestricted);
    }
    if name_restricted(
        identity.first_name().unwrap_or(""),
        identity.last_name().unwrap_or(""),
        rules,
    ) {
        return Some(DenyReason::NameRestricted);
    }
    None
}

/// The substring strictly after the single `@`. If the input does not split
/// into exactly two parts on `@`, the domain is the empty string.
fn domain_part(email: &str) -> &str {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(domain), None) => domain,
        _ => "",
    }
}

/// Drop `<...>` markup spans, then trim and lowercase.
fn normalize_name(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());
    let mut in_tag = false;
    for ch in raw.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => stripped.push(c),
            _ => {}
        }
    }
    stripped.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuleSet;

    fn rules() -> RuleSet {
        RuleSet::builder()
            .email("fraud@example.com")
            .domain("spam.com")
            .first_name("john")
            .last_name("doe")
            .build()
    }

    #[test]
    fn exact_email_match() {
        assert!(email_restricted("fraud@example.com", &rules()));
    }

    #[test]
    fn email_match_is_case_insensitive() {
        assert!(email_restricted("FRAUD@Example.COM", &rules()));
    }

    #[test]
    fn email_match_trims_whitespace() {
        assert!(email_restricted("  fraud@example.com  ", &rules()));
    }

    #[test]
    fn domain_match() {
        assert!(email_restricted("anyone@spam.com", &rules()));
        assert!(email_restricted("other@SPAM.com", &rules()));
    }

    #[test]
    fn unlisted_email_does_not_match() {
        assert!(!email_restricted("ok@good.com", &rules()));
    }

    #[test]
    fn malformed_email_never_matches() {
        // Even a literal blocklist entry cannot match if it is not a valid
        // address: the syntax gate runs first.
        let rules = RuleSet::builder().email("not-an-email").build();
        assert!(rules.blocked_emails().contains("not-an-email"));
        assert!(!email_restricted("not-an-email", &rules));
    }

    #[test]
    fn empty_email_never_matches() {
        assert!(!email_restricted("", &rules()));
    }

    #[test]
    fn first_name_alone_matches() {
        assert!(name_restricted("John", "Smith", &rules()));
    }

    #[test]
    fn last_name_alone_matches() {
        assert!(name_restricted("Alice", "Doe", &rules()));
    }

    #[test]
    fn unlisted_names_do_not_match() {
        assert!(!name_restricted("Alice", "Smith", &rules()));
    }

    #[test]
    fn missing_either_name_is_inconclusive() {
        assert!(!name_restricted("", "Doe", &rules()));
        assert!(!name_restricted("John", "", &rules()));
        assert!(!name_restricted("  ", "Doe", &rules()));
    }

    #[test]
    fn names_are_tag_stripped_before_matching() {
        assert!(name_restricted("<b>John</b>", "Smith", &rules()));
        assert!(name_restricted("Alice", "<script>Doe</script>", &rules()));
    }

    #[test]
    fn tag_only_name_is_inconclusive() {
        assert!(!name_restricted("<b></b>", "Doe", &rules()));
    }

    #[test]
    fn violation_order_email_before_name() {
        let identity = Identity::new()
            .with_email("fraud@example.com")
            .with_first_name("John")
            .with_last_name("Doe");
        assert_eq!(
            first_violation(&identity, &rules()),
            Some(DenyReason::EmailRestricted)
        );
    }

    #[test]
    fn violation_name_only() {
        let identity = Identity::new()
            .with_email("ok@good.com")
            .with_first_name("Alice")
            .with_last_name("Doe");
        assert_eq!(
            first_violation(&identity, &rules()),
            Some(DenyReason::NameRestricted)
        );
    }

    #[test]
    fn no_violation() {
        let identity = Identity::new()
            .with_email("ok@good.com")
            .with_first_name("Alice")
            .with_last_name("Smith");
        assert_eq!(first_violation(&identity, &rules()), None);
    }

    #[test]
    fn absent_fields_do_not_violate() {
        assert_eq!(first_violation(&Identity::new(), &rules()), None);
    }

    #[test]
    fn domain_part_edge_cases() {
        assert_eq!(domain_part("a@b.com"), "b.com");
        assert_eq!(domain_part("no-at-sign"), "");
        assert_eq!(domain_part("a@b@c"), "");
    }
}
