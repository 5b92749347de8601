use proptest::prelude::*;
use turnstile::{paths, RuleSet, StaticConfig};

// --- Fixed identity vocabulary ---
// Emails are built from a generated local part and a domain drawn from a
// small pool, so generated rulesets and generated identities overlap often
// enough for both match and no-match paths to be exercised.

pub const DOMAINS: &[&str] = &["spam.com", "trash.org", "example.com", "good.net", "shop.io"];
pub const FIRST_NAMES: &[&str] = &["john", "jane", "alice", "bob", "carol", "dave"];
pub const LAST_NAMES: &[&str] = &["doe", "smith", "jones", "brown", "garcia"];

/// A local part the email grammar accepts: atoms with at most one dot.
pub fn arb_local_part() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}(\\.[a-z0-9]{1,5})?"
}

/// A syntactically valid email over the domain pool.
pub fn arb_valid_email() -> impl Strategy<Value = String> {
    (arb_local_part(), prop::sample::select(DOMAINS))
        .prop_map(|(local, domain)| format!("{local}@{domain}"))
}

/// Inputs the email grammar must reject.
pub fn arb_invalid_email() -> impl Strategy<Value = String> {
    prop_oneof![
        // No @ at all.
        "[a-z]{1,12}",
        // Missing domain.
        "[a-z]{1,8}".prop_map(|l| format!("{l}@")),
        // Missing local part.
        prop::sample::select(DOMAINS).prop_map(|d| format!("@{d}")),
        // Single-label domain.
        "[a-z]{1,8}".prop_map(|l| format!("{l}@host")),
        // Two @ signs.
        "[a-z]{1,8}".prop_map(|l| format!("{l}@a@spam.com")),
        // Embedded whitespace.
        "[a-z]{1,4} [a-z]{1,4}".prop_map(|l| format!("{l}@spam.com")),
    ]
}

/// A generated blocklist configuration, kept in raw form so tests can both
/// build a [`RuleSet`] and reconstruct the oracle.
#[derive(Debug, Clone)]
pub struct GenRules {
    pub emails: Vec<String>,
    pub domains: Vec<String>,
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

impl GenRules {
    /// Build the ruleset the way an integration would.
    #[must_use]
    pub fn build(&self) -> RuleSet {
        RuleSet::builder()
            .emails_text(&self.emails.join("\n"))
            .domains_text(&self.domains.join("\n"))
            .first_names_text(&self.first_names.join("\n"))
            .last_names_text(&self.last_names.join("\n"))
            .build()
    }

    /// A fully-enabled configuration carrying these blocklists.
    #[must_use]
    pub fn to_config(&self) -> StaticConfig {
        StaticConfig::builder()
            .set(paths::ENABLED, "1")
            .set(paths::RESTRICT_GUEST_CHECKOUT, "1")
            .set(paths::RESTRICT_REGISTERED_CHECKOUT, "1")
            .set(paths::RESTRICT_CUSTOMER_REGISTRATION, "1")
            .set(paths::CHECK_BILLING_ADDRESS, "1")
            .set(paths::BLOCKED_EMAILS, self.emails.join("\n"))
            .set(paths::BLOCKED_DOMAINS, self.domains.join("\n"))
            .set(paths::BLOCKED_ADDRESS_EMAILS, self.emails.join("\n"))
            .set(paths::BLOCKED_ADDRESS_DOMAINS, self.domains.join("\n"))
            .set(paths::BLOCKED_FIRST_NAMES, self.first_names.join("\n"))
            .set(paths::BLOCKED_LAST_NAMES, self.last_names.join("\n"))
            .build()
    }
}

/// Generate blocklists as random subsequences of the pools plus a few
/// generated exact emails.
pub fn arb_rules() -> impl Strategy<Value = GenRules> {
    (
        prop::collection::vec(arb_valid_email(), 0..4),
        prop::sample::subsequence(DOMAINS.to_vec(), 0..DOMAINS.len()),
        prop::sample::subsequence(FIRST_NAMES.to_vec(), 0..FIRST_NAMES.len()),
        prop::sample::subsequence(LAST_NAMES.to_vec(), 0..LAST_NAMES.len()),
    )
        .prop_map(|(emails, domains, first_names, last_names)| GenRules {
            emails,
            domains: domains.into_iter().map(str::to_owned).collect(),
            first_names: first_names.into_iter().map(str::to_owned).collect(),
            last_names: last_names.into_iter().map(str::to_owned).collect(),
        })
}

/// A (first, last) pair over the name pools, in mixed case.
pub fn arb_name_pair() -> impl Strategy<Value = (String, String)> {
    (
        prop::sample::select(FIRST_NAMES),
        prop::sample::select(LAST_NAMES),
        any::<bool>(),
    )
        .prop_map(|(first, last, upper)| {
            if upper {
                (first.to_uppercase(), last.to_uppercase())
            } else {
                ((*first).to_owned(), (*last).to_owned())
            }
        })
}
