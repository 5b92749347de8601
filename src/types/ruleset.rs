use std::collections::HashSet;
use std::fmt;

use super::decision::DenyReason;
use super::identity::Identity;

/// Builder for constructing a [`RuleSet`].
///
/// Entries can be added one at a time or parsed out of raw multi-line
/// textarea-style text (one entry per line). Every entry is normalized on
/// insert: trimmed, lowercased, and dropped entirely if empty. Duplicates
/// collapse into the set. Building never fails: an empty blocklist is a
/// valid (permit-everything) ruleset, not an error.
///
/// # Example
///
/// ```
/// use turnstile::RuleSet;
///
/// let rules = RuleSet::builder()
///     .email("Fraud@Example.com")
///     .domains_text("spam.com\n\n  Throwaway.net  \n")
///     .last_name("doe")
///     .build();
///
/// assert!(rules.blocked_emails().contains("fraud@example.com"));
/// assert!(rules.blocked_domains().contains("throwaway.net"));
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    emails: HashSet<String>,
    domains: HashSet<String>,
    first_names: HashSet<String>,
    last_names: HashSet<String>,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single blocked email address.
    #[must_use]
    pub fn email(mut self, entry: &str) -> Self {
        insert_normalized(&mut self.emails, entry);
        self
    }

    /// Add a single blocked domain.
    #[must_use]
    pub fn domain(mut self, entry: &str) -> Self {
        insert_normalized(&mut self.domains, entry);
        self
    }

    /// Add a single blocked first name.
    #[must_use]
    pub fn first_name(mut self, entry: &str) -> Self {
        insert_normalized(&mut self.first_names, entry);
        self
    }

    /// Add a single blocked last name.
    #[must_use]
    pub fn last_name(mut self, entry: &str) -> Self {
        insert_normalized(&mut self.last_names, entry);
        self
    }

    /// Parse newline-separated blocked emails from raw textarea text.
    #[must_use]
    pub fn emails_text(mut self, raw: &str) -> Self {
        extend_from_lines(&mut self.emails, raw);
        self
    }

    /// Parse newline-separated blocked domains from raw textarea text.
    #[must_use]
    pub fn domains_text(mut self, raw: &str) -> Self {
        extend_from_lines(&mut self.domains, raw);
        self
    }

    /// Parse newline-separated blocked first names from raw textarea text.
    #[must_use]
    pub fn first_names_text(mut self, raw: &str) -> Self {
        extend_from_lines(&mut self.first_names, raw);
        self
    }

    /// Parse newline-separated blocked last names from raw textarea text.
    #[must_use]
    pub fn last_names_text(mut self, raw: &str) -> Self {
        extend_from_lines(&mut self.last_names, raw);
        self
    }

    /// Finalize the builder into an immutable `RuleSet`.
    #[must_use]
    pub fn build(self) -> RuleSet {
        RuleSet {
            blocked_emails: self.emails,
            blocked_domains: self.domains,
            blocked_first_names: self.first_names,
            blocked_last_names: self.last_names,
        }
    }
}

/// Normalize one raw entry: trim and lowercase. Returns `None` for blanks.
fn normalize_entry(entry: &str) -> Option<String> {
    let trimmed = entry.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn insert_normalized(set: &mut HashSet<String>, entry: &str) {
    if let Some(normalized) = normalize_entry(entry) {
        set.insert(normalized);
    }
}

/// Textarea parsing: split on newlines, trim, drop blank lines, lowercase.
/// No escaping, no quoting, no comment syntax. Pure literal lines.
fn extend_from_lines(set: &mut HashSet<String>, raw: &str) {
    for line in raw.lines() {
        insert_normalized(set, line);
    }
}

/// The active blocklists for one configuration scope: exact-match emails,
/// email domains, first names, and last names.
///
/// Invariant: every entry is non-empty, trimmed, and lowercased, so matching
/// is case-insensitive set membership. A `RuleSet` is immutable once built,
/// holds no interior state, and is safe to share across threads. It is
/// loaded fresh from configuration per evaluation and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSet {
    pub(crate) blocked_emails: HashSet<String>,
    pub(crate) blocked_domains: HashSet<String>,
    pub(crate) blocked_first_names: HashSet<String>,
    pub(crate) blocked_last_names: HashSet<String>,
}

impl RuleSet {
    /// Create a builder for assembling a ruleset.
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    /// An empty ruleset that matches nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if no blocklist has any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocked_emails.is_empty()
            && self.blocked_domains.is_empty()
            && self.blocked_first_names.is_empty()
            && self.blocked_last_names.is_empty()
    }

    #[must_use]
    pub fn blocked_emails(&self) -> &HashSet<String> {
        &self.blocked_emails
    }

    #[must_use]
    pub fn blocked_domains(&self) -> &HashSet<String> {
        &self.blocked_domains
    }

    #[must_use]
    pub fn blocked_first_names(&self) -> &HashSet<String> {
        &self.blocked_first_names
    }

    #[must_use]
    pub fn blocked_last_names(&self) -> &HashSet<String> {
        &self.blocked_last_names
    }

    /// Whether an email address violates this ruleset.
    ///
    /// The address is trimmed, validated syntactically, and lowercased; a
    /// syntactically invalid address never matches. The exact-address list
    /// is consulted before the domain list.
    #[must_use]
    pub fn blocks_email(&self, email: &str) -> bool {
        crate::matcher::email_restricted(email, self)
    }

    /// Whether a first/last name pair violates this ruleset.
    ///
    /// Each name is tag-stripped, trimmed, and lowercased independently; the
    /// check matches if the first name OR the last name appears in its
    /// respective list. Both names must be non-empty after normalization,
    /// otherwise the check is inconclusive and nothing matches.
    #[must_use]
    pub fn blocks_name(&self, first_name: &str, last_name: &str) -> bool {
        crate::matcher::name_restricted(first_name, last_name, self)
    }

    /// The first rule an identity violates, or `None` if it passes.
    ///
    /// The email check strictly precedes the name check, so an identity that
    /// violates both reports [`DenyReason::EmailRestricted`].
    #[must_use]
    pub fn first_violation(&self, identity: &Identity) -> Option<DenyReason> {
        crate::matcher::first_violation(identity, self)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RuleSet({} emails, {} domains, {} first names, {} last names)",
            self.blocked_emails.len(),
            self.blocked_domains.len(),
            self.blocked_first_names.len(),
            self.blocked_last_names.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_trimmed_and_lowercased() {
        let rules = RuleSet::builder()
            .email("  Fraud@Example.COM  ")
            .domain("SPAM.com")
            .first_name(" John ")
            .last_name("DOE")
            .build();

        assert!(rules.blocked_emails().contains("fraud@example.com"));
        assert!(rules.blocked_domains().contains("spam.com"));
        assert!(rules.blocked_first_names().contains("john"));
        assert!(rules.blocked_last_names().contains("doe"));
    }

    #[test]
    fn blank_entries_are_dropped() {
        let rules = RuleSet::builder().email("   ").domain("").build();
        assert!(rules.is_empty());
    }

    #[test]
    fn textarea_parsing_splits_trims_and_skips_blanks() {
        let rules = RuleSet::builder()
            .domains_text("spam.com\n\n  Throwaway.NET  \n\t\ntrash.org")
            .build();

        assert_eq!(rules.blocked_domains().len(), 3);
        assert!(rules.blocked_domains().contains("spam.com"));
        assert!(rules.blocked_domains().contains("throwaway.net"));
        assert!(rules.blocked_domains().contains("trash.org"));
    }

    #[test]
    fn textarea_handles_crlf_line_endings() {
        let rules = RuleSet::builder()
            .emails_text("a@b.com\r\nc@d.com\r\n")
            .build();
        assert_eq!(rules.blocked_emails().len(), 2);
        assert!(rules.blocked_emails().contains("a@b.com"));
        assert!(rules.blocked_emails().contains("c@d.com"));
    }

    #[test]
    fn empty_textarea_yields_empty_set() {
        let rules = RuleSet::builder().emails_text("").build();
        assert!(rules.blocked_emails().is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        let rules = RuleSet::builder()
            .emails_text("a@b.com\nA@B.COM\n a@b.com ")
            .build();
        assert_eq!(rules.blocked_emails().len(), 1);
    }

    #[test]
    fn display_counts() {
        let rules = RuleSet::builder()
            .email("a@b.com")
            .domain("spam.com")
            .build();
        assert_eq!(
            rules.to_string(),
            "RuleSet(1 emails, 1 domains, 0 first names, 0 last names)"
        );
    }
}
