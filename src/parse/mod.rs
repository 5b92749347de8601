mod error;
mod grammar;

pub use error::ParseError;

/// The two sides of a syntactically valid email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailParts<'i> {
    /// Substring before the `@`.
    pub local: &'i str,
    /// Substring after the `@`.
    pub domain: &'i str,
}

/// Validate an email address and split it into local part and domain.
///
/// The grammar accepts a dot-atom local part and a multi-label hostname
/// domain. Inputs it rejects are never treated as blocklist matches.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not a syntactically valid address.
pub fn parse_email(input: &str) -> Result<EmailParts<'_>, ParseError> {
    use winnow::Parser;
    grammar::email
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}
