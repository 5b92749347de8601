use winnow::combinator::{preceded, repeat};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

use super::EmailParts;

// -- Local part ---------------------------------------------------------------

/// Characters permitted in an unquoted local-part atom.
fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c)
}

/// Dot-atom: atoms separated by single dots, no leading/trailing/double dot.
fn dot_atom<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., is_atext),
        repeat::<_, _, (), _, _>(0.., preceded('.', take_while(1.., is_atext))),
    )
        .take()
        .parse_next(input)
}

// -- Domain -------------------------------------------------------------------

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// One hostname label: alphanumerics and hyphens, no edge hyphens.
fn domain_label<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_label_char)
        .verify(|label: &str| !label.starts_with('-') && !label.ends_with('-'))
        .parse_next(input)
}

/// Hostname with at least two labels, so bare names like `b` are rejected.
fn hostname<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        domain_label,
        repeat::<_, _, (), _, _>(1.., preceded('.', domain_label)),
    )
        .take()
        .parse_next(input)
}

// -- Address ------------------------------------------------------------------

pub fn email<'i>(input: &mut &'i str) -> ModalResult<EmailParts<'i>> {
    let local = dot_atom.parse_next(input)?;
    '@'.parse_next(input)?;
    let domain = hostname.parse_next(input)?;
    Ok(EmailParts { local, domain })
}
