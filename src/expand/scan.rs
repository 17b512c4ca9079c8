//! Single-pass scanner for `$(name)` reference syntax.
//!
//! `$$` escapes to a literal `$`. Any other `$` must open a reference; a `$`
//! that doesn't is a syntax error, so that "no references found" and "broken
//! reference" stay distinguishable for the caller.

use std::str::CharIndices;

use super::error::{ExpandError, MalformedKind};
use super::Resolution;

/// Scans `input` left to right, invoking `resolve` once per reference in
/// order of appearance and splicing the outcome into the output.
///
/// Aborts on the first malformed reference with no partial output.
pub(super) fn scan<F>(input: &str, mut resolve: F) -> Result<String, ExpandError>
where
    F: FnMut(&str) -> Result<Resolution, ExpandError>,
{
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices();

    while let Some((start, ch)) = chars.next() {
        if ch != '$' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            None => {
                return Err(ExpandError::malformed(
                    &input[start..],
                    MalformedKind::DanglingDollar,
                ));
            }
            Some((_, '$')) => out.push('$'),
            Some((open, '(')) => {
                let name = scan_name(input, start, open + 1, &mut chars)?;
                match resolve(name)? {
                    Resolution::Resolved(value) | Resolution::Deferred(value) => {
                        out.push_str(&value);
                    }
                }
            }
            Some((pos, other)) => {
                return Err(ExpandError::malformed(
                    &input[start..pos + other.len_utf8()],
                    MalformedKind::MissingOpenParen(other),
                ));
            }
        }
    }

    Ok(out)
}

/// Consumes a variable name up to its closing `)`, returning the name slice.
///
/// `start` is the byte offset of the reference's `$`, used only for error
/// fragments; `name_start` is the offset just past the `(`.
fn scan_name<'a>(
    input: &'a str,
    start: usize,
    name_start: usize,
    chars: &mut CharIndices<'_>,
) -> Result<&'a str, ExpandError> {
    loop {
        match chars.next() {
            None => {
                return Err(ExpandError::malformed(
                    &input[start..],
                    MalformedKind::Unterminated,
                ));
            }
            Some((end, ')')) => {
                let name = &input[name_start..end];
                if name.is_empty() {
                    return Err(ExpandError::malformed(
                        &input[start..end + 1],
                        MalformedKind::EmptyName,
                    ));
                }
                return Ok(name);
            }
            Some((pos, c)) if !is_name_char(c) => {
                return Err(ExpandError::malformed(
                    &input[start..pos + c.len_utf8()],
                    MalformedKind::InvalidNameChar(c),
                ));
            }
            Some(_) => {}
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}
