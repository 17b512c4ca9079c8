//! Deferred variable expansion for `$(name)` references.
//!
//! This is a *partial* expander for build-generated strings: references whose
//! names are bound in the supplied namespace are substituted, and every other
//! reference is re-emitted as `$(name)` so that a later expansion pass, owned
//! by a different system, can still find it. Expansion is a single pass:
//! substituted values are inserted as-is even if they contain `$(...)` syntax
//! themselves. Callers wanting recursion apply [`expand`] repeatedly.

mod error;
mod scan;

pub use error::{ExpandError, MalformedKind};

use crate::namespace::Namespace;

/// Outcome of resolving a single `$(name)` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The name is ours; the reference is replaced by this value.
    Resolved(String),
    /// The name is not ours; this text stands in for the reference so a later
    /// pass can resolve it.
    Deferred(String),
}

impl Resolution {
    /// Defers `name` by re-serializing it in canonical reference form.
    ///
    /// The reference is reconstructed rather than sliced out of the input, so
    /// deferral stays correct even if the scanner ever normalizes what it
    /// tokenized.
    pub fn deferred(name: &str) -> Self {
        Resolution::Deferred(format!("$({name})"))
    }
}

/// Expands `$(name)` references in `input` against `vars`, deferring names
/// the namespace doesn't bind.
///
/// Each occurrence is resolved independently, in order of appearance, with no
/// recursion into substituted values. Returns an error only for malformed
/// syntax (see [`ExpandError`]); unknown names are passed through untouched.
///
/// ## Example
///
/// ```
/// use std::collections::BTreeMap;
/// use genvars::expand;
///
/// let vars = BTreeMap::from([("device".to_string(), "starlte".to_string())]);
///
/// // $(device) is ours, $(variant) belongs to a later pass.
/// let out = expand("out/$(device)/$(variant).img", &vars)?;
/// assert_eq!(out, "out/starlte/$(variant).img");
/// # Ok::<(), genvars::ExpandError>(())
/// ```
pub fn expand<N>(input: &str, vars: &N) -> Result<String, ExpandError>
where
    N: Namespace + ?Sized,
{
    expand_with(input, |name| {
        if vars.is_set(name) {
            match vars.get(name) {
                Some(value) => Ok(Resolution::Resolved(value)),
                None => Ok(Resolution::deferred(name)),
            }
        } else {
            // Not our variable. Restore what the reference looked like for an
            // expansion pass that comes later.
            Ok(Resolution::deferred(name))
        }
    })
}

/// Expands `$(name)` references using a caller-supplied resolver.
///
/// This decouples the scanning algorithm from the resolution policy:
/// `resolver` is invoked once per reference, in order of appearance, and
/// decides whether the reference is [`Resolved`](Resolution::Resolved),
/// [`Deferred`](Resolution::Deferred), or an error. [`expand`] is the
/// resolve-or-defer policy layered on top of this.
pub fn expand_with<F>(input: &str, resolver: F) -> Result<String, ExpandError>
where
    F: FnMut(&str) -> Result<Resolution, ExpandError>,
{
    scan::scan(input, resolver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_references_unchanged() {
        let ns = vars(&[("x", "1")]);
        assert_eq!(expand("plain text", &ns).unwrap(), "plain text");
        assert_eq!(expand("", &ns).unwrap(), "");
    }

    #[test]
    fn test_known_reference_resolves() {
        let ns = vars(&[("device", "starlte")]);
        assert_eq!(expand("$(device)", &ns).unwrap(), "starlte");
    }

    #[test]
    fn test_unknown_reference_deferred() {
        let ns = vars(&[]);
        assert_eq!(expand("$(later)", &ns).unwrap(), "$(later)");
    }

    #[test]
    fn test_mixed_known_and_unknown() {
        let ns = vars(&[("known", "1")]);
        assert_eq!(
            expand("a=$(known) b=$(unknown)", &ns).unwrap(),
            "a=1 b=$(unknown)"
        );
    }

    #[test]
    fn test_duplicates_resolve_identically() {
        let ns = vars(&[("x", "5")]);
        assert_eq!(expand("$(x)-$(x)", &ns).unwrap(), "5-5");
    }

    #[test]
    fn test_malformed_reference_is_an_error() {
        let ns = vars(&[("x", "1")]);
        let result = expand("$(unterminated", &ns);
        assert!(matches!(
            result,
            Err(ExpandError::MalformedReference {
                kind: MalformedKind::Unterminated,
                ..
            })
        ));
    }

    #[test]
    fn test_resolved_value_not_reexpanded() {
        let ns = vars(&[("a", "$(b)"), ("b", "x")]);
        assert_eq!(expand("$(a)", &ns).unwrap(), "$(b)");
    }

    #[test]
    fn test_deferral_is_lossless() {
        // Expanding with ns1 and then with ns1 ∪ ns2 must equal expanding
        // once with ns1 ∪ ns2.
        let input = "$(a)/$(b)/$(c)";
        let ns1 = vars(&[("a", "1")]);
        let mut both = ns1.clone();
        both.extend(vars(&[("b", "2"), ("c", "3")]));

        let two_pass = expand(&expand(input, &ns1).unwrap(), &both).unwrap();
        let one_pass = expand(input, &both).unwrap();
        assert_eq!(two_pass, one_pass);
        assert_eq!(two_pass, "1/2/3");
    }

    #[test]
    fn test_resolver_sees_each_occurrence_in_order() {
        let mut seen = Vec::new();
        expand_with("$(b) $(a) $(b)", |name| {
            seen.push(name.to_string());
            Ok(Resolution::deferred(name))
        })
        .unwrap();
        assert_eq!(seen, ["b", "a", "b"]);
    }

    #[test]
    fn test_expand_with_resolved_value() {
        let out = expand_with("v=$(x)", |name| {
            Ok(Resolution::Resolved(format!("<{name}>")))
        })
        .unwrap();
        assert_eq!(out, "v=<x>");
    }

    #[test]
    fn test_name_with_dots_and_dashes() {
        let ns = vars(&[("board.soc-rev", "r2")]);
        assert_eq!(expand("rev=$(board.soc-rev)", &ns).unwrap(), "rev=r2");
    }

    #[test]
    fn test_toml_table_namespace() {
        let table: toml::Table = toml::from_str(
            r#"
            device = "starlte"
            sdk = 34
            "#,
        )
        .unwrap();
        assert_eq!(
            expand("$(device)-$(sdk)-$(other)", &table).unwrap(),
            "starlte-34-$(other)"
        );
    }
}
