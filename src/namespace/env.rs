//! Environment-variable overrides for a vendor variable store.

/// Collects `PREFIX<sep>NAME=value` pairs from the process environment.
///
/// The prefix and separator are stripped and the remainder is the variable
/// name, kept verbatim. Values are not coerced. Results are sorted by name so
/// the layering order is deterministic.
pub(super) fn env_overrides(prefix: &str, separator: &str) -> Vec<(String, String)> {
    let prefix_with_sep = format!("{prefix}{separator}");
    let mut overrides: Vec<(String, String)> = std::env::vars()
        .filter_map(|(key, value)| {
            key.strip_prefix(&prefix_with_sep)
                .filter(|name| !name.is_empty())
                .map(|name| (name.to_string(), value))
        })
        .collect();

    overrides.sort();
    overrides
}
