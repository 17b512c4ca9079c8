//! Vendor-provided variable store backing one expansion namespace.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::env::env_overrides;
use super::{scalar_to_string, Namespace, NamespaceError};

/// A variable source in the loading pipeline.
#[derive(Debug)]
enum VarsSource {
    File { path: PathBuf, required: bool },
    Env { prefix: String, separator: String },
    Var { name: String, value: String },
}

/// Flat name→value store for one vendor's build variables.
///
/// Loaded once from TOML files, environment overrides, and literal bindings;
/// queried read-only through [`Namespace`] afterwards. Scalar file values are
/// coerced to strings (a `port = 8080` binds `"8080"`), since expansion
/// splices text.
///
/// ## Example
///
/// ```no_run
/// use genvars::{expand, VendorVars};
///
/// let vars = VendorVars::builder()
///     .with_file("vendor/vars.toml", true)
///     .with_file("vendor/vars.local.toml", false)
///     .with_env("VENDOR_VARS", "_")
///     .build()?;
///
/// let out = expand("firmware/$(device)/$(variant).img", &vars)?;
/// # Ok::<(), genvars::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct VendorVars {
    vars: BTreeMap<String, String>,
}

impl VendorVars {
    /// Creates a new builder with no sources.
    pub fn builder() -> VendorVarsBuilder {
        VendorVarsBuilder::default()
    }

    /// Returns true if no variables are bound.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Iterates over the bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Namespace for VendorVars {
    fn is_set(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Builder for loading a [`VendorVars`] store from multiple sources.
///
/// Sources are applied in registration order, with later sources overriding
/// earlier ones binding by binding. The store is flat: files contribute their
/// top-level scalar keys, or the keys of one named section when
/// [`scoped_to`](Self::scoped_to) is set.
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct VendorVarsBuilder {
    sources: Vec<VarsSource>,
    section: Option<String>,
}

impl VendorVarsBuilder {
    /// Adds a TOML file to be loaded.
    ///
    /// If `required` is `true`, the build fails if the file doesn't exist.
    /// Optional files that are missing are silently skipped.
    pub fn with_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        self.sources.push(VarsSource::File {
            path: path.as_ref().to_path_buf(),
            required,
        });
        self
    }

    /// Adds environment overrides with the given prefix and separator.
    ///
    /// A variable `PREFIX<sep>NAME=value` binds `NAME` to `value`, with the
    /// name kept verbatim after stripping.
    pub fn with_env(mut self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        self.sources.push(VarsSource::Env {
            prefix: prefix.into(),
            separator: separator.into(),
        });
        self
    }

    /// Binds a single variable programmatically.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.sources.push(VarsSource::Var {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Scopes file sources to one named top-level table.
    ///
    /// Files that don't contain the section contribute nothing; a section
    /// that exists but isn't a table is an error. Env and literal sources are
    /// unaffected.
    pub fn scoped_to(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Loads all sources and builds the store.
    pub fn build(self) -> Result<VendorVars, NamespaceError> {
        let mut vars = BTreeMap::new();

        for source in self.sources {
            match source {
                VarsSource::File { path, required } => {
                    if let Some(table) = load_vars_file(&path, required)? {
                        let scoped = match &self.section {
                            Some(section) => match select_section(table, section, &path)? {
                                Some(table) => table,
                                None => continue,
                            },
                            None => table,
                        };
                        for (name, value) in scoped {
                            let value = scalar_to_string(&value)
                                .ok_or(NamespaceError::NonScalarValue { name: name.clone() })?;
                            vars.insert(name, value);
                        }
                    }
                }
                VarsSource::Env { prefix, separator } => {
                    for (name, value) in env_overrides(&prefix, &separator) {
                        vars.insert(name, value);
                    }
                }
                VarsSource::Var { name, value } => {
                    vars.insert(name, value);
                }
            }
        }

        Ok(VendorVars { vars })
    }
}

/// Loads and parses a TOML vars file.
///
/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
fn load_vars_file(path: &Path, required: bool) -> Result<Option<toml::Table>, NamespaceError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let table = toml::from_str(&contents).map_err(|e| NamespaceError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Some(table))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                Err(NamespaceError::FileNotFound(path.to_path_buf()))
            } else {
                Ok(None)
            }
        }
        Err(e) => Err(NamespaceError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Picks one top-level table out of a parsed file.
fn select_section(
    mut table: toml::Table,
    section: &str,
    path: &Path,
) -> Result<Option<toml::Table>, NamespaceError> {
    match table.remove(section) {
        Some(toml::Value::Table(section_table)) => Ok(Some(section_table)),
        Some(_) => Err(NamespaceError::SectionNotTable {
            section: section.to_string(),
            path: path.to_path_buf(),
        }),
        None => Ok(None),
    }
}
