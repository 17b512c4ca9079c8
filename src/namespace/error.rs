use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NamespaceError {
    #[error("required vars file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read vars file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse vars file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("section '{section}' in '{path}' is not a table")]
    SectionNotTable { section: String, path: PathBuf },

    #[error("variable '{name}' has a non-scalar value")]
    NonScalarValue { name: String },
}
