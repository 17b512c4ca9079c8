pub mod expand;
pub mod namespace;
mod error;

pub use error::Error;
pub use expand::{expand, expand_with, ExpandError, MalformedKind, Resolution};
pub use namespace::{Namespace, NamespaceError, VendorVars};
