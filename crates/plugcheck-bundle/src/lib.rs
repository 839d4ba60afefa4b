//! Plugcheck bundle validation
//!
//! Checks that an agent plugin bundle is structurally ready to publish:
//!
//! - `.cursor-plugin/plugin.json` exists, parses, names the plugin correctly
//!   and carries every required field
//! - `skills/` exists and every skill directory has a `SKILL.md` with frontmatter
//! - `rules/`, `commands/` and `agents/`, when present, hold markdown files
//!   whose frontmatter carries the keys their kind requires
//!
//! Problems with the bundle are collected into a [`Report`]. Filesystem
//! failures surface as [`BundleError`].

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod entry;
pub mod error;
pub mod frontmatter;
pub mod manifest;
pub mod validator;

pub use entry::Entry;
pub use error::{BundleError, ManifestError};
pub use frontmatter::Frontmatter;
pub use manifest::Manifest;
pub use plugcheck_types::Report;
pub use validator::{validate_bundle, BundleValidator};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{validate_bundle, BundleError, BundleValidator, Frontmatter, Report};
}
