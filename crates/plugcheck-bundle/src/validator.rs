//! Bundle validation pass
//!
//! One sequential walk over a bundle root: manifest first, then the entry
//! directories in a fixed order. Content problems are recorded in the
//! [`Report`]; only filesystem failures abort the run.

use plugcheck_types::{Category, EntryKind, Report};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::entry::list_entries;
use crate::error::{BundleError, ManifestError, Result};
use crate::manifest::{Manifest, NamePattern};

/// Validates the bundle rooted at a directory
#[derive(Debug, Clone)]
pub struct BundleValidator {
    root: PathBuf,
}

impl BundleValidator {
    /// Create a validator for the bundle at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Bundle root being validated
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run every check and return the accumulated report
    ///
    /// A missing or unparseable manifest is recorded and stops the run early.
    pub async fn validate(&self) -> Result<Report> {
        info!("Validating bundle at {:?}", self.root);
        let mut report = Report::new();

        let manifest = match Manifest::load(&self.root).await {
            Ok(manifest) => manifest,
            Err(e @ (ManifestError::NotFound { .. } | ManifestError::Invalid { .. })) => {
                report.record_error(Category::Manifest, e.to_string());
                info!("Manifest unusable, skipping remaining checks");
                return Ok(report);
            }
            Err(e) => return Err(BundleError::Manifest(e)),
        };

        self.check_manifest(&manifest, &mut report).await?;

        for kind in EntryKind::ALL {
            self.check_entries(kind, &mut report).await?;
        }

        info!(
            "Validation finished: {} entries, {} errors, {} warnings",
            report.counts.total(),
            report.errors.len(),
            report.warnings.len()
        );
        Ok(report)
    }

    async fn check_manifest(&self, manifest: &Manifest, report: &mut Report) -> Result<()> {
        report.plugin_name = manifest.name().map(str::to_string);

        if let Some(name) = manifest.name() {
            let pattern = NamePattern::new()?;
            if !pattern.is_match(name) {
                report.record_error(
                    Category::Manifest,
                    format!(
                        "plugin name \"{name}\" must be lowercase alphanumeric with optional interior dots or hyphens"
                    ),
                );
            }
        }

        for field in manifest.missing_fields() {
            report.record_error(
                Category::Manifest,
                format!("missing required field \"{field}\""),
            );
        }

        if let Some(logo) = manifest.logo() {
            let path = self.root.join(logo);
            let found = tokio::fs::try_exists(&path)
                .await
                .map_err(|e| BundleError::io(&path, e))?;
            if !found {
                warn!("Logo {:?} does not exist", path);
                report.record_warning(Category::Manifest, format!("logo file not found: {logo}"));
            }
        }

        Ok(())
    }

    async fn check_entries(&self, kind: EntryKind, report: &mut Report) -> Result<()> {
        let Some(entries) = list_entries(&self.root, kind).await? else {
            if kind.is_required() {
                report.record_error(
                    kind.category(),
                    format!("{}/ directory is missing", kind.directory()),
                );
            }
            return Ok(());
        };

        debug!("Found {} {} entries", entries.len(), kind.directory());
        report.counts.add(kind, entries.len());

        for entry in &entries {
            entry.check(report).await?;
        }
        Ok(())
    }
}

/// Validate the bundle rooted at `root`
pub async fn validate_bundle(root: impl Into<PathBuf>) -> Result<Report> {
    BundleValidator::new(root).validate().await
}
