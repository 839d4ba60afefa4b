//! Skill, rule, command and agent entries
//!
//! Each kind lives in its own subdirectory of the bundle root:
//! - `skills/<name>/SKILL.md`
//! - `rules/*.md` and `rules/*.mdc`
//! - `commands/*.md`
//! - `agents/*.md`

use plugcheck_types::{EntryKind, Report};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{BundleError, Result};
use crate::frontmatter::Frontmatter;

/// Markdown file expected inside every skill directory
pub const SKILL_FILE: &str = "SKILL.md";

/// One enumerated entry and the markdown file that describes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Entry kind
    pub kind: EntryKind,
    /// Directory name for skills, file name otherwise
    pub name: String,
    /// Absolute path of the markdown file
    pub path: PathBuf,
}

impl Entry {
    /// Bundle-relative path of the markdown file, always `/`-separated
    pub fn display_path(&self) -> String {
        match self.kind {
            EntryKind::Skill => format!("{}/{}/{}", self.kind.directory(), self.name, SKILL_FILE),
            _ => format!("{}/{}", self.kind.directory(), self.name),
        }
    }

    /// Check the entry's markdown file, recording problems in `report`
    pub async fn check(&self, report: &mut Report) -> Result<()> {
        let category = self.kind.category();

        if !is_file(&self.path).await? {
            debug!("{} not found", self.path.display());
            let message = match self.kind {
                EntryKind::Skill => {
                    format!("{}/{}: missing {}", self.kind.directory(), self.name, SKILL_FILE)
                }
                _ => format!("{}: file not found", self.display_path()),
            };
            report.record_error(category, message);
            return Ok(());
        }

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| BundleError::io(&self.path, e))?;
        // Lossy, bad encoding is a content problem
        let content = String::from_utf8_lossy(&bytes);
        let frontmatter = Frontmatter::parse(&content);

        if frontmatter.is_empty() {
            report.record_error(category, format!("{}: missing frontmatter", self.display_path()));
            return Ok(());
        }

        for key in frontmatter.missing(self.kind.required_keys()) {
            report.record_error(
                category,
                format!(
                    "{}: missing required frontmatter field \"{}\"",
                    self.display_path(),
                    key
                ),
            );
        }

        debug!(
            "Checked {} ({} frontmatter fields)",
            self.display_path(),
            frontmatter.len()
        );
        Ok(())
    }
}

/// Enumerate entries of `kind` under `root`, sorted by name
///
/// Returns `None` when the subdirectory does not exist or is not a directory.
pub async fn list_entries(root: &Path, kind: EntryKind) -> Result<Option<Vec<Entry>>> {
    let dir = root.join(kind.directory());

    if !is_dir(&dir).await? {
        debug!("{} directory not present", kind.directory());
        return Ok(None);
    }

    let mut read_dir = tokio::fs::read_dir(&dir)
        .await
        .map_err(|e| BundleError::io(&dir, e))?;

    let mut entries = Vec::new();
    while let Some(item) = read_dir
        .next_entry()
        .await
        .map_err(|e| BundleError::io(&dir, e))?
    {
        let path = item.path();
        let name = item.file_name().to_string_lossy().into_owned();

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(m) => m,
            // Dangling symlink
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(BundleError::io(&path, e)),
        };

        match kind {
            EntryKind::Skill if metadata.is_dir() => entries.push(Entry {
                kind,
                path: path.join(SKILL_FILE),
                name,
            }),
            EntryKind::Rule | EntryKind::Command | EntryKind::Agent
                if metadata.is_file() && has_extension(&name, kind) =>
            {
                entries.push(Entry { kind, path, name });
            }
            _ => debug!("Ignoring {:?} in {}", name, kind.directory()),
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(Some(entries))
}

fn has_extension(file_name: &str, kind: EntryKind) -> bool {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    match kind {
        EntryKind::Rule => matches!(extension, "md" | "mdc"),
        _ => extension == "md",
    }
}

async fn is_file(path: &Path) -> Result<bool> {
    match tokio::fs::metadata(path).await {
        Ok(m) => Ok(m.is_file()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(BundleError::io(path, e)),
    }
}

async fn is_dir(path: &Path) -> Result<bool> {
    match tokio::fs::metadata(path).await {
        Ok(m) => Ok(m.is_dir()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(BundleError::io(path, e)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use plugcheck_types::Category;
    use std::fs;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn test_missing_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_entries(dir.path(), EntryKind::Agent)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_file_in_place_of_directory() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "rules", "not a directory");
        assert!(list_entries(dir.path(), EntryKind::Rule)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_rule_extensions() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "rules/b.mdc", "");
        write(dir.path(), "rules/a.md", "");
        write(dir.path(), "rules/notes.txt", "");
        fs::create_dir_all(dir.path().join("rules/nested.md")).unwrap();

        let entries = list_entries(dir.path(), EntryKind::Rule)
            .await
            .unwrap()
            .unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.md", "b.mdc"]);
    }

    #[tokio::test]
    async fn test_commands_ignore_mdc() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "commands/review.md", "");
        write(dir.path(), "commands/legacy.mdc", "");

        let entries = list_entries(dir.path(), EntryKind::Command)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display_path(), "commands/review.md");
    }

    #[tokio::test]
    async fn test_skills_are_directories_only() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "skills/strict/SKILL.md", "");
        write(dir.path(), "skills/README.md", "");

        let entries = list_entries(dir.path(), EntryKind::Skill)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "strict");
        assert_eq!(entries[0].display_path(), "skills/strict/SKILL.md");
    }

    #[tokio::test]
    async fn test_check_reports_each_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "agents/reviewer.md", "---\ntools: read\n---\n");

        let entries = list_entries(dir.path(), EntryKind::Agent)
            .await
            .unwrap()
            .unwrap();
        let mut report = Report::new();
        entries[0].check(&mut report).await.unwrap();

        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].category, Category::Agents);
        assert_eq!(
            report.errors[0].message,
            "agents/reviewer.md: missing required frontmatter field \"name\""
        );
        assert_eq!(
            report.errors[1].message,
            "agents/reviewer.md: missing required frontmatter field \"description\""
        );
    }

    #[tokio::test]
    async fn test_check_valid_rule() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "rules/no-any.mdc",
            "---\ndescription: Avoid any\nalwaysApply: true\n---\n",
        );

        let entries = list_entries(dir.path(), EntryKind::Rule)
            .await
            .unwrap()
            .unwrap();
        let mut report = Report::new();
        entries[0].check(&mut report).await.unwrap();
        assert!(report.is_success());
    }

    #[tokio::test]
    async fn test_non_utf8_content_is_checked_lossily() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("skills/bin")).unwrap();
        fs::write(
            dir.path().join("skills/bin/SKILL.md"),
            b"---\nname: x\xff\n---\n",
        )
        .unwrap();

        let entries = list_entries(dir.path(), EntryKind::Skill)
            .await
            .unwrap()
            .unwrap();
        let mut report = Report::new();
        entries[0].check(&mut report).await.unwrap();

        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].message,
            "skills/bin/SKILL.md: missing required frontmatter field \"description\""
        );
    }

    #[tokio::test]
    async fn test_skill_md_directory_counts_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("skills/odd/SKILL.md")).unwrap();

        let entries = list_entries(dir.path(), EntryKind::Skill)
            .await
            .unwrap()
            .unwrap();
        let mut report = Report::new();
        entries[0].check(&mut report).await.unwrap();

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].message, "skills/odd: missing SKILL.md");
    }
}
