//! Plugcheck Types - Core types for the plugcheck bundle validator
//!
//! This module defines the findings and the report produced by one validation run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The part of a bundle a finding refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Manifest,
    Skills,
    Rules,
    Commands,
    Agents,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Manifest => "manifest",
            Category::Skills => "skills",
            Category::Rules => "rules",
            Category::Commands => "commands",
            Category::Agents => "agents",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors block publishing, warnings are informational only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single recorded problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: Category,
    pub message: String,
}

impl Finding {
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

// ============================================================================
// Bundle entries
// ============================================================================

/// Kind of documentation unit found under one of the bundle subdirectories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Skill,
    Rule,
    Command,
    Agent,
}

impl EntryKind {
    /// All kinds, in the order they are checked
    pub const ALL: [EntryKind; 4] = [
        EntryKind::Skill,
        EntryKind::Rule,
        EntryKind::Command,
        EntryKind::Agent,
    ];

    /// Subdirectory of the bundle root holding entries of this kind
    pub fn directory(&self) -> &'static str {
        match self {
            EntryKind::Skill => "skills",
            EntryKind::Rule => "rules",
            EntryKind::Command => "commands",
            EntryKind::Agent => "agents",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            EntryKind::Skill => Category::Skills,
            EntryKind::Rule => Category::Rules,
            EntryKind::Command => Category::Commands,
            EntryKind::Agent => Category::Agents,
        }
    }

    /// Frontmatter keys every entry of this kind must carry
    pub fn required_keys(&self) -> &'static [&'static str] {
        match self {
            EntryKind::Rule => &["description"],
            EntryKind::Skill | EntryKind::Command | EntryKind::Agent => &["name", "description"],
        }
    }

    /// Only the skills directory must exist
    pub fn is_required(&self) -> bool {
        matches!(self, EntryKind::Skill)
    }
}

/// Number of entries enumerated per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryCounts {
    pub skills: usize,
    pub rules: usize,
    pub commands: usize,
    pub agents: usize,
}

impl EntryCounts {
    pub fn get(&self, kind: EntryKind) -> usize {
        match kind {
            EntryKind::Skill => self.skills,
            EntryKind::Rule => self.rules,
            EntryKind::Command => self.commands,
            EntryKind::Agent => self.agents,
        }
    }

    pub fn add(&mut self, kind: EntryKind, n: usize) {
        match kind {
            EntryKind::Skill => self.skills += n,
            EntryKind::Rule => self.rules += n,
            EntryKind::Command => self.commands += n,
            EntryKind::Agent => self.agents += n,
        }
    }

    pub fn total(&self) -> usize {
        self.skills + self.rules + self.commands + self.agents
    }
}

// ============================================================================
// Report
// ============================================================================

/// Outcome of one validation run
///
/// Errors and warnings are appended in the order they are found and never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub plugin_name: Option<String>,
    pub counts: EntryCounts,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, severity: Severity, finding: Finding) {
        match severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
        }
    }

    pub fn record_error(&mut self, category: Category, message: impl Into<String>) {
        self.record(Severity::Error, Finding::new(category, message));
    }

    pub fn record_warning(&mut self, category: Category, message: impl Into<String>) {
        self.record(Severity::Warning, Finding::new(category, message));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Warnings never affect the outcome
    pub fn is_success(&self) -> bool {
        !self.has_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_do_not_fail_report() {
        let mut report = Report::new();
        report.record_warning(Category::Manifest, "logo file not found: assets/logo.png");
        assert!(report.is_success());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_single_error_fails_report() {
        let mut report = Report::new();
        report.record_warning(Category::Manifest, "logo file not found: logo.svg");
        report.record_error(Category::Skills, "skills/ directory is missing");
        assert!(report.has_errors());
        assert!(!report.is_success());
        assert_eq!(report.warnings.len(), 1);

        report.record(
            Severity::Warning,
            Finding::new(Category::Agents, "agents/a.md: noted"),
        );
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_required_keys_per_kind() {
        assert_eq!(EntryKind::Rule.required_keys(), &["description"]);
        assert_eq!(EntryKind::Agent.required_keys(), &["name", "description"]);
        assert!(EntryKind::Skill.is_required());
        assert!(!EntryKind::Command.is_required());
    }

    #[test]
    fn test_entry_counts() {
        let mut counts = EntryCounts::default();
        counts.add(EntryKind::Skill, 2);
        counts.add(EntryKind::Rule, 3);
        assert_eq!(counts.get(EntryKind::Skill), 2);
        assert_eq!(counts.get(EntryKind::Agent), 0);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_finding_serializes_with_lowercase_category() {
        let finding = Finding::new(Category::Rules, "rules/a.mdc: missing frontmatter");
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["category"], "rules");
        assert_eq!(finding.to_string(), "[rules] rules/a.mdc: missing frontmatter");
    }
}
