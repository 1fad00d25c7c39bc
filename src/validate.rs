//! Package validation engine.
//!
//! Runs a fixed, ordered list of independent checks against a package path
//! and collects every finding in one pass instead of stopping at the first
//! defect. Expected rule violations become findings; `Err` is reserved for
//! genuine I/O faults.

use crate::frontmatter;
use crate::rules;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Whether a finding blocks acceptance or is advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Identifier of the check that produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    MissingPackage,
    MissingEntry,
    MalformedFrontmatter,
    MissingField,
    InvalidName,
    InvalidDescription,
    PlaceholderDescription,
    NameMismatch,
    InvalidResourceDir,
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            CheckId::MissingPackage => "missing_package",
            CheckId::MissingEntry => "missing_entry",
            CheckId::MalformedFrontmatter => "malformed_frontmatter",
            CheckId::MissingField => "missing_field",
            CheckId::InvalidName => "invalid_name",
            CheckId::InvalidDescription => "invalid_description",
            CheckId::PlaceholderDescription => "placeholder_description",
            CheckId::NameMismatch => "name_mismatch",
            CheckId::InvalidResourceDir => "invalid_resource_dir",
        };
        write!(f, "{id}")
    }
}

/// One validation result
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub check: CheckId,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn error(check: CheckId, message: impl Into<String>) -> Self {
        Finding {
            check,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(check: CheckId, message: impl Into<String>) -> Self {
        Finding {
            check,
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.severity, self.check, self.message)
    }
}

/// Validate the package rooted at `root`, returning every finding.
///
/// An empty list means the package is accepted. Validation never mutates
/// the package; each invocation reads the directory fresh.
pub fn validate_package(root: &Path) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();

    if !root.exists() {
        findings.push(Finding::error(
            CheckId::MissingPackage,
            format!("package directory {} does not exist", root.display()),
        ));
        return Ok(findings);
    }
    if !root.is_dir() {
        findings.push(Finding::error(
            CheckId::MissingPackage,
            format!("{} is not a directory", root.display()),
        ));
        return Ok(findings);
    }

    let entry = root.join(rules::ENTRY_FILENAME);
    if !entry.is_file() {
        findings.push(Finding::error(
            CheckId::MissingEntry,
            format!("missing entry document {}", rules::ENTRY_FILENAME),
        ));
    } else {
        let content = std::fs::read_to_string(&entry)
            .with_context(|| format!("failed to read {}", entry.display()))?;
        match frontmatter::extract(&content) {
            Ok((fm, _body)) => check_metadata(root, &fm, &mut findings),
            // Malformed frontmatter skips the field checks rather than
            // guessing at partial metadata.
            Err(e) => findings.push(Finding::error(CheckId::MalformedFrontmatter, e.to_string())),
        }
    }

    check_resource_dirs(root, &mut findings);
    Ok(findings)
}

fn check_metadata(root: &Path, fm: &BTreeMap<String, String>, findings: &mut Vec<Finding>) {
    let name = fm.get("name").map(String::as_str).unwrap_or("");
    let description = fm.get("description").map(String::as_str).unwrap_or("");

    for (field, value) in [("name", name), ("description", description)] {
        if value.is_empty() {
            findings.push(Finding::error(
                CheckId::MissingField,
                format!("frontmatter field `{field}` is missing or empty"),
            ));
        }
    }

    if !name.is_empty() {
        if let Err(reason) = rules::check_name(name) {
            findings.push(Finding::error(
                CheckId::InvalidName,
                format!("invalid name `{name}`: {reason}"),
            ));
        }
    }

    if !description.is_empty() {
        if let Err(reason) = rules::check_description(description) {
            findings.push(Finding::error(
                CheckId::InvalidDescription,
                format!("invalid description: {reason}"),
            ));
        } else if description == rules::PLACEHOLDER_DESCRIPTION {
            findings.push(Finding::warning(
                CheckId::PlaceholderDescription,
                "description is still the scaffold placeholder",
            ));
        }
    }

    if !name.is_empty() {
        if let Some(dir_name) = dir_base_name(root) {
            if name != dir_name {
                findings.push(Finding::error(
                    CheckId::NameMismatch,
                    format!("frontmatter name `{name}` does not match directory name `{dir_name}`"),
                ));
            }
        }
    }
}

fn check_resource_dirs(root: &Path, findings: &mut Vec<Finding>) {
    for dir in rules::RESOURCE_DIRS {
        let path = root.join(dir);
        if path.exists() && !path.is_dir() {
            findings.push(Finding::error(
                CheckId::InvalidResourceDir,
                format!("{dir} exists but is not a directory"),
            ));
        }
    }
}

// Resolves `.`-style paths so the directory name comparison sees the real
// base name.
fn dir_base_name(root: &Path) -> Option<String> {
    let canonical = root.canonicalize().ok()?;
    canonical
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
}

/// True if any finding blocks acceptance.
pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Error)
}
