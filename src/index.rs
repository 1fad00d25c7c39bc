//! Skill package discovery and listing.

use crate::frontmatter;
use crate::rules;
use crate::validate::{self, Severity};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Minimal metadata for one discovered package
#[derive(Debug, Clone)]
pub struct SkillSummary {
    pub name: String,
    pub description: String,
    pub path: PathBuf,
    pub error_count: usize,
}

/// Index of the skill packages found under one directory
#[derive(Debug, Default)]
pub struct SkillIndex {
    skills: Vec<SkillSummary>,
    scan_errors: Vec<(PathBuf, String)>,
}

impl SkillIndex {
    /// Scan the immediate children of `dir` for skill packages.
    ///
    /// A child counts as a package when it is a directory containing the
    /// entry document. Invalid packages are still listed, with their
    /// error-finding count attached.
    pub fn build(dir: &Path) -> Result<Self> {
        let mut index = SkillIndex::default();

        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("failed to read skills directory {}", dir.display()))?;
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() || !path.join(rules::ENTRY_FILENAME).exists() {
                continue;
            }
            match summarize(&path) {
                Ok(summary) => index.skills.push(summary),
                Err(e) => index.scan_errors.push((path, format!("{e:#}"))),
            }
        }

        index.skills.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(index)
    }

    pub fn all(&self) -> &[SkillSummary] {
        &self.skills
    }

    pub fn count(&self) -> usize {
        self.skills.len()
    }

    /// Packages that could not be read at all (I/O failures, not findings)
    pub fn scan_errors(&self) -> &[(PathBuf, String)] {
        &self.scan_errors
    }

    /// Render one line per discovered skill, flagging invalid packages.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        for skill in &self.skills {
            if skill.error_count == 0 {
                lines.push(format!("- {}: {}", skill.name, skill.description));
            } else {
                lines.push(format!(
                    "- {}: {} [{} errors]",
                    skill.name, skill.description, skill.error_count
                ));
            }
        }
        for (path, err) in &self.scan_errors {
            lines.push(format!("! {}: {}", path.display(), err));
        }
        lines.join("\n")
    }
}

fn summarize(path: &Path) -> Result<SkillSummary> {
    let findings = validate::validate_package(path)?;
    let error_count = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();

    let content = std::fs::read_to_string(path.join(rules::ENTRY_FILENAME))
        .with_context(|| format!("failed to read entry document in {}", path.display()))?;

    // Fall back to the directory name when the frontmatter is unusable; the
    // error count already reflects the defect.
    let (name, description) = match frontmatter::extract(&content) {
        Ok((fm, _)) => (
            fm.get("name").cloned().unwrap_or_else(|| dir_name(path)),
            fm.get("description").cloned().unwrap_or_default(),
        ),
        Err(_) => (dir_name(path), String::new()),
    };

    Ok(SkillSummary {
        name,
        description,
        path: path.to_path_buf(),
        error_count,
    })
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
