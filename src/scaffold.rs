//! Skill package scaffolding.

use crate::rules::{self, NameError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid skill name `{name}`: {reason}")]
    InvalidName { name: String, reason: NameError },
    #[error("destination {} already exists", .0.display())]
    DestinationExists(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Create a new, minimal, rule-conformant skill package at
/// `parent/<name>` and return its root path.
///
/// The name must already satisfy the naming rule; no normalization is
/// applied. Resource directories are created first and SKILL.md is written
/// last, so an interrupted scaffold never leaves a directory that passes
/// validation.
pub fn create_package(name: &str, parent: &Path) -> Result<PathBuf, ScaffoldError> {
    if let Err(reason) = rules::check_name(name) {
        return Err(ScaffoldError::InvalidName {
            name: name.to_string(),
            reason,
        });
    }

    let root = parent.join(name);
    if root.exists() {
        return Err(ScaffoldError::DestinationExists(root));
    }
    fs::create_dir_all(&root)?;

    let scripts = root.join("scripts");
    fs::create_dir(&scripts)?;
    fs::write(
        scripts.join("example.sh"),
        format!("#!/bin/sh\n# Helper scripts live here. Replace or remove this example.\necho \"{name}\"\n"),
    )?;

    let references = root.join("references");
    fs::create_dir(&references)?;
    fs::write(
        references.join("overview.md"),
        "# Reference material\n\nLonger-form documentation the skill body can point the agent at.\n",
    )?;

    let assets = root.join("assets");
    fs::create_dir(&assets)?;
    fs::write(
        assets.join("example.txt"),
        "Static files used by the skill (templates, images) live here.\n",
    )?;

    let entry = format!(
        "---\nname: {name}\ndescription: {placeholder}\n---\n\n# {name}\n\nDescribe the workflow this skill teaches. The body is free-form text\nthe agent reads after activating the skill.\n",
        placeholder = rules::PLACEHOLDER_DESCRIPTION,
    );
    fs::write(root.join(rules::ENTRY_FILENAME), entry)?;

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{validate_package, CheckId, Severity};
    use tempfile::TempDir;

    #[test]
    fn test_scaffold_layout() {
        let tmp = TempDir::new().unwrap();
        let root = create_package("my-skill", tmp.path()).unwrap();
        assert!(root.join(rules::ENTRY_FILENAME).is_file());
        for dir in rules::RESOURCE_DIRS {
            assert!(root.join(dir).is_dir(), "missing {dir}/");
        }
    }

    #[test]
    fn test_scaffolded_package_validates() {
        let tmp = TempDir::new().unwrap();
        let root = create_package("fresh-skill", tmp.path()).unwrap();
        let findings = validate_package(&root).unwrap();
        assert!(
            findings.iter().all(|f| f.severity != Severity::Error),
            "scaffold produced error findings: {findings:?}"
        );
        // The placeholder description is flagged as advisory only.
        assert!(findings
            .iter()
            .any(|f| f.check == CheckId::PlaceholderDescription));
    }

    #[test]
    fn test_invalid_name_rejected() {
        let tmp = TempDir::new().unwrap();
        let err = create_package("Bad Name", tmp.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidName { .. }));
        assert!(!tmp.path().join("Bad Name").exists());
    }

    #[test]
    fn test_destination_collision() {
        let tmp = TempDir::new().unwrap();
        let root = create_package("dup", tmp.path()).unwrap();
        let before = fs::read_to_string(root.join(rules::ENTRY_FILENAME)).unwrap();

        let err = create_package("dup", tmp.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::DestinationExists(_)));

        // First package untouched.
        let after = fs::read_to_string(root.join(rules::ENTRY_FILENAME)).unwrap();
        assert_eq!(before, after);
    }
}
