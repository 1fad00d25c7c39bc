//! Skill packages: portable, repo-checkable instruction bundles.
//!
//! A skill package is a directory with a SKILL.md entry document (YAML
//! frontmatter plus an instruction body) and optional `scripts/`,
//! `references/`, and `assets/` resource directories. This crate scaffolds
//! new packages and validates existing ones against the package contract.

pub mod frontmatter;
pub mod index;
pub mod rules;
pub mod scaffold;
pub mod validate;

pub use index::SkillIndex;
pub use scaffold::ScaffoldError;
pub use validate::{validate_package, CheckId, Finding, Severity};
