//! Shared naming and metadata rules.
//!
//! Defined once and used by both the validator and the scaffolder, so a
//! freshly scaffolded package is guaranteed to validate.

use once_cell::sync::Lazy;
use regex::Regex;

/// Validation constants
pub const MAX_NAME_LEN: usize = 40;
pub const MAX_DESCRIPTION_LEN: usize = 1024;

/// Required entry document at the package root
pub const ENTRY_FILENAME: &str = "SKILL.md";

/// Optional resource directories; contents are opaque
pub const RESOURCE_DIRS: [&str; 3] = ["scripts", "references", "assets"];

/// Description the scaffolder writes. Validation flags it with an advisory
/// until the author replaces it.
pub const PLACEHOLDER_DESCRIPTION: &str =
    "Placeholder description. Replace with when and why an agent should use this skill.";

static NAME_CHARSET: Lazy<Regex> = Lazy::new(|| Regex::new("^[a-z0-9-]+$").unwrap());

/// Why a proposed skill name fails the naming rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    Empty,
    TooLong,
    BadCharacters,
    EdgeHyphen,
    ConsecutiveHyphens,
}

impl std::fmt::Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameError::Empty => write!(f, "name is empty"),
            NameError::TooLong => write!(f, "name exceeds {MAX_NAME_LEN} characters"),
            NameError::BadCharacters => {
                write!(f, "name must use lowercase letters, digits, and hyphens only")
            }
            NameError::EdgeHyphen => write!(f, "name must not start or end with a hyphen"),
            NameError::ConsecutiveHyphens => write!(f, "name must not contain consecutive hyphens"),
        }
    }
}

/// Why a description fails the description rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionError {
    Empty,
    TooLong,
    AngleBrackets,
}

impl std::fmt::Display for DescriptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DescriptionError::Empty => write!(f, "description is empty"),
            DescriptionError::TooLong => {
                write!(f, "description exceeds {MAX_DESCRIPTION_LEN} characters")
            }
            DescriptionError::AngleBrackets => {
                write!(f, "description must not contain `<` or `>`")
            }
        }
    }
}

/// Check a skill name against the naming rule, reporting the first
/// sub-reason that fails.
pub fn check_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(NameError::TooLong);
    }
    if !NAME_CHARSET.is_match(name) {
        return Err(NameError::BadCharacters);
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Err(NameError::EdgeHyphen);
    }
    if name.contains("--") {
        return Err(NameError::ConsecutiveHyphens);
    }
    Ok(())
}

/// Check a description against the length and forbidden-character rules.
///
/// The angle-bracket rule is deliberately narrow (no markup sanitization):
/// the field is later embedded verbatim in structured prompts.
pub fn check_description(description: &str) -> Result<(), DescriptionError> {
    if description.is_empty() {
        return Err(DescriptionError::Empty);
    }
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(DescriptionError::TooLong);
    }
    if description.contains('<') || description.contains('>') {
        return Err(DescriptionError::AngleBrackets);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["ab", "pdf-tools", "a1-b2-c3", "x", &"a".repeat(40)] {
            assert!(check_name(name).is_ok(), "expected `{name}` to be valid");
        }
    }

    #[test]
    fn test_name_hyphen_placement() {
        assert_eq!(check_name("-ab"), Err(NameError::EdgeHyphen));
        assert_eq!(check_name("ab-"), Err(NameError::EdgeHyphen));
        assert_eq!(check_name("a--b"), Err(NameError::ConsecutiveHyphens));
    }

    #[test]
    fn test_name_length_boundary() {
        assert!(check_name(&"a".repeat(40)).is_ok());
        assert_eq!(check_name(&"a".repeat(41)), Err(NameError::TooLong));
    }

    #[test]
    fn test_name_charset() {
        assert_eq!(check_name("Invalid_Name"), Err(NameError::BadCharacters));
        assert_eq!(check_name("has space"), Err(NameError::BadCharacters));
        assert_eq!(check_name(""), Err(NameError::Empty));
    }

    #[test]
    fn test_description_length_boundary() {
        assert!(check_description(&"d".repeat(1024)).is_ok());
        assert_eq!(
            check_description(&"d".repeat(1025)),
            Err(DescriptionError::TooLong)
        );
    }

    #[test]
    fn test_description_angle_brackets() {
        assert_eq!(
            check_description("renders <script> tags"),
            Err(DescriptionError::AngleBrackets)
        );
        assert!(check_description("renders script tags").is_ok());
    }

    #[test]
    fn test_placeholder_description_is_itself_valid() {
        assert!(check_description(PLACEHOLDER_DESCRIPTION).is_ok());
    }
}
