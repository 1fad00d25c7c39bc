//! SKILL.md frontmatter extraction.

use std::collections::BTreeMap;
use thiserror::Error;

/// Ways an entry document can fail to yield a frontmatter mapping
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("entry document must start with a `---` frontmatter delimiter")]
    MissingOpening,
    #[error("missing closing `---` for frontmatter")]
    MissingClosing,
    #[error("invalid YAML in frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("frontmatter is not a key/value mapping")]
    NotAMapping,
    #[error("frontmatter value for `{0}` is not a scalar")]
    NonScalarValue(String),
}

/// Split raw entry-document text into its frontmatter mapping and body.
///
/// The frontmatter sits between `---` delimiter lines at the top of the
/// document and must parse as a flat mapping of scalar values. The body is
/// everything after the closing delimiter, returned opaque.
pub fn extract(content: &str) -> Result<(BTreeMap<String, String>, String), FrontmatterError> {
    let rest = content
        .strip_prefix("---")
        .ok_or(FrontmatterError::MissingOpening)?;
    let end = rest.find("\n---").ok_or(FrontmatterError::MissingClosing)?;

    let yaml = &rest[..end];
    let body = rest[end + 4..].trim().to_string();

    let doc: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    let mapping = match doc {
        serde_yaml::Value::Mapping(m) => m,
        serde_yaml::Value::Null => serde_yaml::Mapping::new(),
        _ => return Err(FrontmatterError::NotAMapping),
    };

    let mut map = BTreeMap::new();
    for (key, value) in mapping {
        let key = key
            .as_str()
            .ok_or(FrontmatterError::NotAMapping)?
            .to_string();
        let value = match scalar_to_string(&value) {
            Some(v) => v,
            None => return Err(FrontmatterError::NonScalarValue(key)),
        };
        map.insert(key, value);
    }

    Ok((map, body))
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Null => Some(String::new()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_frontmatter_and_body() {
        let content = "---\nname: safe-file-reader\ndescription: Read files without making changes\n---\n\nOnly inspect files; do not modify.\n";
        let (fm, body) = extract(content).unwrap();
        assert_eq!(fm.get("name").unwrap(), "safe-file-reader");
        assert_eq!(
            fm.get("description").unwrap(),
            "Read files without making changes"
        );
        assert_eq!(body, "Only inspect files; do not modify.");
    }

    #[test]
    fn test_extra_scalar_keys_preserved() {
        let content = "---\nname: pdf-tools\ndescription: Work with PDFs\nversion: 2\nlicense: MIT\n---\nBody\n";
        let (fm, _) = extract(content).unwrap();
        assert_eq!(fm.get("version").unwrap(), "2");
        assert_eq!(fm.get("license").unwrap(), "MIT");
    }

    #[test]
    fn test_missing_opening_delimiter() {
        let err = extract("name: foo\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::MissingOpening));
    }

    #[test]
    fn test_missing_closing_delimiter() {
        let err = extract("---\nname: foo\ndescription: bar\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::MissingClosing));
    }

    #[test]
    fn test_nested_value_rejected() {
        let content = "---\nname: foo\ndescription:\n  nested: true\n---\n";
        let err = extract(content).unwrap_err();
        assert!(matches!(err, FrontmatterError::NonScalarValue(ref k) if k == "description"));
    }

    #[test]
    fn test_non_mapping_frontmatter_rejected() {
        let err = extract("---\n- a\n- b\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::NotAMapping));
    }

    #[test]
    fn test_unsplittable_metadata_line() {
        assert!(extract("---\nname foo bar: [\n---\n").is_err());
    }

    #[test]
    fn test_empty_body() {
        let (fm, body) = extract("---\nname: foo\n---\n").unwrap();
        assert_eq!(fm.get("name").unwrap(), "foo");
        assert!(body.is_empty());
    }
}
