//! Output-markup configuration.

use serde::{Deserialize, Serialize};

/// Output-markup configuration.
///
/// Controls the constant markup the converter wraps around the
/// line-derived output: whether the style/role prologue is written,
/// and the class tag attached to code blocks alongside the language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarkupConfig {
    /// Write the style and role declaration blocks before any
    /// line-derived output.
    /// Default: true
    #[serde(default = "default_true")]
    pub prologue: bool,

    /// First classification tag on every code block directive.
    /// Default: "program"
    #[serde(default = "default_class_tag")]
    pub class_tag: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            prologue: true,
            class_tag: "program".to_string(),
        }
    }
}

impl MarkupConfig {
    /// Merge another MarkupConfig into this one.
    pub fn merge(&mut self, other: &MarkupConfig) {
        self.prologue = other.prologue;
        self.class_tag = other.class_tag.clone();
    }
}

fn default_true() -> bool {
    true
}

fn default_class_tag() -> String {
    "program".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let markup = MarkupConfig::default();
        assert!(markup.prologue);
        assert_eq!(markup.class_tag, "program");
    }

    #[test]
    fn test_serde_pascal_case() {
        let toml_str = r#"
            Prologue = false
            ClassTag = "listing"
        "#;

        let markup: MarkupConfig = toml::from_str(toml_str).unwrap();
        assert!(!markup.prologue);
        assert_eq!(markup.class_tag, "listing");
    }

    #[test]
    fn test_merge() {
        let mut base = MarkupConfig::default();
        let other = MarkupConfig {
            prologue: false,
            class_tag: "source".to_string(),
        };
        base.merge(&other);
        assert!(!base.prologue);
        assert_eq!(base.class_tag, "source");
    }
}
