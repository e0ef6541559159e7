//! Core enums for docweave line classification.

use serde::{Deserialize, Serialize};

/// The classification of a single input line.
///
/// A line is [`Classification::Prose`] when it is non-empty and begins
/// with the configured marker character; every other line, the empty
/// string included, is [`Classification::Code`]. Classification is a
/// pure function of the line's content alone and never depends on
/// position or neighbouring lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Narrative text introduced by the marker character
    Prose,
    /// Program text, rendered verbatim inside a literal block
    Code,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Prose => write!(f, "prose"),
            Classification::Code => write!(f, "code"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_display() {
        assert_eq!(Classification::Prose.to_string(), "prose");
        assert_eq!(Classification::Code.to_string(), "code");
    }

    #[test]
    fn test_classification_copy_semantics() {
        let a = Classification::Prose;
        let b = a;
        assert_eq!(a, b);
        assert_ne!(Classification::Prose, Classification::Code);
    }
}
