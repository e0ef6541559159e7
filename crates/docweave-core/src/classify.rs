//! Line classification against a configurable marker character.
//!
//! The classifier is a pure first-character test: it never fails,
//! never allocates, and never looks beyond the line it is given.

use crate::enums::Classification;

/// Classifies lines by their leading marker character.
///
/// The marker is the comment-leader of the host syntax, e.g. `;` for
/// Scheme or Lisp sources. Lines beginning with the marker are prose;
/// everything else, the empty line included, is code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    marker: char,
}

impl Classifier {
    /// Create a classifier for the given marker character.
    pub fn new(marker: char) -> Self {
        Self { marker }
    }

    /// The marker character this classifier tests for.
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Classify a single line.
    ///
    /// A line is [`Classification::Prose`] iff it is non-empty and its
    /// first character equals the marker. Total over all strings.
    pub fn classify(&self, line: &str) -> Classification {
        if line.chars().next() == Some(self.marker) {
            Classification::Prose
        } else {
            Classification::Code
        }
    }

    /// Strip the prose marker from a line classified as prose.
    ///
    /// Removes the leading marker, and additionally exactly one space
    /// immediately following it when present. Further leading spaces
    /// are intentional prose indentation and are preserved, as is all
    /// trailing whitespace.
    ///
    /// Lines that do not start with the marker are returned unchanged;
    /// callers are expected to consult [`Classifier::classify`] first.
    pub fn strip_prose<'a>(&self, line: &'a str) -> &'a str {
        let rest = match line.strip_prefix(self.marker) {
            Some(rest) => rest,
            None => return line,
        };
        rest.strip_prefix(' ').unwrap_or(rest)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(';')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_prose() {
        let c = Classifier::new(';');
        assert_eq!(c.classify("; hello"), Classification::Prose);
        assert_eq!(c.classify(";hello"), Classification::Prose);
        assert_eq!(c.classify(";"), Classification::Prose);
        assert_eq!(c.classify(";;"), Classification::Prose);
    }

    #[test]
    fn test_classify_code() {
        let c = Classifier::new(';');
        assert_eq!(c.classify("(f x)"), Classification::Code);
        assert_eq!(c.classify(""), Classification::Code);
        assert_eq!(c.classify("  ; indented marker is code"), Classification::Code);
        assert_eq!(c.classify(" "), Classification::Code);
    }

    #[test]
    fn test_classify_alternate_marker() {
        let c = Classifier::new('#');
        assert_eq!(c.classify("# prose"), Classification::Prose);
        assert_eq!(c.classify("; not with this marker"), Classification::Code);
    }

    #[test]
    fn test_strip_prose_one_space() {
        let c = Classifier::new(';');
        assert_eq!(c.strip_prose("; hello"), "hello");
        assert_eq!(c.strip_prose(";hello"), "hello");
        assert_eq!(c.strip_prose(";"), "");
        assert_eq!(c.strip_prose("; "), "");
    }

    #[test]
    fn test_strip_prose_preserves_extra_indent() {
        let c = Classifier::new(';');
        // Only the first space after the marker is consumed.
        assert_eq!(c.strip_prose(";  indented"), " indented");
        assert_eq!(c.strip_prose(";   deeper"), "  deeper");
    }

    #[test]
    fn test_strip_prose_preserves_trailing_whitespace() {
        let c = Classifier::new(';');
        assert_eq!(c.strip_prose("; trailing  "), "trailing  ");
    }

    #[test]
    fn test_strip_prose_tab_not_stripped() {
        let c = Classifier::new(';');
        // Only a literal space is consumed after the marker.
        assert_eq!(c.strip_prose(";\thello"), "\thello");
    }

    #[test]
    fn test_strip_prose_non_prose_line_unchanged() {
        let c = Classifier::new(';');
        assert_eq!(c.strip_prose("(f x)"), "(f x)");
        assert_eq!(c.strip_prose(""), "");
    }

    #[test]
    fn test_strip_prose_double_marker() {
        let c = Classifier::new(';');
        // Second marker character is ordinary prose content.
        assert_eq!(c.strip_prose(";; heading"), "; heading");
    }
}
