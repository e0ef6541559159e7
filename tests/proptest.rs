//! Property-based tests for docweave.
//!
//! These tests use proptest to generate random line sequences and
//! verify the classifier laws and the run/block-start correspondence.

use proptest::prelude::*;

use docweave_config::Config;
use docweave_core::{Classification, Classifier};
use docweave_render::Emitter;

/// Generate an arbitrary printable line (may or may not be prose).
fn any_line() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E]{0,120}").unwrap()
}

/// Generate a prose line: marker, then arbitrary content.
fn prose_line() -> impl Strategy<Value = String> {
    any_line().prop_map(|s| format!(";{}", s))
}

/// Generate a code line: guaranteed not to start with the marker.
fn code_line() -> impl Strategy<Value = String> {
    any_line().prop_map(|s| match s.chars().next() {
        Some(';') => format!(" {}", s),
        _ => s,
    })
}

/// Generate a document as a vector of classified lines.
fn document() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![prose_line(), code_line()],
        0..40,
    )
}

/// Convert a document without the prologue.
fn convert(lines: &[String]) -> String {
    let mut output = Vec::new();
    let config = Config::default();
    {
        let mut emitter = Emitter::new(&mut output, &config);
        for line in lines {
            emitter.emit_line(line).unwrap();
        }
    }
    String::from_utf8(output).unwrap()
}

/// Count maximal runs of consecutive code lines, treating the stream
/// start as code (the initial sentinel): only a prose→code edge opens
/// a counted run.
fn code_runs_after_prose(lines: &[String], classifier: &Classifier) -> usize {
    let mut prev = Classification::Code;
    let mut runs = 0;
    for line in lines {
        let current = classifier.classify(line);
        if prev == Classification::Prose && current == Classification::Code {
            runs += 1;
        }
        prev = current;
    }
    runs
}

// =============================================================================
// Classifier properties
// =============================================================================

proptest! {
    /// classify is total and matches the first-character rule exactly.
    #[test]
    fn classify_matches_first_char_rule(line in any_line()) {
        let classifier = Classifier::new(';');
        let expected = if line.starts_with(';') {
            Classification::Prose
        } else {
            Classification::Code
        };
        prop_assert_eq!(classifier.classify(&line), expected);
    }

    /// strip_prose removes the marker and at most one space; the
    /// remainder is a suffix of the original line.
    #[test]
    fn strip_prose_removes_marker_and_one_space(content in any_line()) {
        let classifier = Classifier::new(';');
        let line = format!(";{}", content);
        let stripped = classifier.strip_prose(&line);

        if let Some(rest) = content.strip_prefix(' ') {
            prop_assert_eq!(stripped, rest);
        } else {
            prop_assert_eq!(stripped, content.as_str());
        }
        prop_assert!(line.ends_with(stripped));
        prop_assert!(line.len() - stripped.len() <= 2);
    }

    /// The emitter never panics on arbitrary input lines.
    #[test]
    fn emitter_never_panics(lines in prop::collection::vec(any_line(), 0..60)) {
        let _ = convert(&lines);
    }
}

// =============================================================================
// Block structure properties
// =============================================================================

proptest! {
    /// Exactly one block-start per prose→code edge, none otherwise.
    #[test]
    fn one_block_start_per_code_run(lines in document()) {
        let classifier = Classifier::new(';');
        let out = convert(&lines);

        let expected = code_runs_after_prose(&lines, &classifier);
        let actual = out.matches(".. class:: program scheme").count();
        prop_assert_eq!(actual, expected);
    }

    /// All-code documents produce no block-start and reproduce every
    /// line verbatim behind the two-space indent.
    #[test]
    fn code_content_roundtrips(lines in prop::collection::vec(code_line(), 0..40)) {
        let out = convert(&lines);
        prop_assert!(!out.contains(".. class::"));

        let rendered: Vec<&str> = out.lines().collect();
        prop_assert_eq!(rendered.len(), lines.len());
        for (raw, line) in lines.iter().zip(rendered) {
            let expected = format!("  {}", raw);
            prop_assert_eq!(line, expected.as_str());
        }
    }

    /// The converted output always ends with a newline when any line
    /// was emitted.
    #[test]
    fn output_is_newline_terminated(lines in document()) {
        let out = convert(&lines);
        if !lines.is_empty() {
            prop_assert!(out.ends_with('\n'));
        } else {
            prop_assert!(out.is_empty());
        }
    }
}
