//! Docweave Render
//!
//! The streaming emitter for docweave. The [`Emitter`] owns the line
//! classifier and the block-transition state machine, and writes
//! transformed output for one line at a time, in input order.
//!
//! # Example
//!
//! ```
//! use docweave_config::Config;
//! use docweave_render::Emitter;
//!
//! let config = Config::default();
//! let mut output = Vec::new();
//! let mut emitter = Emitter::new(&mut output, &config);
//!
//! emitter.emit_line("; A prose line").unwrap();
//! emitter.emit_line("(display 42)").unwrap();
//!
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("A prose line"));
//! assert!(text.contains("  (display 42)"));
//! ```

pub mod vocab;

pub use vocab::{role_declarations, Vocabulary, CODE_INDENT, ROLE_NAMES, STYLE_HEADER};

use std::io::{self, Write};

use docweave_config::Config;
use docweave_core::{Classification, Classifier, StreamState, Transition};

/// Streams transformed lines to a writer.
///
/// Carries the single piece of cross-line state (the previous line's
/// classification) and applies the block-transition action before each
/// line's own output. Construction is cheap; one emitter corresponds
/// to one output document.
pub struct Emitter<W: Write> {
    writer: W,
    classifier: Classifier,
    state: StreamState,
    vocab: Vocabulary,
}

impl<W: Write> Emitter<W> {
    /// Create an emitter for the given configuration.
    pub fn new(writer: W, config: &Config) -> Self {
        Self::with_vocabulary(
            writer,
            Classifier::new(config.syntax.marker),
            Vocabulary::from_config(config),
        )
    }

    /// Create an emitter with an explicit classifier and vocabulary.
    ///
    /// The vocabulary is injected so another target markup can be
    /// substituted without touching the transition logic.
    pub fn with_vocabulary(writer: W, classifier: Classifier, vocab: Vocabulary) -> Self {
        Self {
            writer,
            classifier,
            state: StreamState::new(),
            vocab,
        }
    }

    /// Write the fixed style and role header blocks.
    ///
    /// Callers invoke this once, before the first [`Emitter::emit_line`],
    /// when the configuration asks for a prologue.
    pub fn write_prologue(&mut self) -> io::Result<()> {
        self.writer.write_all(self.vocab.prologue.as_bytes())
    }

    /// Transform and write one input line.
    ///
    /// Applies the block-transition action first (block-start markup at
    /// the PROSE→CODE edge, nothing otherwise), then the line's own
    /// rendering: stripped prose verbatim, or indented raw code.
    pub fn emit_line(&mut self, line: &str) -> io::Result<()> {
        let class = self.classifier.classify(line);

        if self.state.observe(class) == Transition::StartCodeBlock {
            self.writer.write_all(self.vocab.block_start.as_bytes())?;
        }

        match class {
            Classification::Prose => {
                writeln!(self.writer, "{}", self.classifier.strip_prose(line))
            }
            Classification::Code => writeln!(self.writer, "{}{}", self.vocab.indent, line),
        }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// The classification of the most recently emitted line.
    pub fn previous_classification(&self) -> Classification {
        self.state.previous()
    }
}
