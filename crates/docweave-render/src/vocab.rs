//! The markup vocabulary: the constant text the emitter writes around
//! line-derived output.
//!
//! The default vocabulary targets reStructuredText:
//! - code runs open with a `.. class::` directive carrying two tags
//!   (the class tag, e.g. "program", and the language identifier),
//!   followed by the bare `::` literal-block introducer;
//! - code lines are indented by two spaces, which is what makes the
//!   downstream renderer treat the run as a literal block;
//! - the prologue is a raw-HTML style block plus one `.. role::`
//!   declaration per inline role used in prose.

use docweave_config::Config;

/// Indentation prefix for every code line. Mandatory on each line of a
/// run; a single unindented line would terminate the literal block.
pub const CODE_INDENT: &str = "  ";

/// Inline roles prose may reference, each declared in the prologue.
pub const ROLE_NAMES: [&str; 5] = ["procedure", "variable", "value", "macro", "module"];

/// The fixed style declaration block, written once at startup.
pub const STYLE_HEADER: &str = "\
.. raw:: html

   <style>
     span.procedure { font-weight: bold }
     span.variable  { font-style: italic }
     span.value     { font-style: italic }
     span.macro     { font-weight: bold; font-style: italic }
     span.module    { font-variant: small-caps }
   </style>
";

/// The constant text fragments for one target markup language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Text emitted at the PROSE→CODE edge, once per code run.
    pub block_start: String,
    /// Indentation prefix for code lines.
    pub indent: &'static str,
    /// Header blocks written once before any line-derived output.
    pub prologue: String,
}

impl Vocabulary {
    /// The reStructuredText vocabulary for the given class tag and
    /// language identifier.
    pub fn rst(class_tag: &str, language: &str) -> Self {
        Self {
            block_start: format!("\n.. class:: {} {}\n\n::\n\n", class_tag, language),
            indent: CODE_INDENT,
            prologue: format!("{}\n{}\n", STYLE_HEADER, role_declarations()),
        }
    }

    /// Build the vocabulary named by a configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::rst(&config.markup.class_tag, &config.syntax.language)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::rst("program", "scheme")
    }
}

/// Render the `.. role::` declaration blocks for [`ROLE_NAMES`].
///
/// Each role maps to an interpreted-text role derived from `literal`,
/// carrying its own name as the HTML class:
///
/// ```text
/// .. role:: procedure(literal)
///    :class: procedure
/// ```
pub fn role_declarations() -> String {
    let mut out = String::new();
    for name in ROLE_NAMES {
        out.push_str(&format!(".. role:: {}(literal)\n   :class: {}\n\n", name, name));
    }
    // Drop the trailing blank line; the prologue adds its own spacing.
    out.pop();
    out
}
