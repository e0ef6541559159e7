//! Host-syntax configuration.
//!
//! Describes the source language being converted: the comment-leader
//! character that marks prose lines and the language tag attached to
//! code blocks for downstream syntax highlighting.

use serde::{Deserialize, Serialize};

/// Host-syntax configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SyntaxConfig {
    /// The comment-leader character that identifies prose lines.
    /// Default: `;`
    #[serde(default = "default_marker")]
    pub marker: char,

    /// Language tag attached to code blocks in the output markup.
    /// Default: "scheme"
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            marker: ';',
            language: "scheme".to_string(),
        }
    }
}

impl SyntaxConfig {
    /// Merge another SyntaxConfig into this one.
    ///
    /// All fields are copied from `other`; override files carry only
    /// the sections the user wants to change.
    pub fn merge(&mut self, other: &SyntaxConfig) {
        self.marker = other.marker;
        self.language = other.language.clone();
    }
}

fn default_marker() -> char {
    ';'
}

fn default_language() -> String {
    "scheme".to_string()
}
