//! Command-line interface for docweave.

use clap::Parser;
use std::path::PathBuf;

/// Docweave - convert literate comment sources to reStructuredText.
///
/// Reads source files that interleave prose (line comments) and code,
/// and writes a reStructuredText document where prose becomes body
/// text and each code run becomes a tagged literal block.
#[derive(Parser, Debug)]
#[command(
    name = "dw",
    author = "Docweave Contributors",
    version,
    about = "Convert literate comment sources to reStructuredText",
    after_help = "Examples:\n  \
                  cat program.scm | dw\n  \
                  dw program.scm > program.rst\n  \
                  dw -m '#' -L python script.py\n  \
                  dw --no-prologue part2.scm >> combined.rst"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the prose marker character
    #[arg(short = 'm', long = "marker")]
    pub marker: Option<char>,

    /// Override the language tag attached to code blocks
    #[arg(short = 'L', long = "language")]
    pub language: Option<String>,

    /// Suppress the style and role header blocks
    #[arg(long = "no-prologue")]
    pub no_prologue: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use docweave_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
