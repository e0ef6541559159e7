//! Docweave - convert literate comment sources to reStructuredText.
//!
//! This binary provides the CLI interface to the docweave library,
//! reading from files or stdin and streaming converted output to
//! stdout one line at a time.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, trace, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use docweave_config::Config;
use docweave_render::Emitter;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Docweave v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> io::Result<()> {
    // Load and merge configuration
    let config = load_config(cli)?;
    debug!(
        "Config: marker={:?} language={} prologue={}",
        config.syntax.marker, config.syntax.language, config.markup.prologue
    );

    if cli.should_read_stdin() {
        run_stdin(cli, &config)
    } else {
        run_files(cli, &config)
    }
}

/// Load configuration with optional overrides.
fn load_config(cli: &Cli) -> io::Result<Config> {
    let mut config = Config::load().unwrap_or_default();

    // Apply config override if provided
    if let Some(ref config_arg) = cli.config {
        if Path::new(config_arg).exists() {
            // It's a file path
            match Config::load_from(Path::new(config_arg)) {
                Ok(override_config) => {
                    config.merge(&override_config);
                    debug!("Merged config from file: {}", config_arg);
                }
                Err(e) => {
                    error!("Failed to load config file {}: {}", config_arg, e);
                }
            }
        } else {
            // Try parsing as inline TOML
            match toml::from_str::<Config>(config_arg) {
                Ok(override_config) => {
                    config.merge(&override_config);
                    debug!("Merged inline config");
                }
                Err(e) => {
                    error!("Failed to parse config: {}", e);
                }
            }
        }
    }

    // CLI flags win over any loaded config
    if let Some(marker) = cli.marker {
        config.syntax.marker = marker;
    }
    if let Some(ref language) = cli.language {
        config.syntax.language = language.clone();
    }
    if cli.no_prologue {
        config.markup.prologue = false;
    }

    Ok(config)
}

/// Process input from stdin, flushing after every line.
fn run_stdin(_cli: &Cli, config: &Config) -> io::Result<()> {
    info!("Reading from stdin");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut emitter = Emitter::new(stdout.lock(), config);

    if config.markup.prologue {
        emitter.write_prologue()?;
    }

    for line in stdin.lock().lines() {
        let line = line?;
        trace!("Input line: {}", line);
        emitter.emit_line(&line)?;
        emitter.flush()?;
    }

    emitter.flush()?;
    Ok(())
}

/// Process input files, one converted document per file.
fn run_files(cli: &Cli, config: &Config) -> io::Result<()> {
    let stdout = io::stdout();

    for path in &cli.files {
        info!("Processing file: {}", path.display());

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut emitter = Emitter::new(stdout.lock(), config);

        if config.markup.prologue {
            emitter.write_prologue()?;
        }

        for line in reader.lines() {
            let line = line?;
            emitter.emit_line(&line)?;
        }

        emitter.flush()?;
    }

    Ok(())
}
