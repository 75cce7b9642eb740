//! ansifold - ANSI-aware slicing and wrapping for the terminal.
//!
//! This binary exposes the layout library as the `af` command, reading
//! from files or stdin and writing the result to stdout.

mod cli;

use ansifold_ansi::sanitize::sanitize_preserving_ansi;
use ansifold_ansi::{strip_styles, width};
use ansifold_config::Config;
use ansifold_core::{AnsiError, Result, SliceOptions};
use ansifold_layout::{slice_with_options, wrap};
use clap::Parser;
use cli::{Cli, Command, InputArgs, SliceArgs, WrapArgs};
use log::{debug, error, info, LevelFilter};
use std::io::{self, Read, Write};

fn main() {
    let cli = Cli::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("ansifold v{}", env!("CARGO_PKG_VERSION"));

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
fn run(cli: &Cli) -> Result<()> {
    if cli.init_config {
        let path = Config::ensure_config_file()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = load_config(cli)?;

    let Some(command) = &cli.command else {
        return Err(AnsiError::InvalidInput(
            "no command given (try `af --help`)".into(),
        ));
    };

    let output = match command {
        Command::Wrap(args) => run_wrap(args, &config, cli.sanitize)?,
        Command::Slice(args) => run_slice(args, &config, cli.sanitize)?,
        Command::Strip(args) => strip_styles(&read_input(args, cli.sanitize)?),
        Command::Width(args) => {
            let codepoint = cli::parse_codepoint(&args.codepoint)?;
            format!("{}\n", width(codepoint, config.width.ambiguous_as_wide)?)
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Load configuration, then apply flags that override it.
fn load_config(cli: &Cli) -> Result<Config> {
    configure(Config::load()?, cli)
}

/// Apply `--config` and the width flag on top of `base`.
fn configure(base: Config, cli: &Cli) -> Result<Config> {
    let mut config = base.with_override(cli.config.as_deref())?;
    if cli.ambiguous_wide {
        config.width.ambiguous_as_wide = true;
    }
    debug!("Loaded config: {:?}", config);
    Ok(config)
}

fn run_wrap(args: &WrapArgs, config: &Config, sanitize: bool) -> Result<String> {
    let columns = args.effective_width(config.wrap.columns);
    let mut options = config.wrap_options();
    if args.no_trim {
        options.trim = false;
    }
    if args.no_word_wrap {
        options.word_wrap = false;
    }
    if args.hard {
        options.hard = true;
    }
    debug!("Wrapping to {} columns with {:?}", columns, options);

    Ok(wrap(&read_input(&args.input, sanitize)?, columns, &options))
}

fn run_slice(args: &SliceArgs, config: &Config, sanitize: bool) -> Result<String> {
    let text = read_input(&args.input, sanitize)?;
    Ok(slice_lines(&text, args.start, args.end, &config.slice_options()))
}

/// Slice every line of `text` to the same column range.
fn slice_lines(text: &str, start: usize, end: Option<usize>, options: &SliceOptions) -> String {
    text.split('\n')
        .map(|line| match end {
            Some(end) => slice_with_options(line, start..end, options),
            None => slice_with_options(line, start.., options),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read all input files, or stdin when none are given.
fn read_input(input: &InputArgs, sanitize: bool) -> Result<String> {
    let mut text = String::new();

    if input.files.is_empty() {
        info!("Reading from stdin");
        io::stdin().read_to_string(&mut text)?;
    } else {
        for path in &input.files {
            info!("Processing file: {}", path.display());
            text.push_str(&std::fs::read_to_string(path)?);
        }
    }

    if sanitize {
        text = sanitize_preserving_ansi(&text);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_lines() {
        let text = "\x1b[31mhello\x1b[39m\nworld\n";
        let sliced = slice_lines(text, 1, Some(3), &SliceOptions::default());
        assert_eq!(sliced, "\x1b[31mel\x1b[39m\nor\n");
    }

    #[test]
    fn test_slice_lines_open_end() {
        let sliced = slice_lines("abc\ndef", 2, None, &SliceOptions::default());
        assert_eq!(sliced, "c\nf");
    }

    #[test]
    fn test_configure_inline_override() {
        let cli = Cli::parse_from(["af", "-c", "[wrap]\nHard = true", "--ambiguous-wide", "strip"]);
        let config = configure(Config::default(), &cli).unwrap();
        assert!(config.wrap.hard);
        assert!(config.width.ambiguous_as_wide);
        assert_eq!(config.wrap.columns, 80);
    }

    #[test]
    fn test_configure_keeps_base_without_flags() {
        let cli = Cli::parse_from(["af", "strip"]);
        let mut base = Config::default();
        base.wrap.columns = 42;
        assert_eq!(configure(base.clone(), &cli).unwrap(), base);
    }

    #[test]
    fn test_read_input_files_sanitized() {
        let dir = std::env::temp_dir().join(format!("ansifold-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("input.txt");
        std::fs::write(&path, "\x1b[2J\x1b[1mhi\x1b[22m").unwrap();

        let input = InputArgs { files: vec![path] };
        assert_eq!(read_input(&input, true).unwrap(), "\x1b[1mhi\x1b[22m");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
