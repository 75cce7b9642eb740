//! Command-line interface for ansifold.

use ansifold_core::{AnsiError, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Width used when none is given and the terminal cannot be queried.
pub const FALLBACK_COLUMNS: usize = 80;

/// ansifold - slice, wrap and measure ANSI-styled text.
///
/// Every operation counts display columns, keeps escape sequences intact
/// and leaves each piece of output with balanced styles.
#[derive(Parser, Debug)]
#[command(
    name = "af",
    author = "Ansifold Contributors",
    version,
    about = "Slice, wrap and measure ANSI-styled terminal text",
    after_help = "Repository: https://github.com/ansifold/ansifold\n\n\
                  Examples:\n  \
                  ls --color=always | af wrap -w 40\n  \
                  af slice --start 4 --end 20 log.txt\n  \
                  af strip colored.txt\n  \
                  af width U+65E5"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn", global = true)]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Count East Asian ambiguous-width glyphs as two columns
    #[arg(long = "ambiguous-wide", global = true)]
    pub ambiguous_wide: bool,

    /// Drop escape sequences other than styles and hyperlinks from input
    #[arg(long = "sanitize", global = true)]
    pub sanitize: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Write the default config file if it does not exist, print its path and exit
    #[arg(long = "init-config")]
    pub init_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Wrap text to a column width
    Wrap(WrapArgs),
    /// Cut a column range out of every line
    Slice(SliceArgs),
    /// Remove style and hyperlink sequences
    Strip(InputArgs),
    /// Print the display width of a code point
    Width(WidthArgs),
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct WrapArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Column budget (0 = auto-detect from terminal)
    #[arg(short = 'w', long = "width")]
    pub width: Option<usize>,

    /// Keep leading and trailing whitespace on rows
    #[arg(long = "no-trim")]
    pub no_trim: bool,

    /// Fill rows completely instead of breaking at spaces
    #[arg(long = "no-word-wrap")]
    pub no_word_wrap: bool,

    /// Always split words wider than the column budget
    #[arg(long = "hard")]
    pub hard: bool,
}

#[derive(Args, Debug)]
pub struct SliceArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// First column to keep
    #[arg(short = 's', long = "start", default_value = "0")]
    pub start: usize,

    /// Column to stop before (end of line if omitted)
    #[arg(short = 'e', long = "end")]
    pub end: Option<usize>,
}

#[derive(Args, Debug)]
pub struct WidthArgs {
    /// Code point as decimal, `0x1F600` or `U+1F600`
    #[arg(value_name = "CODEPOINT")]
    pub codepoint: String,
}

impl WrapArgs {
    /// Resolve the column budget (0 means auto-detect).
    ///
    /// An explicit `--width` wins over `configured`. Auto-detection only
    /// queries the terminal when stdout is one.
    pub fn effective_width(&self, configured: usize) -> usize {
        let requested = self.width.unwrap_or(configured);
        if requested > 0 {
            return requested;
        }

        if atty::is(atty::Stream::Stdout) {
            if let Ok((cols, _)) = crossterm::terminal::size() {
                if cols > 0 {
                    return cols as usize;
                }
            }
        }

        FALLBACK_COLUMNS
    }
}

/// Parse a code point written as decimal, `0x..` hex or `U+..` hex.
pub fn parse_codepoint(raw: &str) -> Result<u32> {
    let raw = raw.trim();
    let parsed = if let Some(hex) = raw.strip_prefix("U+").or_else(|| raw.strip_prefix("u+")) {
        u32::from_str_radix(hex, 16)
    } else if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        raw.parse()
    };

    parsed.map_err(|e| AnsiError::InvalidInput(format!("bad code point {:?}: {}", raw, e)))
}

/// Show paths information.
pub fn show_paths() {
    use ansifold_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["af"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.sanitize);
    }

    #[test]
    fn test_cli_parse_wrap() {
        let cli = Cli::parse_from(["af", "wrap", "-w", "40", "--hard", "-l", "debug", "file.txt"]);
        assert_eq!(cli.log_level, "debug");
        match cli.command {
            Some(Command::Wrap(args)) => {
                assert_eq!(args.width, Some(40));
                assert!(args.hard);
                assert!(!args.no_trim);
                assert_eq!(args.input.files, vec![PathBuf::from("file.txt")]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_slice() {
        let cli = Cli::parse_from(["af", "--ambiguous-wide", "slice", "--start", "2", "--end", "5"]);
        assert!(cli.ambiguous_wide);
        match cli.command {
            Some(Command::Slice(args)) => {
                assert_eq!(args.start, 2);
                assert_eq!(args.end, Some(5));
                assert!(args.input.files.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_init_config() {
        let cli = Cli::parse_from(["af", "--init-config"]);
        assert!(cli.init_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_explicit_width_wins() {
        let cli = Cli::parse_from(["af", "wrap", "-w", "12"]);
        let Some(Command::Wrap(args)) = cli.command else {
            panic!("expected wrap");
        };
        assert_eq!(args.effective_width(80), 12);
    }

    #[test]
    fn test_configured_width_used() {
        let cli = Cli::parse_from(["af", "wrap"]);
        let Some(Command::Wrap(args)) = cli.command else {
            panic!("expected wrap");
        };
        assert_eq!(args.effective_width(33), 33);
    }

    #[test]
    fn test_parse_codepoint() {
        assert_eq!(parse_codepoint("65").unwrap(), 65);
        assert_eq!(parse_codepoint("0x41").unwrap(), 0x41);
        assert_eq!(parse_codepoint("U+65E5").unwrap(), 0x65E5);
        assert!(matches!(parse_codepoint("zz"), Err(AnsiError::InvalidInput(_))));
    }
}
