//! Arguments shared by every `craft` subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true` on each arg, so
//! `craft model song -vv` and `craft -vv model song` parse the same.
//! Per-generation flags (`--root`, `--ext`, ...) live on the subcommands
//! instead; only cross-cutting concerns belong here.

use clap::Args;
use std::path::PathBuf;

/// Cross-cutting flags: verbosity, color, config, output format.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Verbosity counter; conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only errors
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress everything except errors. Errors always print.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI codes; also picked up from the `NO_COLOR` env var
    /// (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Explicit config file; when absent the default locations are probed.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Rendering mode for results (see [`OutputFormat`]).
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How results are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Colored, glyph-decorated lines.
    Human,
    /// The same lines without glyphs or ANSI codes.
    Plain,
    /// One serialized result object, for scripting.
    Json,
}
