//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use craft_core::application::services::CollisionPolicy;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "craft",
    bin_name = "craft",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f528} Artifact scaffolding for CRUD backends",
    long_about = "Craft generates models, controllers and services for a \
                  conventional backend layout from named templates.",
    after_help = "EXAMPLES:\n\
        \x20 craft model song --resource\n\
        \x20 craft controller playlist --on-conflict rename\n\
        \x20 craft resource user --root ./backend\n\
        \x20 craft completions bash > /usr/share/bash-completion/completions/craft",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a model.
    #[command(
        visible_alias = "m",
        about = "Generate a model",
        after_help = "EXAMPLES:\n\
            \x20 craft model song\n\
            \x20 craft model playlist_team --resource\n\
            \x20 craft model song --on-conflict rename"
    )]
    Model(GenerateArgs),

    /// Generate a controller.
    #[command(
        visible_alias = "c",
        about = "Generate a controller",
        after_help = "EXAMPLES:\n\
            \x20 craft controller song\n\
            \x20 craft controller SongController --resource"
    )]
    Controller(GenerateArgs),

    /// Generate a service.
    #[command(
        visible_alias = "s",
        about = "Generate a service",
        after_help = "EXAMPLES:\n\
            \x20 craft service song\n\
            \x20 craft service tag --resource"
    )]
    Service(GenerateArgs),

    /// Generate a full resource (model + controller).
    #[command(
        visible_alias = "r",
        about = "Generate a full resource",
        after_help = "EXAMPLES:\n\
            \x20 craft resource song\n\
            \x20 craft resource user --root ./backend --ext js"
    )]
    Resource(ResourceArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 craft completions bash > ~/.local/share/bash-completion/completions/craft\n\
            \x20 craft completions zsh  > ~/.zfunc/_craft\n\
            \x20 craft completions fish > ~/.config/fish/completions/craft.fish"
    )]
    Completions(CompletionsArgs),
}

// ── shared generation flags ───────────────────────────────────────────────────

/// Flags shared by every generating subcommand.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Collision handling.
    #[arg(
        long = "on-conflict",
        value_enum,
        value_name = "POLICY",
        help = "What to do when the target file already exists"
    )]
    pub on_conflict: Option<OnConflict>,

    /// Project root the output paths are composed under.
    #[arg(
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Project root directory"
    )]
    pub root: PathBuf,

    /// Directory of `.tpl` files overriding the built-in templates.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Custom template directory"
    )]
    pub templates: Option<PathBuf>,

    /// Extension of generated files, without the dot.
    #[arg(long = "ext", value_name = "EXT", help = "Output file extension")]
    pub ext: Option<String>,
}

/// Arguments for `craft model` / `controller` / `service`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Base name of the artifact.  Case and spelling variants are
    /// normalised; `craft model playlist_team` and `craft model
    /// PlaylistTeam` generate the same file.
    #[arg(value_name = "NAME", help = "Artifact name")]
    pub name: String,

    /// Use the CRUD-shaped resource template.
    #[arg(long = "resource", help = "Generate with full CRUD scaffolding")]
    pub resource: bool,

    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for `craft resource`.
#[derive(Debug, Args)]
pub struct ResourceArgs {
    /// Base name of the resource.
    #[arg(value_name = "NAME", help = "Resource name")]
    pub name: String,

    #[command(flatten)]
    pub target: TargetArgs,
}

/// Collision policy flag values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OnConflict {
    /// Refuse to overwrite; exit with an error.
    #[default]
    Fail,
    /// Pick the next free `Copy` / `CopyN` name and proceed.
    Rename,
}

impl From<OnConflict> for CollisionPolicy {
    fn from(value: OnConflict) -> Self {
        match value {
            OnConflict::Fail => CollisionPolicy::FailFast,
            OnConflict::Rename => CollisionPolicy::AutoRename,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `craft completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_model_command() {
        let cli = Cli::parse_from(["craft", "model", "song", "--resource"]);
        match cli.command {
            Commands::Model(args) => {
                assert_eq!(args.name, "song");
                assert!(args.resource);
                assert_eq!(args.target.root, PathBuf::from("."));
            }
            other => panic!("expected Model, got {other:?}"),
        }
    }

    #[test]
    fn on_conflict_values_parse() {
        let cli = Cli::parse_from(["craft", "model", "song", "--on-conflict", "rename"]);
        if let Commands::Model(args) = cli.command {
            assert_eq!(args.target.on_conflict, Some(OnConflict::Rename));
        } else {
            panic!("expected Model command");
        }
    }

    #[test]
    fn resource_command_takes_target_flags() {
        let cli = Cli::parse_from([
            "craft", "resource", "song", "--root", "/tmp/app", "--ext", "ts",
        ]);
        if let Commands::Resource(args) = cli.command {
            assert_eq!(args.target.root, PathBuf::from("/tmp/app"));
            assert_eq!(args.target.ext.as_deref(), Some("ts"));
        } else {
            panic!("expected Resource command");
        }
    }

    #[test]
    fn subcommand_aliases_work() {
        assert!(matches!(
            Cli::parse_from(["craft", "m", "song"]).command,
            Commands::Model(_)
        ));
        assert!(matches!(
            Cli::parse_from(["craft", "r", "song"]).command,
            Commands::Resource(_)
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["craft", "--quiet", "--verbose", "model", "song"]);
        assert!(result.is_err());
    }
}
