//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use modgen_core::domain::ServiceKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "modgen",
    bin_name = "modgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} AngularJS-style module artifact generator",
    long_about = "Modgen scaffolds module artifacts (components, routes, \
                  services, factories) into an existing application, \
                  following the project's .modgen.json conventions.",
    after_help = "EXAMPLES:\n\
        \x20 modgen new component nav-bar\n\
        \x20 modgen new component nav-bar shared/widgets\n\
        \x20 modgen new service session --skip-inject\n\
        \x20 modgen completions bash > /usr/share/bash-completion/completions/modgen",
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
    /// Generate module artifacts.
    #[command(
        visible_alias = "n",
        about = "Generate module artifacts",
        after_help = "EXAMPLES:\n\
            \x20 modgen new component nav-bar\n\
            \x20 modgen new route login\n\
            \x20 modgen new component user-card users --create-service service\n\
            \x20 modgen new component nav-bar --no-template --dry-run"
    )]
    New(NewArgs),

    /// List configured sub-generators.
    #[command(
        visible_alias = "ls",
        about = "List configured sub-generators",
        after_help = "EXAMPLES:\n\
            \x20 modgen list\n\
            \x20 modgen list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 modgen completions bash > ~/.local/share/bash-completion/completions/modgen\n\
            \x20 modgen completions zsh  > ~/.zfunc/_modgen\n\
            \x20 modgen completions fish > ~/.config/fish/completions/modgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 modgen config list\n\
            \x20 modgen config get fileExt.style\n\
            \x20 modgen config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `modgen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Which artifact kind to generate.
    #[arg(value_name = "GENERATOR", value_enum, help = "Artifact kind")]
    pub generator: Generator,

    /// Artifact name; any separator style works (nav-bar, navBar, nav_bar).
    #[arg(value_name = "NAME", help = "Artifact name")]
    pub name: String,

    /// Target folder under the modules directory. Leading `app/` and
    /// `scripts/` segments are accepted and stripped.
    #[arg(value_name = "FOLDER", help = "Target folder (optional)")]
    pub target_folder: Option<String>,

    /// Ignore the persisted project configuration.
    #[arg(long = "use-defaults", help = "Ignore .modgen.json and use defaults")]
    pub use_defaults: bool,

    /// Also generate a service or factory pair alongside the artifact.
    #[arg(
        long = "create-service",
        value_name = "KIND",
        value_enum,
        help = "Also generate a service or factory"
    )]
    pub create_service: Option<ServiceArg>,

    /// Skip the view + stylesheet pair.
    #[arg(long = "no-template", help = "Skip view and stylesheet files")]
    pub no_template: bool,

    /// Do not create the same-named parent folder.
    #[arg(long = "no-parent-folder", help = "Emit directly into the target folder")]
    pub no_parent_folder: bool,

    /// Skip the asset-injection hook after generation.
    #[arg(long = "skip-inject", help = "Skip the inject hook")]
    pub skip_inject: bool,

    /// Open the generated files in the configured editor.
    #[arg(
        short = 'e',
        long = "open-in-editor",
        help = "Open generated files in the editor"
    )]
    pub open_in_editor: bool,

    /// Preview the file plan without writing anything.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Supported sub-generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Generator {
    /// Also accepted as `cp`.
    #[value(alias = "cp")]
    Component,
    /// Also accepted as `rt`.
    #[value(alias = "rt")]
    Route,
    Service,
    Factory,
}

impl Generator {
    /// Sub-generator id used by the configuration schema.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Component => "cp",
            Self::Route => "rt",
            Self::Service => "service",
            Self::Factory => "factory",
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Component => write!(f, "component"),
            Self::Route => write!(f, "route"),
            Self::Service => write!(f, "service"),
            Self::Factory => write!(f, "factory"),
        }
    }
}

/// `--create-service` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ServiceArg {
    Service,
    Factory,
}

impl From<ServiceArg> for ServiceKind {
    fn from(value: ServiceArg) -> Self {
        match value {
            ServiceArg::Service => ServiceKind::Service,
            ServiceArg::Factory => ServiceKind::Factory,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `modgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON object.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `modgen completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `modgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of an effective configuration key.
    Get {
        /// Dotted key path, e.g. `fileExt.style`.
        key: String,
    },
    /// Print the whole effective configuration as JSON.
    List,
    /// Print the path to the project configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
