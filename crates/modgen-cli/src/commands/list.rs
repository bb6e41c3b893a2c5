//! Implementation of the `modgen list` command.

use modgen_core::domain::ConfigResolver;

use crate::{
    cli::{ListArgs, ListFormat},
    config::ProjectContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `modgen list` command: show every configured sub-generator
/// under the effective (defaults + persisted) configuration.
pub fn execute(args: ListArgs, context: ProjectContext, output: OutputManager) -> CliResult<()> {
    let resolved = ConfigResolver::resolve(&context.persisted);
    for warning in &resolved.warnings {
        output.warning(&warning.to_string())?;
    }
    let cfg = resolved.config;

    match args.format {
        ListFormat::List => {
            for id in cfg.sub_generators.keys() {
                output.print(id)?;
            }
        }
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&cfg.sub_generators).map_err(|e| {
                CliError::ConfigError {
                    message: format!("serializing sub-generators: {e}"),
                    source: Some(Box::new(e)),
                }
            })?;
            output.print(&json)?;
        }
        ListFormat::Table => {
            output.header("Configured sub-generators")?;
            output.print(&format!(
                "{:<10} {:<8} {:<12} {:<10} {}",
                "ID", "SUFFIX", "GLOBAL DIR", "FOLDER", "TEMPLATES"
            ))?;
            for (id, sub) in &cfg.sub_generators {
                let global_dir = if sub.global_dir.is_empty() {
                    "-"
                } else {
                    sub.global_dir.as_str()
                };
                output.print(&format!(
                    "{:<10} {:<8} {:<12} {:<10} {}",
                    id,
                    sub.suffix,
                    global_dir,
                    if sub.create_directory { "yes" } else { "no" },
                    if sub.has_template { "yes" } else { "no" },
                ))?;
            }
        }
    }

    Ok(())
}
