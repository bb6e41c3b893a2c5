//! Implementation of the `modgen config` subcommands.
//!
//! Read-only inspection of the effective configuration: the persisted file
//! is authored by hand, so there is no `set` command writing it back.

use serde_json::Value;

use modgen_core::domain::ConfigResolver;

use crate::{
    cli::ConfigCommands,
    config::ProjectContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a `modgen config` subcommand.
pub fn execute(
    cmd: ConfigCommands,
    context: ProjectContext,
    output: OutputManager,
) -> CliResult<()> {
    let resolved = ConfigResolver::resolve(&context.persisted);
    for warning in &resolved.warnings {
        output.warning(&warning.to_string())?;
    }
    let effective = serde_json::to_value(&resolved.config).map_err(|e| CliError::ConfigError {
        message: format!("serializing configuration: {e}"),
        source: Some(Box::new(e)),
    })?;

    match cmd {
        ConfigCommands::Get { key } => {
            let value = lookup(&effective, &key).ok_or_else(|| CliError::InvalidInput {
                message: format!("unknown configuration key '{key}'"),
            })?;
            output.print(&render_value(value))?;
        }
        ConfigCommands::List => {
            let json =
                serde_json::to_string_pretty(&effective).map_err(|e| CliError::ConfigError {
                    message: format!("serializing configuration: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&json)?;
        }
        ConfigCommands::Path => {
            output.print(&context.config_path.display().to_string())?;
        }
    }

    Ok(())
}

/// Walk a dotted key path through a JSON object tree.
fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.')
        .try_fold(root, |value, segment| value.get(segment))
}

/// Scalars print bare, everything else as JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_walks_nested_keys() {
        let root = json!({ "fileExt": { "style": ".scss" } });
        assert_eq!(lookup(&root, "fileExt.style"), Some(&json!(".scss")));
        assert_eq!(lookup(&root, "fileExt.missing"), None);
        assert_eq!(lookup(&root, "nope"), None);
    }

    #[test]
    fn strings_render_bare() {
        assert_eq!(render_value(&json!(".scss")), ".scss");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!({ "a": 1 })), r#"{"a":1}"#);
    }
}
