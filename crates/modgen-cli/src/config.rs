//! Project context: persisted configuration and app identity.
//!
//! Everything here is discovered from the invocation directory:
//!
//! - `.modgen.json` (or the `--config` path) holds the persisted generator
//!   configuration as free-form JSON. When the project file is missing the
//!   per-user `config.json` under the platform config directory is tried
//!   next, then `null`. A file that exists but is not valid JSON is a hard
//!   configuration error, never silently ignored.
//! - `bower.json` provides the app identity: `name` for display and
//!   `moduleName` for the script module templates register against. Both
//!   fall back to the directory basename.
//!
//! The CLI layer owns this discovery; the core crate only ever sees the
//! parsed `Value` and the two name strings.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::Value;
use tracing::debug;

/// Default project configuration file name.
pub const CONFIG_FILE: &str = ".modgen.json";

/// Everything the `new` pipeline needs from the invocation directory.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Parsed persisted configuration, `Value::Null` when absent.
    pub persisted: Value,
    /// Path the configuration was (or would be) read from.
    pub config_path: PathBuf,
    /// Human-readable project name.
    pub app_name: String,
    /// Script module name templates register artifacts against.
    pub script_app_name: String,
}

impl ProjectContext {
    /// Discover the project context for a directory.
    pub fn load(dir: &Path, config_override: Option<&PathBuf>) -> anyhow::Result<Self> {
        let config_path = match config_override {
            Some(path) => path.clone(),
            None => dir.join(CONFIG_FILE),
        };

        let persisted = match std::fs::read_to_string(&config_path) {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("parsing {}", config_path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %config_path.display(), "no persisted configuration");
                // An explicit --config path that is missing stays Null; only
                // the default lookup falls back to the per-user file.
                if config_override.is_none() {
                    load_user_config()?
                } else {
                    Value::Null
                }
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", config_path.display()));
            }
        };

        let fallback = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "app".to_string());
        let (app_name, script_app_name) = read_app_identity(dir, &fallback);

        Ok(Self {
            persisted,
            config_path,
            app_name,
            script_app_name,
        })
    }

}

/// Per-user fallback configuration, read from the platform config directory
/// (`~/.config/modgen/config.json` on Linux). Absence resolves to `Null`;
/// a malformed file is a hard error like the project-level one.
fn load_user_config() -> anyhow::Result<Value> {
    let Some(dirs) = directories::ProjectDirs::from("com", "modgen", "modgen") else {
        return Ok(Value::Null);
    };
    let path = dirs.config_dir().join("config.json");
    match std::fs::read_to_string(&path) {
        Ok(raw) => {
            debug!(path = %path.display(), "using per-user configuration");
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        Err(_) => Ok(Value::Null),
    }
}

/// Pull `name` / `moduleName` out of `bower.json`, tolerating its absence
/// and any malformation: app identity is cosmetic, so it degrades to the
/// directory basename instead of failing the run.
fn read_app_identity(dir: &Path, fallback: &str) -> (String, String) {
    let manifest: Value = match std::fs::read_to_string(dir.join("bower.json")) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or(Value::Null),
        Err(_) => Value::Null,
    };

    let app_name = manifest
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string();
    let script_app_name = manifest
        .get("moduleName")
        .and_then(Value::as_str)
        .unwrap_or(&app_name)
        .to_string();

    (app_name, script_app_name)
}
