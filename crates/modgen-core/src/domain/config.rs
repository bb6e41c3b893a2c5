//! Generator configuration: typed schema, defaults, and layered resolution.
//!
//! The persisted project file (`.modgen.json`) is a free-form JSON object
//! with JS-heritage camelCase keys. [`ConfigResolver::resolve`] merges it
//! over the built-in defaults with explicit precedence rules:
//!
//! - object-typed defaults deep-merge recursively; a non-object override of
//!   an object-typed default is malformed and recovers to the default, with
//!   the condition surfaced as a warning;
//! - scalar defaults are replaced by persisted values of the same JSON type,
//!   and an explicit `false` always survives (a persisted "disable this
//!   feature" is never bumped back to a truthy default);
//! - `null` is accepted only where the default itself is nullable;
//! - keys unknown to the default schema are ignored.
//!
//! The merged value is then deserialized back into [`GeneratorConfig`]; any
//! key whose merged value still fails the typed schema is reverted to its
//! default individually, again with a warning. Resolution never fails — the
//! only fatal configuration condition (a missing custom template root) is
//! checked by the application layer, which owns the filesystem port.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::error::DomainError;
use crate::domain::naming::NameStyle;

// ── Schema ────────────────────────────────────────────────────────────────────

/// The effective generator configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Application root directory (conventionally `app`).
    pub app_path: String,
    /// Directory names recognized and stripped from explicit path arguments.
    pub dirs: Dirs,
    /// File extensions per artifact kind.
    pub file_ext: FileExt,
    /// Prefix for emitted stylesheet partials.
    pub style_prefix: String,
    /// Suffix inserted before the script extension for test files.
    pub test_suffix: String,
    /// Naming convention for on-disk path segments and file names.
    pub path_output_style: NameStyle,
    /// Command spawned by the open-in-editor hook.
    pub editor_command: String,
    /// Whether view + style files are planned (for sub-generators that
    /// have templates at all).
    pub create_template: bool,
    /// Plan an additional service or factory pair.
    pub create_service: Option<ServiceKind>,
    /// Skip the primary implementation + test pair.
    pub skip_main_files: bool,
    /// Custom template root overriding the built-in templates. Must exist
    /// on disk when set; checked before any file plan is built.
    pub template_root: Option<PathBuf>,
    /// Per-sub-generator settings, keyed by generator id.
    pub sub_generators: BTreeMap<String, SubGeneratorConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dirs {
    pub app: String,
    pub app_modules: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileExt {
    pub script: String,
    pub view: String,
    pub style: String,
}

/// Settings for one sub-generator (component, route, service, factory).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubGeneratorConfig {
    /// Suffix appended to identifier names inside templates.
    pub name_suffix: String,
    /// Prefix for the standard file name.
    pub prefix: String,
    /// Suffix for the standard file name (before the extension).
    pub suffix: String,
    /// Default target directory when no explicit path argument is given.
    pub global_dir: String,
    /// Create a same-named parent folder for the emitted files.
    pub create_directory: bool,
    /// Whether this generator has view/style templates at all.
    pub has_template: bool,
    /// Inline template overrides per file category.
    pub overrides: OverrideTemplates,
}

/// Inline template strings replacing the built-in templates, per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideTemplates {
    pub script: Option<String>,
    pub test_script: Option<String>,
    pub view_template: Option<String>,
    pub stylesheet: Option<String>,
}

/// Which extra pair to plan alongside the main files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Service,
    Factory,
}

impl ServiceKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Factory => "factory",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "service" => Ok(Self::Service),
            "factory" => Ok(Self::Factory),
            other => Err(DomainError::MalformedConfigKey {
                key: "createService".into(),
                reason: format!("expected 'service' or 'factory', got '{other}'"),
            }),
        }
    }
}

// ── Defaults ──────────────────────────────────────────────────────────────────

impl Default for GeneratorConfig {
    fn default() -> Self {
        let sub = |suffix: &str, create_directory: bool, has_template: bool| SubGeneratorConfig {
            name_suffix: String::new(),
            prefix: String::new(),
            suffix: suffix.into(),
            global_dir: String::new(),
            create_directory,
            has_template,
            overrides: OverrideTemplates::default(),
        };

        let mut sub_generators = BTreeMap::new();
        sub_generators.insert("cp".into(), sub("-cp", true, true));
        sub_generators.insert("rt".into(), sub("-rt", true, true));
        sub_generators.insert("service".into(), sub("-s", false, false));
        sub_generators.insert("factory".into(), sub("-f", false, false));

        Self {
            app_path: "app".into(),
            dirs: Dirs {
                app: "app".into(),
                app_modules: "scripts".into(),
            },
            file_ext: FileExt {
                script: ".js".into(),
                view: ".html".into(),
                style: ".scss".into(),
            },
            style_prefix: "_".into(),
            test_suffix: ".spec".into(),
            path_output_style: NameStyle::Dash,
            editor_command: "subl".into(),
            create_template: true,
            create_service: None,
            skip_main_files: false,
            template_root: None,
            sub_generators,
        }
    }
}

impl GeneratorConfig {
    /// Look up a sub-generator by id.
    pub fn sub_generator(&self, id: &str) -> Result<&SubGeneratorConfig, DomainError> {
        self.sub_generators
            .get(id)
            .ok_or_else(|| DomainError::UnknownGenerator { id: id.into() })
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Result of merging persisted configuration over the defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: GeneratorConfig,
    /// Malformed keys that were reverted to defaults. Never silently
    /// swallowed: callers log these at WARN.
    pub warnings: Vec<DomainError>,
}

/// Merges the built-in defaults with the persisted project configuration.
pub struct ConfigResolver;

impl ConfigResolver {
    /// Resolve the effective configuration for one invocation.
    ///
    /// A non-object `persisted` value (missing file, `null`) resolves to the
    /// defaults unchanged.
    pub fn resolve(persisted: &Value) -> ResolvedConfig {
        let fallback = GeneratorConfig::default();
        let mut warnings = Vec::new();

        let Ok(Value::Object(defaults)) = serde_json::to_value(&fallback) else {
            // Serializing the default schema cannot realistically fail; if it
            // does, the defaults themselves are still a valid configuration.
            return ResolvedConfig {
                config: fallback,
                warnings,
            };
        };

        let empty = Map::new();
        let persisted = match persisted {
            Value::Object(map) => map,
            _ => &empty,
        };

        let merged = merge_objects("", &defaults, persisted, &mut warnings);

        let config = match serde_json::from_value::<GeneratorConfig>(Value::Object(merged.clone()))
        {
            Ok(config) => config,
            Err(_) => repair(&defaults, merged, &mut warnings).unwrap_or(fallback),
        };

        ResolvedConfig { config, warnings }
    }
}

/// Merge a persisted object over a default object, walking only the default
/// key set (unknown persisted keys are ignored).
fn merge_objects(
    prefix: &str,
    defaults: &Map<String, Value>,
    persisted: &Map<String, Value>,
    warnings: &mut Vec<DomainError>,
) -> Map<String, Value> {
    let mut out = Map::new();
    for (key, default) in defaults {
        let path = key_path(prefix, key);
        let value = match persisted.get(key) {
            Some(value) => merge_value(&path, default, value, warnings),
            None => default.clone(),
        };
        out.insert(key.clone(), value);
    }
    out
}

fn merge_value(
    path: &str,
    default: &Value,
    persisted: &Value,
    warnings: &mut Vec<DomainError>,
) -> Value {
    match (default, persisted) {
        (Value::Object(dmap), Value::Object(pmap)) => {
            Value::Object(merge_objects(path, dmap, pmap, warnings))
        }
        (Value::Object(_), _) => {
            warnings.push(malformed(path, "expected an object"));
            default.clone()
        }
        // Nullable defaults accept anything here; the typed pass catches
        // values that still do not fit the schema.
        (Value::Null, _) => persisted.clone(),
        // An explicit false or same-typed scalar wins over the default.
        (Value::Bool(_), Value::Bool(_))
        | (Value::String(_), Value::String(_))
        | (Value::Number(_), Value::Number(_)) => persisted.clone(),
        _ => {
            warnings.push(malformed(path, &format!("expected {}", type_name(default))));
            default.clone()
        }
    }
}

/// Revert top-level keys whose merged value fails the typed schema, one by
/// one, so a single bad key never discards the rest of the file.
fn repair(
    defaults: &Map<String, Value>,
    merged: Map<String, Value>,
    warnings: &mut Vec<DomainError>,
) -> Option<GeneratorConfig> {
    let mut repaired = defaults.clone();
    for (key, value) in merged {
        if defaults.get(&key) == Some(&value) {
            continue;
        }
        let mut candidate = defaults.clone();
        candidate.insert(key.clone(), value.clone());
        if serde_json::from_value::<GeneratorConfig>(Value::Object(candidate)).is_ok() {
            repaired.insert(key, value);
        } else {
            warnings.push(malformed(&key, "value does not match the schema"));
        }
    }
    serde_json::from_value(Value::Object(repaired)).ok()
}

fn malformed(key: &str, reason: &str) -> DomainError {
    DomainError::MalformedConfigKey {
        key: key.into(),
        reason: reason.into(),
    }
}

fn key_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_persisted_yields_defaults_unchanged() {
        let resolved = ConfigResolver::resolve(&json!({}));
        assert_eq!(resolved.config, GeneratorConfig::default());
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn null_persisted_yields_defaults_unchanged() {
        let resolved = ConfigResolver::resolve(&Value::Null);
        assert_eq!(resolved.config, GeneratorConfig::default());
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn scalar_override_wins() {
        let resolved = ConfigResolver::resolve(&json!({ "stylePrefix": "__" }));
        assert_eq!(resolved.config.style_prefix, "__");
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn explicit_false_is_preserved() {
        // A persisted "disable this feature" must not be bumped back to the
        // truthy default.
        let resolved = ConfigResolver::resolve(&json!({ "createTemplate": false }));
        assert!(!resolved.config.create_template);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn deep_merge_keeps_unrelated_leaves() {
        let resolved = ConfigResolver::resolve(&json!({ "fileExt": { "style": ".less" } }));
        assert_eq!(resolved.config.file_ext.style, ".less");
        assert_eq!(resolved.config.file_ext.script, ".js");
        assert_eq!(resolved.config.file_ext.view, ".html");
    }

    #[test]
    fn deep_merge_reaches_sub_generators() {
        let resolved = ConfigResolver::resolve(&json!({
            "subGenerators": { "cp": { "suffix": "-comp" } }
        }));
        let cp = resolved.config.sub_generator("cp").unwrap();
        assert_eq!(cp.suffix, "-comp");
        assert!(cp.create_directory, "unrelated leaf must keep its default");
    }

    #[test]
    fn scalar_over_object_default_is_malformed_and_recovers() {
        let resolved = ConfigResolver::resolve(&json!({ "fileExt": ".js" }));
        assert_eq!(resolved.config.file_ext, GeneratorConfig::default().file_ext);
        assert!(matches!(
            resolved.warnings.as_slice(),
            [DomainError::MalformedConfigKey { key, .. }] if key == "fileExt"
        ));
    }

    #[test]
    fn type_mismatch_on_scalar_recovers_with_warning() {
        let resolved = ConfigResolver::resolve(&json!({ "skipMainFiles": "yes" }));
        assert!(!resolved.config.skip_main_files);
        assert_eq!(resolved.warnings.len(), 1);
    }

    #[test]
    fn null_over_required_scalar_recovers_with_warning() {
        let resolved = ConfigResolver::resolve(&json!({ "appPath": null }));
        assert_eq!(resolved.config.app_path, "app");
        assert_eq!(resolved.warnings.len(), 1);
    }

    #[test]
    fn nullable_key_accepts_string() {
        let resolved = ConfigResolver::resolve(&json!({ "createService": "factory" }));
        assert_eq!(resolved.config.create_service, Some(ServiceKind::Factory));
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn invalid_enum_string_reverts_that_key_only() {
        let resolved = ConfigResolver::resolve(&json!({
            "createService": "widget",
            "stylePrefix": "__"
        }));
        assert_eq!(resolved.config.create_service, None);
        assert_eq!(resolved.config.style_prefix, "__", "good keys survive");
        assert!(matches!(
            resolved.warnings.as_slice(),
            [DomainError::MalformedConfigKey { key, .. }] if key == "createService"
        ));
    }

    #[test]
    fn unknown_persisted_keys_are_ignored() {
        let resolved = ConfigResolver::resolve(&json!({ "notAKey": 42 }));
        assert_eq!(resolved.config, GeneratorConfig::default());
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn template_root_round_trips() {
        let resolved = ConfigResolver::resolve(&json!({ "templateRoot": "my/templates" }));
        assert_eq!(
            resolved.config.template_root,
            Some(PathBuf::from("my/templates"))
        );
    }

    #[test]
    fn defaults_include_all_four_sub_generators() {
        let cfg = GeneratorConfig::default();
        for id in ["cp", "rt", "service", "factory"] {
            assert!(cfg.sub_generator(id).is_ok(), "missing {id}");
        }
        assert_eq!(cfg.sub_generator("cp").unwrap().suffix, "-cp");
        assert_eq!(cfg.sub_generator("service").unwrap().suffix, "-s");
        assert_eq!(cfg.sub_generator("factory").unwrap().suffix, "-f");
    }

    #[test]
    fn unknown_sub_generator_errors() {
        let cfg = GeneratorConfig::default();
        assert!(matches!(
            cfg.sub_generator("widget"),
            Err(DomainError::UnknownGenerator { .. })
        ));
    }

    #[test]
    fn resolution_is_deterministic() {
        let persisted = json!({ "createTemplate": false, "subGenerators": { "rt": { "globalDir": "routes" } } });
        let a = ConfigResolver::resolve(&persisted);
        let b = ConfigResolver::resolve(&persisted);
        assert_eq!(a.config, b.config);
    }
}
