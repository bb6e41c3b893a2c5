//! Per-descriptor render context.
//!
//! Each descriptor gets its own immutable [`RenderContext`], built fresh
//! from the naming set, the owning sub-generator's settings, and the plan's
//! template URL. Nothing is mutated between iterations - the variables a
//! template sees are fully determined before rendering starts.

use std::collections::HashMap;

use crate::domain::config::SubGeneratorConfig;
use crate::domain::naming::NamingSet;
use crate::domain::paths::RelativePath;

/// Variable substitution context handed to the template renderer.
///
/// Standard variables (the contract between modgen and its templates):
///
/// | Variable        | Example (`test-name` in project `tmp`)   |
/// |-----------------|------------------------------------------|
/// | `appname`       | `tmp`                                    |
/// | `scriptAppName` | `tmp`                                    |
/// | `cameledName`   | `testName`                               |
/// | `classedName`   | `TestName`                               |
/// | `sluggedName`   | `test-name`                              |
/// | `dashedName`    | `test-name`                              |
/// | `humanizedName` | `Test name`                              |
/// | `nameSuffix`    | sub-generator's identifier suffix        |
/// | `svcName`       | `TestName`                               |
/// | `tplUrl`        | `scripts/test-name/test-name-cp.html` or empty |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Build the context for one descriptor.
    pub fn for_descriptor(
        app_name: &str,
        script_app_name: &str,
        naming: &NamingSet,
        sub: &SubGeneratorConfig,
        template_url: Option<&RelativePath>,
    ) -> Self {
        let mut variables = HashMap::new();
        variables.insert("appname".into(), app_name.into());
        variables.insert("scriptAppName".into(), script_app_name.into());
        variables.insert("cameledName".into(), naming.camel.clone());
        variables.insert("classedName".into(), naming.classed.clone());
        variables.insert("sluggedName".into(), naming.slug.clone());
        variables.insert("dashedName".into(), naming.dash.clone());
        variables.insert("humanizedName".into(), naming.human.clone());
        variables.insert("nameSuffix".into(), sub.name_suffix.clone());
        variables.insert("svcName".into(), naming.classed.clone());
        variables.insert(
            "tplUrl".into(),
            template_url.map(|p| p.to_string()).unwrap_or_default(),
        );
        Self { variables }
    }

    /// Add or replace a variable, consuming self.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// All variables, for renderers that iterate.
    pub fn variables(&self) -> &HashMap<String, String> {
        &self.variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::GeneratorConfig;

    fn context(template_url: Option<&RelativePath>) -> RenderContext {
        let cfg = GeneratorConfig::default();
        let naming = NamingSet::derive("test-name").unwrap();
        RenderContext::for_descriptor(
            "tmp",
            "tmp",
            &naming,
            cfg.sub_generator("cp").unwrap(),
            template_url,
        )
    }

    #[test]
    fn standard_variables_are_present() {
        let ctx = context(None);
        assert_eq!(ctx.get("appname"), Some("tmp"));
        assert_eq!(ctx.get("cameledName"), Some("testName"));
        assert_eq!(ctx.get("classedName"), Some("TestName"));
        assert_eq!(ctx.get("dashedName"), Some("test-name"));
        assert_eq!(ctx.get("svcName"), Some("TestName"));
    }

    #[test]
    fn missing_template_url_is_empty_sentinel() {
        let ctx = context(None);
        assert_eq!(ctx.get("tplUrl"), Some(""));
    }

    #[test]
    fn template_url_renders_as_forward_slash_path() {
        let url = RelativePath::parse("scripts/test-name/test-name-cp.html").unwrap();
        let ctx = context(Some(&url));
        assert_eq!(ctx.get("tplUrl"), Some("scripts/test-name/test-name-cp.html"));
    }

    #[test]
    fn with_variable_overrides() {
        let ctx = context(None).with_variable("appname", "other");
        assert_eq!(ctx.get("appname"), Some("other"));
    }

    #[test]
    fn unknown_variable_is_none() {
        assert_eq!(context(None).get("nope"), None);
    }
}
