//! Simple variable substitution renderer.
//!
//! Two constructs, nothing else:
//!
//! - `{{name}}` substitutes a context variable;
//! - `{{#name}}...{{/name}}` keeps the enclosed block only when the
//!   variable is non-empty (the empty string is the falsy sentinel).
//!
//! Referencing a variable the context does not define is a render error,
//! never silent empty output. A typo in a template surfaces on the first
//! run instead of producing subtly broken files.

use modgen_core::application::ports::{PortError, TemplateRenderer};
use modgen_core::domain::RenderContext;
use tracing::instrument;

/// Simple renderer using basic variable substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all)]
    fn render(&self, source: &str, context: &RenderContext) -> Result<String, PortError> {
        let expanded = expand_sections(source, context)?;
        substitute(&expanded, context)
    }
}

/// Resolve `{{#name}}...{{/name}}` blocks. Sections may nest.
fn expand_sections(source: &str, ctx: &RenderContext) -> Result<String, PortError> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{#") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 3..];
        let name_end = after
            .find("}}")
            .ok_or_else(|| PortError::Failed("unterminated section tag".into()))?;
        let name = after[..name_end].trim();
        let body_and_rest = &after[name_end + 2..];

        let close = format!("{{{{/{name}}}}}");
        let body_end = body_and_rest
            .find(&close)
            .ok_or_else(|| PortError::Failed(format!("unclosed section '{name}'")))?;

        let value = lookup(ctx, name)?;
        if !value.is_empty() {
            out.push_str(&expand_sections(&body_and_rest[..body_end], ctx)?);
        }
        rest = &body_and_rest[body_end + close.len()..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Substitute `{{name}}` occurrences.
fn substitute(source: &str, ctx: &RenderContext) -> Result<String, PortError> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .ok_or_else(|| PortError::Failed("unterminated variable tag".into()))?;
        let name = after[..end].trim();
        out.push_str(lookup(ctx, name)?);
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    Ok(out)
}

fn lookup<'a>(ctx: &'a RenderContext, name: &str) -> Result<&'a str, PortError> {
    ctx.get(name)
        .ok_or_else(|| PortError::Failed(format!("unknown variable '{name}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        use modgen_core::domain::{GeneratorConfig, NamingSet};
        let cfg = GeneratorConfig::default();
        let naming = NamingSet::derive("test-name").unwrap();
        RenderContext::for_descriptor("tmp", "tmp", &naming, cfg.sub_generator("cp").unwrap(), None)
    }

    fn render(source: &str, ctx: &RenderContext) -> Result<String, PortError> {
        SimpleRenderer::new().render(source, ctx)
    }

    #[test]
    fn substitutes_variables() {
        let out = render("module('{{scriptAppName}}').x('{{cameledName}}')", &ctx()).unwrap();
        assert_eq!(out, "module('tmp').x('testName')");
    }

    #[test]
    fn unknown_variable_is_an_error() {
        assert!(render("{{nope}}", &ctx()).is_err());
    }

    #[test]
    fn empty_section_variable_drops_block() {
        let out = render("a{{#tplUrl}}templateUrl: '{{tplUrl}}',{{/tplUrl}}b", &ctx()).unwrap();
        assert_eq!(out, "ab");
    }

    #[test]
    fn non_empty_section_variable_keeps_block() {
        let ctx = ctx().with_variable("tplUrl", "scripts/x.html");
        let out = render("{{#tplUrl}}templateUrl: '{{tplUrl}}'{{/tplUrl}}", &ctx).unwrap();
        assert_eq!(out, "templateUrl: 'scripts/x.html'");
    }

    #[test]
    fn sections_nest() {
        let ctx = ctx()
            .with_variable("outer", "y")
            .with_variable("inner", "");
        let out = render("{{#outer}}[{{#inner}}never{{/inner}}]{{/outer}}", &ctx).unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn unclosed_section_is_an_error() {
        assert!(render("{{#tplUrl}}dangling", &ctx()).is_err());
    }

    #[test]
    fn unterminated_variable_is_an_error() {
        assert!(render("{{cameledName", &ctx()).is_err());
    }

    #[test]
    fn plain_text_passes_through() {
        let out = render("no variables here", &ctx()).unwrap();
        assert_eq!(out, "no variables here");
    }
}
