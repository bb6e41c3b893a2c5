//! Override classification: which inline template, if any, replaces a
//! built-in template for a given descriptor.
//!
//! Classification is by template-id suffix against the configured test
//! suffix and extension map. Precedence is explicit and total - a malformed
//! extension configuration where several suffixes match resolves as
//! test-script > plain-script > view-template > stylesheet, never
//! first-match-wins over an unordered check.

use crate::domain::config::GeneratorConfig;
use crate::domain::file_plan::FileDescriptor;

/// The four override categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    TestScript,
    Script,
    ViewTemplate,
    Stylesheet,
}

impl FileCategory {
    /// Classify a template id, or `None` when no configured suffix matches.
    pub fn classify(template_id: &str, cfg: &GeneratorConfig) -> Option<Self> {
        let test_script = format!("{}{}", cfg.test_suffix, cfg.file_ext.script);
        if template_id.ends_with(&test_script) {
            Some(Self::TestScript)
        } else if template_id.ends_with(&cfg.file_ext.script) {
            Some(Self::Script)
        } else if template_id.ends_with(&cfg.file_ext.view) {
            Some(Self::ViewTemplate)
        } else if template_id.ends_with(&cfg.file_ext.style) {
            Some(Self::Stylesheet)
        } else {
            None
        }
    }
}

/// Find the inline override template for a descriptor, scoped to its owning
/// sub-generator (or the invoked one when none owns it).
pub fn find_override<'a>(
    descriptor: &FileDescriptor,
    cfg: &'a GeneratorConfig,
    current_generator: &str,
) -> Option<&'a str> {
    let category = FileCategory::classify(&descriptor.template_id, cfg)?;
    let owner = descriptor.owner.as_deref().unwrap_or(current_generator);
    let sub = cfg.sub_generators.get(owner)?;

    let slot = match category {
        FileCategory::TestScript => &sub.overrides.test_script,
        FileCategory::Script => &sub.overrides.script,
        FileCategory::ViewTemplate => &sub.overrides.view_template,
        FileCategory::Stylesheet => &sub.overrides.stylesheet,
    };
    slot.as_deref()
}
