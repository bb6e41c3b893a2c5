//! In-memory template store for testing.

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use modgen_core::application::ports::{PortError, TemplateStore};

use super::builtin::{BUILTIN_IDS, builtin_template};

/// In-memory template store. Ignores the template root; inserted sources
/// shadow anything preloaded.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    templates: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryTemplateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with the built-in template set.
    pub fn with_builtins() -> Self {
        let store = Self::new();
        for id in BUILTIN_IDS {
            store.insert(id, builtin_template(id).unwrap_or_default());
        }
        store
    }

    /// Add or replace a template source.
    pub fn insert(&self, template_id: &str, source: &str) {
        let mut templates = self.templates.write().unwrap_or_else(|e| e.into_inner());
        templates.insert(template_id.to_string(), source.to_string());
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn load(&self, template_id: &str, _root: &Option<PathBuf>) -> Result<String, PortError> {
        let templates = self.templates.read().unwrap_or_else(|e| e.into_inner());
        templates
            .get(template_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(template_id.to_string()))
    }
}
