//! Disk-backed template store with built-in fallback.

use std::io;
use std::path::PathBuf;

use modgen_core::application::ports::{PortError, TemplateStore};
use tracing::debug;

use super::builtin::builtin_template;

/// Production template store: a file under the configured template root
/// shadows the built-in template of the same name.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTemplateStore;

impl LocalTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for LocalTemplateStore {
    fn load(&self, template_id: &str, root: &Option<PathBuf>) -> Result<String, PortError> {
        if let Some(root) = root {
            let path = root.join(template_id);
            match std::fs::read_to_string(&path) {
                Ok(source) => {
                    debug!(template_id, root = %root.display(), "custom template");
                    return Ok(source);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(PortError::Io(format!("reading {}: {e}", path.display()))),
            }
        }

        builtin_template(template_id)
            .map(str::to_string)
            .ok_or_else(|| PortError::NotFound(template_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_builtin() {
        let store = LocalTemplateStore::new();
        let source = store.load("cp.js", &None).unwrap();
        assert!(source.contains("directive"));
    }

    #[test]
    fn custom_root_shadows_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cp.js"), "custom {{cameledName}}").unwrap();

        let store = LocalTemplateStore::new();
        let root = Some(dir.path().to_path_buf());
        let source = store.load("cp.js", &root).unwrap();
        assert_eq!(source, "custom {{cameledName}}");
    }

    #[test]
    fn custom_root_without_the_file_still_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalTemplateStore::new();
        let root = Some(dir.path().to_path_buf());
        assert!(store.load("cp.js", &root).is_ok());
    }

    #[test]
    fn unknown_template_is_not_found() {
        let store = LocalTemplateStore::new();
        assert!(matches!(
            store.load("widget.js", &None),
            Err(PortError::NotFound(_))
        ));
    }
}
